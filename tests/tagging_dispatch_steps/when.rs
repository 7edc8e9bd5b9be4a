//! When steps for tagging dispatch BDD scenarios.

use super::world::{DispatchWorld, parse_names, run_async};
use folksonomy::tagging::domain::ServiceDescriptor;
use rstest_bdd_macros::when;

#[when(r#"services "{names}" are configured"#)]
fn configure_services(world: &mut DispatchWorld, names: String) {
    let descriptors: Vec<ServiceDescriptor> = parse_names(&names)
        .into_iter()
        .map(ServiceDescriptor::bare)
        .collect();
    world.last_configure_result = Some(world.dispatcher.configure_services(descriptors));
}

#[when(r#"the "{name}" service is configured with API key "{key}""#)]
fn configure_with_api_key(world: &mut DispatchWorld, name: String, key: String) {
    let descriptor = ServiceDescriptor::with_api_key(name, key);
    world.last_configure_result = Some(
        world
            .dispatcher
            .add_service(&descriptor)
            .map(|_client| ()),
    );
}

#[when(r#"tags are requested for "{content}""#)]
fn request_tags(world: &mut DispatchWorld, content: String) {
    world.last_dispatch_result = Some(run_async(world.dispatcher.get_tags(&content)));
    world.last_content = Some(content);
}
