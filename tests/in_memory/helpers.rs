//! Shared test helpers for tagging dispatch integration tests.

use folksonomy::tagging::adapters::memory::{ScriptedClient, ScriptedClientHandle};
use folksonomy::tagging::domain::{ServiceName, Tag};
use folksonomy::tagging::services::{ServiceRegistry, TaggingDispatcher};
use rstest::fixture;

/// Parses a canonical service name.
pub fn service_name(raw: &str) -> ServiceName {
    ServiceName::new(raw).expect("valid service name")
}

/// Builds a tag from a label.
pub fn tag(label: &str) -> Tag {
    Tag::new(label).expect("valid tag")
}

/// Installs a fully capable scripted service and returns its handle.
pub fn install_scripted(registry: &mut ServiceRegistry, name: &str) -> ScriptedClientHandle {
    let template = ScriptedClient::new(service_name(name))
        .with_api_key_support()
        .with_credentials_support();
    let handle = template.handle();
    registry.register(
        service_name(name),
        Box::new(move || Box::new(template.clone())),
    );
    handle
}

/// Dispatcher over two scripted services with their observer handles.
#[fixture]
pub fn dispatcher() -> (TaggingDispatcher, ScriptedClientHandle, ScriptedClientHandle) {
    let mut registry = ServiceRegistry::empty();
    let primary = install_scripted(&mut registry, "primary_scripted");
    let secondary = install_scripted(&mut registry, "secondary_scripted");
    (TaggingDispatcher::new(registry), primary, secondary)
}

/// Canonical names of the configured clients, in insertion order.
pub fn configured_names(dispatcher: &TaggingDispatcher) -> Vec<String> {
    dispatcher
        .clients()
        .iter()
        .map(|client| client.service_name().as_str().to_owned())
        .collect()
}
