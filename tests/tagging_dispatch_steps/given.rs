//! Given steps for tagging dispatch BDD scenarios.

use super::world::{DispatchWorld, parse_labels};
use rstest_bdd_macros::given;

#[given(r#"the "{name}" service returns tags "{labels}""#)]
fn service_returns_tags(
    world: &mut DispatchWorld,
    name: String,
    labels: String,
) -> Result<(), eyre::Report> {
    let tags = parse_labels(&labels)?;
    world
        .handle(&name)?
        .queue_tags(tags)
        .map_err(|err| eyre::eyre!("queueing tags failed: {err}"))?;
    Ok(())
}
