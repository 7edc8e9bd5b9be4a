//! Integration tests for fan-out aggregation and failure propagation.

use super::helpers::{dispatcher, service_name, tag};
use folksonomy::tagging::adapters::memory::ScriptedClientHandle;
use folksonomy::tagging::domain::ServiceDescriptor;
use folksonomy::tagging::ports::TaggingClientError;
use folksonomy::tagging::services::{DispatchError, TaggingDispatcher};
use rstest::rstest;

type Harness = (TaggingDispatcher, ScriptedClientHandle, ScriptedClientHandle);

fn configure_both(dispatcher: &mut TaggingDispatcher) {
    dispatcher
        .configure_services(vec![
            ServiceDescriptor::bare("primary_scripted"),
            ServiceDescriptor::bare("secondary_scripted"),
        ])
        .expect("configuration should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tags_aggregate_across_services_in_configuration_order(dispatcher: Harness) {
    let (mut dispatcher, primary, secondary) = dispatcher;
    primary
        .queue_tags(vec![tag("rust"), tag("dispatch")])
        .expect("queueing should succeed");
    secondary
        .queue_tags(vec![tag("folksonomy")])
        .expect("queueing should succeed");
    configure_both(&mut dispatcher);

    let tags = dispatcher
        .get_tags("an essay about tagging")
        .await
        .expect("dispatch should succeed");

    assert_eq!(tags, [tag("rust"), tag("dispatch"), tag("folksonomy")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_configured_service_receives_the_content_once(dispatcher: Harness) {
    let (mut dispatcher, primary, secondary) = dispatcher;
    configure_both(&mut dispatcher);

    dispatcher
        .get_tags("an essay about tagging")
        .await
        .expect("dispatch should succeed");

    for handle in [&primary, &secondary] {
        assert_eq!(
            handle.calls().expect("state should be readable"),
            ["an essay about tagging"]
        );
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_without_configured_services_fails(dispatcher: Harness) {
    let (dispatcher, _primary, _secondary) = dispatcher;

    let result = dispatcher.get_tags("unrouted content").await;

    assert!(matches!(result, Err(DispatchError::NoServiceConfiguration)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reset_returns_dispatcher_to_unconfigured_state(dispatcher: Harness) {
    let (mut dispatcher, _primary, _secondary) = dispatcher;
    configure_both(&mut dispatcher);

    dispatcher.reset();
    let result = dispatcher.get_tags("post-reset content").await;

    assert!(matches!(result, Err(DispatchError::NoServiceConfiguration)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failing_service_aborts_the_remaining_fanout(dispatcher: Harness) {
    let (mut dispatcher, primary, secondary) = dispatcher;
    primary
        .queue_failure(TaggingClientError::unexpected_response(
            service_name("primary_scripted"),
            "vendor outage",
        ))
        .expect("queueing should succeed");
    secondary
        .queue_tags(vec![tag("unreached")])
        .expect("queueing should succeed");
    configure_both(&mut dispatcher);

    let result = dispatcher.get_tags("short content").await;

    assert!(matches!(result, Err(DispatchError::Client(_))));
    assert!(
        secondary
            .calls()
            .expect("state should be readable")
            .is_empty()
    );
}
