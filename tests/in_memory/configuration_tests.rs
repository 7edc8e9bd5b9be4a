//! Integration tests for descriptor resolution into dispatcher state.

use super::helpers::{configured_names, dispatcher, install_scripted};
use folksonomy::tagging::adapters::memory::ScriptedClientHandle;
use folksonomy::tagging::domain::{ServiceDescriptor, TaggingDomainError};
use folksonomy::tagging::services::{ServiceRegistry, TaggingDispatcher};
use rstest::rstest;

type Harness = (TaggingDispatcher, ScriptedClientHandle, ScriptedClientHandle);

#[rstest]
fn json_configuration_resolves_and_configures_clients(dispatcher: Harness) {
    let (mut dispatcher, _primary, secondary) = dispatcher;
    let raw = r#"["primary_scripted", {"secondary_scripted": "jqk145"}]"#;
    let descriptors: Vec<ServiceDescriptor> =
        serde_json::from_str(raw).expect("valid configuration");

    dispatcher
        .configure_services(descriptors)
        .expect("configuration should succeed");

    assert_eq!(
        configured_names(&dispatcher),
        ["primary_scripted", "secondary_scripted"]
    );
    let applied = secondary
        .applied_api_keys()
        .expect("state should be readable");
    assert_eq!(applied.len(), 1);
    assert_eq!(applied.first().map(|key| key.as_str()), Some("jqk145"));
}

#[rstest]
fn credentials_configuration_reaches_capable_client(dispatcher: Harness) {
    let (mut dispatcher, primary, _secondary) = dispatcher;
    let raw = r#"[{"primary_scripted": {"editor": "sekrit"}}]"#;
    let descriptors: Vec<ServiceDescriptor> =
        serde_json::from_str(raw).expect("valid configuration");

    dispatcher
        .configure_services(descriptors)
        .expect("configuration should succeed");

    let applied = primary
        .applied_credentials()
        .expect("state should be readable");
    assert_eq!(applied.len(), 1);
    let pair = applied.first().expect("one pair");
    assert_eq!(pair.username(), "editor");
    assert_eq!(pair.password(), "sekrit");
}

#[rstest]
fn unknown_service_halts_configuration_without_rollback(dispatcher: Harness) {
    let (mut dispatcher, _primary, _secondary) = dispatcher;

    let result = dispatcher.configure_services(vec![
        ServiceDescriptor::bare("primary_scripted"),
        ServiceDescriptor::bare("google"),
        ServiceDescriptor::bare("secondary_scripted"),
    ]);

    assert!(matches!(
        result,
        Err(TaggingDomainError::UnknownService(name)) if name.as_str() == "google"
    ));
    assert_eq!(configured_names(&dispatcher), ["primary_scripted"]);
}

#[rstest]
fn configuration_accumulates_until_reset(dispatcher: Harness) {
    let (mut dispatcher, _primary, _secondary) = dispatcher;

    dispatcher
        .configure_services(vec![ServiceDescriptor::bare("primary_scripted")])
        .expect("first configuration should succeed");
    dispatcher
        .configure_services(vec![ServiceDescriptor::bare("secondary_scripted")])
        .expect("second configuration should succeed");
    assert_eq!(
        configured_names(&dispatcher),
        ["primary_scripted", "secondary_scripted"]
    );

    dispatcher.reset();
    assert!(dispatcher.clients().is_empty());
}

#[rstest]
fn bare_names_leave_capable_clients_unconfigured(dispatcher: Harness) {
    let (mut dispatcher, primary, secondary) = dispatcher;

    dispatcher
        .configure_services(vec![
            ServiceDescriptor::bare("primary_scripted"),
            ServiceDescriptor::bare("secondary_scripted"),
        ])
        .expect("configuration should succeed");

    for handle in [&primary, &secondary] {
        assert!(
            handle
                .applied_api_keys()
                .expect("state should be readable")
                .is_empty()
        );
        assert!(
            handle
                .applied_credentials()
                .expect("state should be readable")
                .is_empty()
        );
    }
}

#[rstest]
fn same_service_can_be_configured_twice(dispatcher: Harness) {
    let (mut dispatcher, _primary, _secondary) = dispatcher;

    dispatcher
        .configure_services(vec![
            ServiceDescriptor::bare("primary_scripted"),
            ServiceDescriptor::bare("primary_scripted"),
        ])
        .expect("configuration should succeed");

    assert_eq!(
        configured_names(&dispatcher),
        ["primary_scripted", "primary_scripted"]
    );
}

#[rstest]
fn registry_extension_is_visible_to_new_dispatchers() {
    let mut registry = ServiceRegistry::builtin();
    let handle = install_scripted(&mut registry, "house_tagger");
    let mut dispatcher = TaggingDispatcher::new(registry);

    dispatcher
        .add_service(&ServiceDescriptor::with_api_key("house_tagger", "local"))
        .expect("resolution should succeed");

    assert_eq!(configured_names(&dispatcher), ["house_tagger"]);
    assert_eq!(
        handle
            .applied_api_keys()
            .expect("state should be readable")
            .len(),
        1
    );
}
