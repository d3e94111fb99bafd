//! Registry setup and lookup.

use mosaic::{
    ComponentDescriptor, Environment, Registry, RegistryBuilder, RegistryError, RenderConfig,
    props, testing::RecordingLogger,
};
use std::{sync::Arc, thread};

mod common;
use common::{Headlines, Site, logged_builder, services, title_component};

#[test]
fn test_duplicate_registration_keeps_original() {
    let mut builder = RegistryBuilder::<Site, String>::new();
    builder.register_mut(title_component("hero")).unwrap();

    let replacement = mosaic::ComponentRegistration::from_fn("hero", |_, _| {
        Some("replacement".to_owned())
    });
    let err = builder.register_mut(replacement).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateRegistration("hero".to_owned()));

    let registry = builder.build();
    let out = registry
        .render_sync(
            &[ComponentDescriptor::new("hero", props! { "title" => "original" })],
            &services(),
        )
        .unwrap();
    assert_eq!(out, vec![Some("original".to_owned())]);
}

#[test]
fn test_chained_register_propagates_duplicate() {
    let result = RegistryBuilder::<Site, String>::new()
        .register(title_component("hero"))
        .and_then(|b| b.register(title_component("teaser")))
        .and_then(|b| b.register(title_component("hero")));

    let err = result.err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("hero has already been registered"));
}

#[test]
fn test_lookup_and_introspection() {
    let (headlines, _) = Headlines::new();
    let registry = logged_builder(&RecordingLogger::new())
        .register(title_component("teaser"))
        .and_then(|b| {
            b.register(mosaic::ComponentRegistration::with_data(
                "headlines",
                headlines,
                common::describe_headlines,
            ))
        })
        .and_then(|b| b.register(title_component("hero")))
        .unwrap()
        .build();

    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    assert!(registry.is_registered("hero"));
    assert!(!registry.is_registered("Hero"));
    assert_eq!(
        registry.types().collect::<Vec<_>>(),
        vec!["teaser", "headlines", "hero"]
    );
    assert!(registry.data_definition("headlines").is_some());
    assert!(registry.data_definition("hero").is_none());
    assert!(registry.data_definition("ghost").is_none());
}

#[test]
fn test_get_warns_per_miss_outside_production() {
    let logger = RecordingLogger::new();
    let registry = logged_builder(&logger)
        .register(title_component("hero"))
        .unwrap()
        .build();

    assert!(registry.get("hero").is_some());
    assert!(registry.get("ghost").is_none());
    assert!(registry.get("ghost").is_none());

    assert_eq!(logger.count(), 2);
    assert_eq!(
        logger.warnings()[0],
        "Component 'ghost' has not been registered"
    );
}

#[test]
fn test_environment_from_config() {
    let production = RenderConfig::new().with_environment(Environment::Production);
    let logger = RecordingLogger::new();
    let registry = logged_builder(&logger).with_config(production).build();

    assert!(registry.config().is_production());
    assert!(registry.get("ghost").is_none());
    assert_eq!(logger.count(), 0);
    assert!(!RenderConfig::default().is_production());
}

#[test]
fn test_registry_shared_across_threads() {
    let registry: Arc<Registry<Site, String>> = Arc::new(
        RegistryBuilder::new()
            .register(title_component("hero"))
            .unwrap()
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .render_sync(
                        &[ComponentDescriptor::new(
                            "hero",
                            props! { "title" => format!("thread {i}") },
                        )],
                        &services(),
                    )
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), vec![Some(format!("thread {i}"))]);
    }
}
