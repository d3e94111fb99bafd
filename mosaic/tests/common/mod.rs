#![allow(dead_code)]

use mosaic::{
    BoxError, ComponentRegistration, DataDefinition, DataProps, DataState, Props, RegistryBuilder,
    RenderServices, testing::RecordingLogger,
};
use serde::{Deserialize, Serialize};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Services
// ============================================================================

/// Services handed to every render call in these tests.
#[derive(Clone, Debug, Default)]
pub struct Site {
    pub name: String,
}

pub fn services() -> RenderServices<Site> {
    RenderServices::new(Site {
        name: "example".to_owned(),
    })
}

// ============================================================================
// Test Components
// ============================================================================

/// Renders its `title` prop, or nothing.
pub fn title_component(kind: &str) -> ComponentRegistration<Site, String> {
    ComponentRegistration::from_fn(kind, |props, _| props.get_str("title").map(str::to_owned))
}

/// Renders the whole merged props bag as JSON.
pub fn props_component(kind: &str) -> ComponentRegistration<Site, String> {
    ComponentRegistration::from_fn(kind, |props: &Props, _: &RenderServices<Site>| {
        Some(serde_json::to_string(props).unwrap())
    })
}

/// Always fails.
pub fn failing_component(kind: &str) -> ComponentRegistration<Site, String> {
    ComponentRegistration::from_fn(
        kind,
        |_: &Props, _: &RenderServices<Site>| -> Result<Option<String>, BoxError> {
            Err("component exploded".into())
        },
    )
}

pub fn logged_builder(logger: &RecordingLogger) -> RegistryBuilder<Site, String> {
    RegistryBuilder::new().with_logger(logger.clone())
}

// ============================================================================
// Test Data Definitions
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct HeadlinesConfig {
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Headline {
    pub title: String,
}

/// Produces `count` numbered headlines, prefixed with the site name.
pub struct Headlines {
    pub calls: Arc<AtomicUsize>,
}

impl Headlines {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl DataDefinition<Site> for Headlines {
    type Config = HeadlinesConfig;
    type Data = Vec<Headline>;

    async fn load(&self, config: HeadlinesConfig, site: &Site) -> Result<Vec<Headline>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((1..=config.count)
            .map(|i| Headline {
                title: format!("{} headline {i}", site.name),
            })
            .collect())
    }
}

/// A data definition whose backend is always down.
pub struct Unavailable;

impl DataDefinition<Site> for Unavailable {
    type Config = serde_json::Value;
    type Data = ();

    async fn load(&self, _config: serde_json::Value, _site: &Site) -> Result<(), BoxError> {
        Err("backend unavailable".into())
    }
}

/// Describes the data state it receives.
pub fn describe_headlines(
    props: &Props,
    data: &DataProps,
    _: &RenderServices<Site>,
) -> Result<Option<String>, BoxError> {
    let heading = props.get_str("heading").unwrap_or("untitled");
    let body = match &data.state {
        DataState::NotRequested => "not requested".to_owned(),
        DataState::Loading => "loading".to_owned(),
        DataState::Errored { error } => format!("error: {error}"),
        DataState::Loaded { .. } => {
            let headlines: Vec<Headline> = data.data()?.unwrap_or_default();
            headlines
                .iter()
                .map(|h| h.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    };
    Ok(Some(format!("{heading}: {body}")))
}
