//! Render dispatch.
//!
//! A render pass has two phases. The load phase finds every data-bearing
//! descriptor, asks the [`DataLoader`] once per distinct `(type, config)` and
//! awaits all loads together. The render phase then walks the descriptors in
//! input order, embeds the resolved [`DataState`] and runs the middleware
//! chain around each registration's handler.
//!
//! Unregistered types render as `None`. Only the render phase reports a miss,
//! so each unregistered descriptor produces at most one warning per pass.

use crate::registry::Registry;
use futures::future::join_all;
use mosaic_core::{
    ComponentDescriptor, ComponentRegistration, DATA_ARGS_KEY, DATA_KEY, DataLoader, DataState,
    RenderError, RenderResult, RenderServices,
};
use serde_json::Value;
use std::{borrow::Cow, collections::HashMap, sync::Arc};

// ============================================================================
// Synchronous rendering on the registry
// ============================================================================

impl<S: 'static, V: 'static> Registry<S, V> {
    /// Render one descriptor with an already resolved data state.
    ///
    /// Data-bearing registrations receive `data` (or
    /// [`DataState::NotRequested`] when `data` is `None`) embedded in their
    /// props. Plain registrations never see a `data` key.
    pub fn render_descriptor(
        &self,
        descriptor: &ComponentDescriptor,
        services: &RenderServices<S>,
        data: Option<DataState>,
    ) -> RenderResult<V> {
        let Some(registration) = self.get(&descriptor.kind) else {
            return Ok(None);
        };

        let props = if registration.has_data() {
            let state = data.unwrap_or(DataState::NotRequested);
            Cow::Owned(descriptor.props.clone().with(DATA_KEY, state.to_value()))
        } else {
            Cow::Borrowed(&descriptor.props)
        };

        self.middleware()
            .compose(registration.handler())
            .render(&props, descriptor.middleware_props(), services)
    }

    /// Render a content area without loading data.
    ///
    /// Data-bearing registrations see [`DataState::NotRequested`].
    pub fn render_sync(
        &self,
        descriptors: &[ComponentDescriptor],
        services: &RenderServices<S>,
    ) -> Result<Vec<Option<V>>, RenderError> {
        descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| self.render_at(index, descriptor, services, None))
            .collect()
    }

    pub(crate) fn render_at(
        &self,
        index: usize,
        descriptor: &ComponentDescriptor,
        services: &RenderServices<S>,
        data: Option<DataState>,
    ) -> Result<Option<V>, RenderError> {
        self.render_descriptor(descriptor, services, data)
            .map_err(|source| RenderError::Component {
                index,
                kind: descriptor.kind.clone(),
                source,
            })
    }
}

// ============================================================================
// Dispatcher - registry plus data loader
// ============================================================================

/// Renders content areas against a shared registry, loading data first.
///
/// # Example
/// ```ignore
/// let dispatcher = Dispatcher::new(registry, DefinitionLoader);
/// let rendered = dispatcher
///     .render_content_area(&descriptors, &RenderServices::new(services))
///     .await?;
/// ```
pub struct Dispatcher<S, V, L> {
    registry: Arc<Registry<S, V>>,
    loader: L,
}

impl<S, V, L> Dispatcher<S, V, L> {
    /// Create a dispatcher over a registry and a loader.
    pub fn new(registry: impl Into<Arc<Registry<S, V>>>, loader: L) -> Self {
        Self {
            registry: registry.into(),
            loader,
        }
    }

    /// The shared registry.
    pub fn registry(&self) -> &Arc<Registry<S, V>> {
        &self.registry
    }

    /// The data loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl<S, V, L> Dispatcher<S, V, L>
where
    S: Sync + 'static,
    V: 'static,
    L: DataLoader<S>,
{
    /// Render every descriptor, returning one result per descriptor in input
    /// order.
    ///
    /// The first middleware or handler error aborts the pass.
    pub async fn render_content_area(
        &self,
        descriptors: &[ComponentDescriptor],
        services: &RenderServices<S>,
    ) -> Result<Vec<Option<V>>, RenderError> {
        let mut states = self.load_data(descriptors, services).await.into_iter();

        descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| {
                let data = states.next().flatten();
                self.registry.render_at(index, descriptor, services, data)
            })
            .collect()
    }

    /// Render a single descriptor.
    pub async fn render_component(
        &self,
        descriptor: &ComponentDescriptor,
        services: &RenderServices<S>,
    ) -> Result<Option<V>, RenderError> {
        let rendered = self
            .render_content_area(std::slice::from_ref(descriptor), services)
            .await?;
        Ok(rendered.into_iter().next().flatten())
    }

    /// Resolve data states for the data-bearing descriptors.
    ///
    /// Returns one slot per descriptor; `None` for descriptors without a
    /// data definition.
    async fn load_data(
        &self,
        descriptors: &[ComponentDescriptor],
        services: &RenderServices<S>,
    ) -> Vec<Option<DataState>> {
        let mut slots = Vec::with_capacity(descriptors.len());
        let mut seen: HashMap<(&str, String), usize> = HashMap::new();
        let mut pending = Vec::new();

        for descriptor in descriptors {
            let Some(definition) = self
                .registry
                .lookup(&descriptor.kind)
                .and_then(ComponentRegistration::data_definition)
            else {
                slots.push(None);
                continue;
            };

            let config = descriptor.props.get(DATA_ARGS_KEY).unwrap_or(&Value::Null);
            let key = (descriptor.kind.as_str(), config.to_string());
            let slot = *seen.entry(key).or_insert_with(|| {
                pending.push(self.loader.load(
                    &descriptor.kind,
                    definition,
                    config,
                    services.services(),
                ));
                pending.len() - 1
            });
            slots.push(Some(slot));
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                target: "mosaic",
                descriptors = descriptors.len(),
                loads = pending.len(),
                "rendering content area"
            );
        }

        let states = join_all(pending).await;
        slots
            .into_iter()
            .map(|slot| slot.map(|i| states[i].clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{loaders::DefinitionLoader, registry::RegistryBuilder, testing::RecordingLogger};
    use mosaic_core::{BoxError, DataDefinition, DataProps, Props, props};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Echo {
        calls: Arc<AtomicUsize>,
    }

    impl DataDefinition<()> for Echo {
        type Config = Value;
        type Data = Value;

        async fn load(&self, config: Value, _services: &()) -> Result<Value, BoxError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(config)
        }
    }

    fn show_state(_: &Props, data: &DataProps, _: &RenderServices<()>) -> Option<String> {
        Some(match &data.state {
            DataState::Loaded { value } => value.to_string(),
            other => format!("{other:?}"),
        })
    }

    fn registry(calls: &Arc<AtomicUsize>, logger: &RecordingLogger) -> Registry<(), String> {
        RegistryBuilder::new()
            .with_logger(logger.clone())
            .register(ComponentRegistration::from_fn("title", |props, _| {
                props.get_str("title").map(str::to_owned)
            }))
            .and_then(|b| {
                b.register(ComponentRegistration::with_data(
                    "echo",
                    Echo {
                        calls: Arc::clone(calls),
                    },
                    show_state,
                ))
            })
            .unwrap()
            .build()
    }

    #[tokio::test]
    async fn test_results_follow_input_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let logger = RecordingLogger::new();
        let dispatcher = Dispatcher::new(registry(&calls, &logger), DefinitionLoader);

        let descriptors = vec![
            ComponentDescriptor::new("title", props! { "title" => "a" }),
            ComponentDescriptor::new("ghost", Props::new()),
            ComponentDescriptor::new("echo", props! { DATA_ARGS_KEY => 7 }),
        ];
        let out = dispatcher
            .render_content_area(&descriptors, &RenderServices::new(()))
            .await
            .unwrap();

        assert_eq!(out, vec![Some("a".to_owned()), None, Some("7".to_owned())]);
        assert_eq!(logger.count(), 1);
    }

    #[tokio::test]
    async fn test_loads_are_deduplicated_per_pass() {
        let calls = Arc::new(AtomicUsize::new(0));
        let logger = RecordingLogger::new();
        let dispatcher = Dispatcher::new(registry(&calls, &logger), DefinitionLoader);

        let descriptors = vec![
            ComponentDescriptor::new("echo", props! { DATA_ARGS_KEY => 1 }),
            ComponentDescriptor::new("echo", props! { DATA_ARGS_KEY => 1 }),
            ComponentDescriptor::new("echo", props! { DATA_ARGS_KEY => 2 }),
        ];
        let out = dispatcher
            .render_content_area(&descriptors, &RenderServices::new(()))
            .await
            .unwrap();

        assert_eq!(
            out,
            vec![
                Some("1".to_owned()),
                Some("1".to_owned()),
                Some("2".to_owned())
            ]
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_render_sync_skips_loading() {
        let calls = Arc::new(AtomicUsize::new(0));
        let logger = RecordingLogger::new();
        let registry = registry(&calls, &logger);

        let out = registry
            .render_sync(
                &[ComponentDescriptor::new("echo", props! { DATA_ARGS_KEY => 1 })],
                &RenderServices::new(()),
            )
            .unwrap();

        assert_eq!(out, vec![Some("NotRequested".to_owned())]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_render_component_single_slot() {
        let calls = Arc::new(AtomicUsize::new(0));
        let logger = RecordingLogger::new();
        let dispatcher = Dispatcher::new(registry(&calls, &logger), DefinitionLoader);

        let out = dispatcher
            .render_component(
                &ComponentDescriptor::new("title", props! { "title" => "solo" }),
                &RenderServices::new(()),
            )
            .await
            .unwrap();

        assert_eq!(out.as_deref(), Some("solo"));
    }
}
