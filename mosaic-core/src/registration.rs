//! Registration records and the data-aware render adapter.
//!
//! A registration is built once, explicitly tagged with its [`AdapterKind`].
//! Data-bearing registrations wrap the user render function in
//! [`DataAwareRender`] at registration time, so dispatch always calls the
//! uniform `(props, services)` signature and never needs to know whether a
//! type loads data.

use crate::{
    data::{DATA_ARGS_KEY, DATA_KEY, DataDefinition, DataProps, DataState, DynDataDefinition},
    props::Props,
    render::{IntoRenderResult, RenderHandler, RenderResult, render_fn},
    services::RenderServices,
};
use serde_json::Value;
use std::{fmt, marker::PhantomData, sync::Arc};

/// How a registration's handler reads its props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    /// The handler receives the merged props as-is.
    Plain,
    /// The handler is a [`DataAwareRender`] expecting an embedded data state.
    DataAware,
}

/// A registered component type.
pub struct ComponentRegistration<S, V> {
    kind: String,
    handler: Arc<dyn RenderHandler<S, V>>,
    data_definition: Option<Arc<dyn DynDataDefinition<S>>>,
    adapter: AdapterKind,
}

impl<S: 'static, V: 'static> ComponentRegistration<S, V> {
    /// Register a render handler under a type key.
    pub fn new<H: RenderHandler<S, V>>(kind: impl Into<String>, handler: H) -> Self {
        Self {
            kind: kind.into(),
            handler: Arc::new(handler),
            data_definition: None,
            adapter: AdapterKind::Plain,
        }
    }

    /// Register a render closure under a type key.
    pub fn from_fn<F, R>(kind: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Props, &RenderServices<S>) -> R + Send + Sync + 'static,
        R: IntoRenderResult<V>,
    {
        Self::new(kind, render_fn(render))
    }

    /// Register a data-bearing component.
    ///
    /// `render` receives the props without `data` and `dataDefinitionArgs`,
    /// the decomposed [`DataProps`] and the services.
    pub fn with_data<D, F, R>(kind: impl Into<String>, definition: D, render: F) -> Self
    where
        S: Sync,
        D: DataDefinition<S>,
        F: Fn(&Props, &DataProps, &RenderServices<S>) -> R + Send + Sync + 'static,
        R: IntoRenderResult<V>,
    {
        Self::with_shared_data(kind, Arc::new(definition), render)
    }

    /// Register a data-bearing component with a definition shared elsewhere.
    pub fn with_shared_data<F, R>(
        kind: impl Into<String>,
        definition: Arc<dyn DynDataDefinition<S>>,
        render: F,
    ) -> Self
    where
        F: Fn(&Props, &DataProps, &RenderServices<S>) -> R + Send + Sync + 'static,
        R: IntoRenderResult<V>,
    {
        Self {
            kind: kind.into(),
            handler: Arc::new(DataAwareRender::new(render)),
            data_definition: Some(definition),
            adapter: AdapterKind::DataAware,
        }
    }
}

impl<S, V> ComponentRegistration<S, V> {
    /// The type key.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The uniform render handler.
    pub fn handler(&self) -> &dyn RenderHandler<S, V> {
        &*self.handler
    }

    /// The data definition, if any.
    pub fn data_definition(&self) -> Option<&dyn DynDataDefinition<S>> {
        self.data_definition.as_deref()
    }

    /// The adapter tag.
    pub fn adapter(&self) -> AdapterKind {
        self.adapter
    }

    /// Check whether this registration loads data.
    pub fn has_data(&self) -> bool {
        self.data_definition.is_some()
    }
}

impl<S, V> Clone for ComponentRegistration<S, V> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            handler: Arc::clone(&self.handler),
            data_definition: self.data_definition.clone(),
            adapter: self.adapter,
        }
    }
}

impl<S, V> fmt::Debug for ComponentRegistration<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistration")
            .field("kind", &self.kind)
            .field("adapter", &self.adapter)
            .field("has_data", &self.has_data())
            .finish()
    }
}

/// Adapts a decomposed data render function to the uniform signature.
///
/// Splits `data` and `dataDefinitionArgs` out of the merged props. A missing
/// `data` key reads as [`DataState::NotRequested`]; a malformed one as
/// [`DataState::Errored`].
pub struct DataAwareRender<F, S, V> {
    render: F,
    _marker: PhantomData<fn(&S) -> V>,
}

impl<F, S, V> DataAwareRender<F, S, V> {
    /// Wrap a data render function.
    pub fn new(render: F) -> Self {
        Self {
            render,
            _marker: PhantomData,
        }
    }
}

impl<S, V, F, R> RenderHandler<S, V> for DataAwareRender<F, S, V>
where
    S: 'static,
    V: 'static,
    F: Fn(&Props, &DataProps, &RenderServices<S>) -> R + Send + Sync + 'static,
    R: IntoRenderResult<V>,
{
    fn render(&self, props: &Props, services: &RenderServices<S>) -> RenderResult<V> {
        let mut base = props.clone();
        let state = match base.remove(DATA_KEY) {
            None => DataState::NotRequested,
            Some(raw) => DataState::from_value(&raw)
                .unwrap_or_else(|| DataState::errored(format!("malformed data state: {raw}"))),
        };
        let args = base.remove(DATA_ARGS_KEY).unwrap_or(Value::Null);

        (self.render)(&base, &DataProps { state, args }, services).into_render_result()
    }
}
