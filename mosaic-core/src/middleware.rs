//! # Middleware Layer
//!
//! Cross-cutting interceptors wrapped around every render call: auth gating,
//! feature flags, telemetry, edit-mode overlays, failure isolation.
//!
//! A middleware receives the component props, the middleware props (the
//! descriptor's extra fields), the services and a [`Next`] handle. It either
//! continues inward through `next` or returns its own result, in which case
//! nothing downstream runs, including the render handler.
//!
//! Middleware execution is synchronous. Any data loading has already resolved
//! by the time a chain runs.

use crate::{
    chain::run_chain,
    props::Props,
    render::{RenderHandler, RenderResult},
    services::RenderServices,
};
use std::{marker::PhantomData, sync::Arc};

/// A render interceptor.
///
/// # Example
///
/// ```rust
/// use mosaic_core::{Middleware, Next, Props, RenderResult, RenderServices};
///
/// /// Hides components flagged with `hidden: true`.
/// struct HideFlagged;
///
/// impl<S: 'static, V: 'static> Middleware<S, V> for HideFlagged {
///     fn handle(
///         &self,
///         _props: &Props,
///         middleware_props: &Props,
///         _services: &RenderServices<S>,
///         next: Next<'_, S, V>,
///     ) -> RenderResult<V> {
///         if middleware_props.get_bool("hidden") == Some(true) {
///             return Ok(None);
///         }
///         next.run()
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Middleware<{S}, {V}>`",
    label = "missing `Middleware` implementation",
    note = "Use `middleware_fn` to adapt a closure, or implement `handle` directly."
)]
pub trait Middleware<S, V>: Send + Sync + 'static {
    /// Intercept one render call.
    fn handle(
        &self,
        props: &Props,
        middleware_props: &Props,
        services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V>;
}

/// The continuation of a middleware chain.
///
/// Holds the middleware still to run, the render handler at the end and the
/// arguments the current middleware was called with.
pub struct Next<'a, S, V> {
    pub(crate) chain: &'a [Arc<dyn Middleware<S, V>>],
    pub(crate) terminal: &'a dyn RenderHandler<S, V>,
    pub(crate) props: &'a Props,
    pub(crate) middleware_props: &'a Props,
    pub(crate) services: &'a RenderServices<S>,
}

impl<S, V> Clone for Next<'_, S, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, V> Copy for Next<'_, S, V> {}

impl<'a, S: 'static, V: 'static> Next<'a, S, V> {
    /// Continue with the arguments the current middleware received.
    pub fn run(self) -> RenderResult<V> {
        run_chain(
            self.chain,
            self.terminal,
            self.props,
            self.middleware_props,
            self.services,
        )
    }

    /// Continue with replacement arguments.
    ///
    /// Deeper middleware and the final merge observe the replacements.
    pub fn run_with(
        self,
        props: &Props,
        middleware_props: &Props,
        services: &RenderServices<S>,
    ) -> RenderResult<V> {
        run_chain(self.chain, self.terminal, props, middleware_props, services)
    }

    /// Continue with replacement middleware props only.
    pub fn run_with_middleware_props(self, middleware_props: &Props) -> RenderResult<V> {
        run_chain(
            self.chain,
            self.terminal,
            self.props,
            middleware_props,
            self.services,
        )
    }

    /// The component props the current middleware received.
    pub fn props(&self) -> &'a Props {
        self.props
    }

    /// The middleware props the current middleware received.
    pub fn middleware_props(&self) -> &'a Props {
        self.middleware_props
    }

    /// Number of middleware still to run before the render handler.
    pub fn remaining(&self) -> usize {
        self.chain.len()
    }
}

/// A [`Middleware`] backed by a closure. Created by [`middleware_fn`].
pub struct MiddlewareFn<F, S, V> {
    f: F,
    _marker: PhantomData<fn(&S) -> V>,
}

/// Adapt a closure into a [`Middleware`].
///
/// ```rust
/// use mosaic_core::{Props, middleware_fn};
///
/// let mark_seen = middleware_fn::<(), String, _>(|props, middleware_props, services, next| {
///     let rewritten = middleware_props.clone().with("seen", true);
///     next.run_with(props, &rewritten, services)
/// });
/// # let _ = mark_seen;
/// ```
pub fn middleware_fn<S, V, F>(f: F) -> MiddlewareFn<F, S, V>
where
    F: Fn(&Props, &Props, &RenderServices<S>, Next<'_, S, V>) -> RenderResult<V>
        + Send
        + Sync
        + 'static,
{
    MiddlewareFn {
        f,
        _marker: PhantomData,
    }
}

impl<S, V, F> Middleware<S, V> for MiddlewareFn<F, S, V>
where
    S: 'static,
    V: 'static,
    F: Fn(&Props, &Props, &RenderServices<S>, Next<'_, S, V>) -> RenderResult<V>
        + Send
        + Sync
        + 'static,
{
    fn handle(
        &self,
        props: &Props,
        middleware_props: &Props,
        services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V> {
        (self.f)(props, middleware_props, services, next)
    }
}

// Allow shared middleware to be registered more than once.
impl<S, V, M> Middleware<S, V> for Arc<M>
where
    M: Middleware<S, V>,
{
    fn handle(
        &self,
        props: &Props,
        middleware_props: &Props,
        services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V> {
        (**self).handle(props, middleware_props, services, next)
    }
}
