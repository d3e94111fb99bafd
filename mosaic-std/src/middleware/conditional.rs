//! Conditional middleware.

use mosaic_core::{Middleware, Next, Props, RenderResult, RenderServices};

/// Applies an inner middleware only when a predicate on the middleware props
/// holds. Otherwise the call continues as if the inner middleware were absent.
///
/// # Example
/// ```ignore
/// // Only gate components that opted into auth checks.
/// let gated = ConditionalMiddleware::new(
///     |middleware_props: &Props| middleware_props.get_bool("requiresAuth") == Some(true),
///     AuthMiddleware::new(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConditionalMiddleware<C, M> {
    predicate: C,
    inner: M,
}

impl<C, M> ConditionalMiddleware<C, M> {
    /// Create a conditional middleware.
    pub fn new(predicate: C, inner: M) -> Self {
        Self { predicate, inner }
    }

    /// The wrapped middleware.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<S, V, C, M> Middleware<S, V> for ConditionalMiddleware<C, M>
where
    S: 'static,
    V: 'static,
    C: Fn(&Props) -> bool + Send + Sync + 'static,
    M: Middleware<S, V>,
{
    fn handle(
        &self,
        props: &Props,
        middleware_props: &Props,
        services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V> {
        if (self.predicate)(middleware_props) {
            self.inner.handle(props, middleware_props, services, next)
        } else {
            next.run()
        }
    }
}
