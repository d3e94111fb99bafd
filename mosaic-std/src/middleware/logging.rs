//! Logging middleware for render observation.

use mosaic_core::{Middleware, Next, Props, RenderResult, RenderServices};
use std::borrow::Cow;

/// A middleware that traces every render call passing through it.
///
/// Without the `tracing` feature it only forwards.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    name: Cow<'static, str>,
}

impl LoggingMiddleware {
    /// Create a logging middleware.
    pub fn new() -> Self {
        Self::named("mosaic")
    }

    /// Create a logging middleware that tags its events with `name`.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// The tag attached to each event.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S: 'static, V: 'static> Middleware<S, V> for LoggingMiddleware {
    fn handle(
        &self,
        props: &Props,
        middleware_props: &Props,
        _services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V> {
        let result = next.run();

        #[cfg(feature = "tracing")]
        {
            let outcome = match &result {
                Ok(Some(_)) => "rendered",
                Ok(None) => "empty",
                Err(_) => "failed",
            };
            tracing::debug!(
                target: "mosaic",
                middleware = %self.name,
                props = props.len(),
                middleware_props = middleware_props.len(),
                remaining = next.remaining(),
                outcome,
                "render"
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (props, middleware_props); // Suppress unused warning
        }

        result
    }
}
