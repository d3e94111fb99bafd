//! Default middleware props.

use mosaic_core::{Middleware, Next, Props, RenderResult, RenderServices};

/// Fills in middleware props the descriptor did not set.
///
/// Keys present on the descriptor win over the defaults. Deeper middleware
/// and the render handler see the completed bag.
#[derive(Debug, Clone, Default)]
pub struct DefaultPropsMiddleware {
    defaults: Props,
}

impl DefaultPropsMiddleware {
    /// Create the middleware from a bag of defaults.
    pub fn new(defaults: Props) -> Self {
        Self { defaults }
    }

    /// The defaults applied to each call.
    pub fn defaults(&self) -> &Props {
        &self.defaults
    }
}

impl<S: 'static, V: 'static> Middleware<S, V> for DefaultPropsMiddleware {
    fn handle(
        &self,
        _props: &Props,
        middleware_props: &Props,
        _services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V> {
        if self.defaults.is_empty() {
            return next.run();
        }
        next.run_with_middleware_props(&self.defaults.merged(middleware_props))
    }
}
