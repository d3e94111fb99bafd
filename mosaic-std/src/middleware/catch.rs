//! Failure isolation.

use mosaic_core::{Middleware, Next, Props, RenderResult, RenderServices};

/// Turns a failure anywhere downstream into an empty render.
///
/// Register it first so it wraps every other middleware. One broken
/// component then renders as `None` instead of aborting the content area.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchMiddleware;

impl<S: 'static, V: 'static> Middleware<S, V> for CatchMiddleware {
    fn handle(
        &self,
        _props: &Props,
        _middleware_props: &Props,
        _services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V> {
        match next.run() {
            Ok(rendered) => Ok(rendered),
            Err(err) => {
                #[cfg(feature = "tracing")]
                {
                    tracing::error!(target: "mosaic", error = %err, "component render failed");
                }
                #[cfg(not(feature = "tracing"))]
                {
                    let _ = err;
                }
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::{BoxError, MiddlewareStack, render_fn};

    #[test]
    fn test_error_becomes_empty_render() {
        let stack = MiddlewareStack::<(), String>::new().with(CatchMiddleware);
        let terminal = render_fn(
            |_: &Props, _: &RenderServices<()>| -> Result<Option<String>, BoxError> {
                Err("boom".into())
            },
        );

        let out = stack
            .compose(&terminal)
            .render(&Props::new(), &Props::new(), &RenderServices::new(()))
            .unwrap();

        assert_eq!(out, None);
    }
}
