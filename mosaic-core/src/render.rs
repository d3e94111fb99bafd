//! # Render Layer (RenderHandler)
//!
//! The terminal point of a render call. A handler receives the merged props
//! bag and the per-dispatch services and produces a value, or `None` when it
//! renders nothing.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `render_fn(|props, services| Some(...))`
//! 2. **Struct implementation**: `impl RenderHandler<S, V> for MyComponent`

use crate::{error::BoxError, props::Props, services::RenderServices};
use std::marker::PhantomData;

/// The result of a render call. `Ok(None)` is the "no output" marker.
pub type RenderResult<V> = Result<Option<V>, BoxError>;

/// The terminal of the middleware chain.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot render into `{V}`",
    label = "missing `RenderHandler<{S}, {V}>` implementation",
    note = "Use `render_fn` to adapt a closure, or implement `render` directly."
)]
pub trait RenderHandler<S, V>: Send + Sync + 'static {
    /// Render with the merged props.
    fn render(&self, props: &Props, services: &RenderServices<S>) -> RenderResult<V>;
}

/// Conversion of render function outputs into a [`RenderResult`].
///
/// - `Option<V>` → always succeeds
/// - `Result<Option<V>, E>` → propagates the error
pub trait IntoRenderResult<V> {
    /// Convert the output.
    fn into_render_result(self) -> RenderResult<V>;
}

impl<V> IntoRenderResult<V> for Option<V> {
    fn into_render_result(self) -> RenderResult<V> {
        Ok(self)
    }
}

impl<V, E> IntoRenderResult<V> for Result<Option<V>, E>
where
    E: Into<BoxError>,
{
    fn into_render_result(self) -> RenderResult<V> {
        self.map_err(Into::into)
    }
}

/// A [`RenderHandler`] backed by a closure. Created by [`render_fn`].
pub struct RenderFn<F, S, V> {
    f: F,
    _marker: PhantomData<fn(&S) -> V>,
}

/// Adapt a closure into a [`RenderHandler`].
///
/// ```rust
/// use mosaic_core::{Props, RenderHandler, RenderServices, render_fn};
///
/// let handler = render_fn(|props: &Props, _services: &RenderServices<()>| {
///     props.get_str("title").map(str::to_owned)
/// });
///
/// let props = Props::new().with("title", "test");
/// let out: Option<String> = handler.render(&props, &RenderServices::new(())).unwrap();
/// assert_eq!(out.as_deref(), Some("test"));
/// ```
pub fn render_fn<S, V, F, R>(f: F) -> RenderFn<F, S, V>
where
    F: Fn(&Props, &RenderServices<S>) -> R + Send + Sync + 'static,
    R: IntoRenderResult<V>,
{
    RenderFn {
        f,
        _marker: PhantomData,
    }
}

impl<S, V, F, R> RenderHandler<S, V> for RenderFn<F, S, V>
where
    S: 'static,
    V: 'static,
    F: Fn(&Props, &RenderServices<S>) -> R + Send + Sync + 'static,
    R: IntoRenderResult<V>,
{
    fn render(&self, props: &Props, services: &RenderServices<S>) -> RenderResult<V> {
        (self.f)(props, services).into_render_result()
    }
}
