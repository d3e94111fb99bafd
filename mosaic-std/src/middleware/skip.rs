//! Render suppression by middleware flag.

use mosaic_core::{Middleware, Next, Props, RenderResult, RenderServices};
use std::borrow::Cow;

/// Suppresses a component when its middleware props carry `flag: true`.
///
/// The flag defaults to `skipRender`.
#[derive(Debug, Clone)]
pub struct SkipRenderMiddleware {
    flag: Cow<'static, str>,
}

impl SkipRenderMiddleware {
    /// The default flag name.
    pub const DEFAULT_FLAG: &'static str = "skipRender";

    /// Suppress on the default `skipRender` flag.
    pub fn new() -> Self {
        Self::with_flag(Self::DEFAULT_FLAG)
    }

    /// Suppress on a custom flag.
    pub fn with_flag(flag: impl Into<Cow<'static, str>>) -> Self {
        Self { flag: flag.into() }
    }

    /// The flag this middleware reads.
    pub fn flag(&self) -> &str {
        &self.flag
    }
}

impl Default for SkipRenderMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static, V: 'static> Middleware<S, V> for SkipRenderMiddleware {
    fn handle(
        &self,
        _props: &Props,
        middleware_props: &Props,
        _services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V> {
        if middleware_props.get_bool(&self.flag) == Some(true) {
            return Ok(None);
        }
        next.run()
    }
}
