//! Middleware chain composition.
//!
//! Composition order is registration order, outer to inner: the first
//! registered middleware runs first. The base case merges component and
//! middleware props (middleware keys win) and calls the render handler.

use crate::{
    middleware::{Middleware, Next},
    props::Props,
    render::{RenderHandler, RenderResult},
    services::RenderServices,
};
use std::sync::Arc;

/// An ordered, append-only list of middleware.
pub struct MiddlewareStack<S, V> {
    entries: Vec<Arc<dyn Middleware<S, V>>>,
}

impl<S, V> MiddlewareStack<S, V> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a middleware. It runs after every middleware already pushed.
    pub fn push<M: Middleware<S, V>>(&mut self, middleware: M) {
        self.entries.push(Arc::new(middleware));
    }

    /// Append a middleware and return `self`.
    pub fn with<M: Middleware<S, V>>(mut self, middleware: M) -> Self {
        self.push(middleware);
        self
    }

    /// Number of middleware.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compose the stack around a render handler into one callable.
    pub fn compose<'a>(
        &'a self,
        terminal: &'a dyn RenderHandler<S, V>,
    ) -> ComposedRender<'a, S, V> {
        ComposedRender {
            chain: &self.entries,
            terminal,
        }
    }
}

impl<S, V> Default for MiddlewareStack<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V> Clone for MiddlewareStack<S, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

/// A middleware stack composed around one render handler.
pub struct ComposedRender<'a, S, V> {
    chain: &'a [Arc<dyn Middleware<S, V>>],
    terminal: &'a dyn RenderHandler<S, V>,
}

impl<S: 'static, V: 'static> ComposedRender<'_, S, V> {
    /// Run the chain from the outermost middleware.
    pub fn render(
        &self,
        props: &Props,
        middleware_props: &Props,
        services: &RenderServices<S>,
    ) -> RenderResult<V> {
        run_chain(self.chain, self.terminal, props, middleware_props, services)
    }
}

pub(crate) fn run_chain<S: 'static, V: 'static>(
    chain: &[Arc<dyn Middleware<S, V>>],
    terminal: &dyn RenderHandler<S, V>,
    props: &Props,
    middleware_props: &Props,
    services: &RenderServices<S>,
) -> RenderResult<V> {
    match chain.split_first() {
        Some((head, rest)) => head.handle(
            props,
            middleware_props,
            services,
            Next {
                chain: rest,
                terminal,
                props,
                middleware_props,
                services,
            },
        ),
        None => terminal.render(&props.merged(middleware_props), services),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{middleware::middleware_fn, props, render::render_fn};
    use std::sync::Mutex;

    fn echo() -> impl RenderHandler<(), Props> {
        render_fn(|props: &Props, _: &RenderServices<()>| Some(props.clone()))
    }

    #[test]
    fn test_empty_stack_merges_and_renders() {
        let stack = MiddlewareStack::<(), Props>::new();
        let terminal = echo();

        let out = stack
            .compose(&terminal)
            .render(
                &props! { "title" => "test" },
                &props! { "skipRender" => true },
                &RenderServices::new(()),
            )
            .unwrap();

        assert_eq!(out, Some(props! { "title" => "test", "skipRender" => true }));
    }

    #[test]
    fn test_registration_order_is_outer_to_inner() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut stack = MiddlewareStack::<(), Props>::new();
        for id in 1..=3 {
            let order = Arc::clone(&order);
            stack.push(middleware_fn(move |_, _, _, next| {
                order.lock().unwrap().push(id);
                next.run()
            }));
        }
        let terminal = echo();

        stack
            .compose(&terminal)
            .render(&Props::new(), &Props::new(), &RenderServices::new(()))
            .unwrap();

        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_short_circuit_skips_terminal() {
        let stack = MiddlewareStack::<(), Props>::new()
            .with(middleware_fn(|_, _, _, _next| Ok(None)));
        let rendered = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&rendered);
        let terminal = render_fn(move |props: &Props, _: &RenderServices<()>| {
            *flag.lock().unwrap() = true;
            Some(props.clone())
        });

        let out = stack
            .compose(&terminal)
            .render(&Props::new(), &Props::new(), &RenderServices::new(()))
            .unwrap();

        assert!(out.is_none());
        assert!(!*rendered.lock().unwrap());
    }

    #[test]
    fn test_rewritten_props_reach_terminal() {
        let stack = MiddlewareStack::<(), Props>::new().with(middleware_fn(
            |props, middleware_props, services, next| {
                let rewritten = middleware_props.clone().with("flag", true);
                next.run_with(props, &rewritten, services)
            },
        ));
        let terminal = echo();

        let out = stack
            .compose(&terminal)
            .render(&props! { "title" => "test" }, &Props::new(), &RenderServices::new(()))
            .unwrap();

        assert_eq!(out.and_then(|p| p.get_bool("flag")), Some(true));
    }
}
