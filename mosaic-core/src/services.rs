//! Per-dispatch context handed to middleware and render handlers.

use std::{any::Any, sync::Arc};

/// An opaque route reference, threaded through untouched.
pub type RouteRef = Arc<dyn Any + Send + Sync>;

/// Services for one render pass.
///
/// Holds an optional route reference (whatever the routing layer uses to
/// build links) and the caller's own services. Nothing here is persisted
/// beyond the dispatch call.
#[derive(Debug, Clone)]
pub struct RenderServices<S> {
    route: Option<RouteRef>,
    services: S,
}

impl<S> RenderServices<S> {
    /// Create services without a route reference.
    pub fn new(services: S) -> Self {
        Self {
            route: None,
            services,
        }
    }

    /// Attach a route reference.
    pub fn with_route<R: Any + Send + Sync>(self, route: R) -> Self {
        self.with_route_ref(Arc::new(route))
    }

    /// Attach an already shared route reference.
    pub fn with_route_ref(mut self, route: RouteRef) -> Self {
        self.route = Some(route);
        self
    }

    /// Downcast the route reference.
    pub fn route<R: Any>(&self) -> Option<&R> {
        self.route.as_deref()?.downcast_ref::<R>()
    }

    /// The raw route reference.
    pub fn route_ref(&self) -> Option<&RouteRef> {
        self.route.as_ref()
    }

    /// The caller-supplied services.
    pub fn services(&self) -> &S {
        &self.services
    }

    /// Replace the caller-supplied services, keeping the route reference.
    pub fn with_services<T>(&self, services: T) -> RenderServices<T> {
        RenderServices {
            route: self.route.clone(),
            services,
        }
    }
}

impl<S: Default> Default for RenderServices<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
