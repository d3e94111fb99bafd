//! # mosaic - Content-Block Rendering Framework
//!
//! `mosaic` resolves named content blocks to registered renderers, attaches
//! externally loaded data to the blocks that declare it, and threads every
//! render call through an ordered chain of middleware.
//!
//! ## Quick Start
//!
//! ```rust
//! use mosaic::{
//!     ComponentDescriptor, ComponentRegistration, RegistryBuilder, RenderServices,
//!     middleware::SkipRenderMiddleware, props,
//! };
//!
//! let registry = RegistryBuilder::<(), String>::new()
//!     .register(ComponentRegistration::from_fn("testWithTitleProp", |props, _| {
//!         props.get_str("title").map(str::to_owned)
//!     }))
//!     .unwrap()
//!     .register_middleware(SkipRenderMiddleware::new())
//!     .build();
//!
//! let rendered = registry
//!     .render_sync(
//!         &[
//!             ComponentDescriptor::new("testWithTitleProp", props! { "title" => "test" }),
//!             ComponentDescriptor::new("testWithTitleProp", props! { "title" => "hidden" })
//!                 .with_extra("skipRender", true),
//!             ComponentDescriptor::new("unknown", props! {}),
//!         ],
//!         &RenderServices::new(()),
//!     )
//!     .unwrap();
//!
//! assert_eq!(rendered, vec![Some("test".to_owned()), None, None]);
//! ```
//!
//! ## Data-bearing components
//!
//! Render a content area with a [`Dispatcher`] to load data first. Each
//! registration made with [`ComponentRegistration::with_data`] receives its
//! [`DataState`] through [`DataProps`].
//!
//! ```rust,ignore
//! let dispatcher = Dispatcher::new(registry, DefinitionLoader);
//! let rendered = dispatcher
//!     .render_content_area(&descriptors, &RenderServices::new(services))
//!     .await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use mosaic_core::{
    // Data
    AdapterKind,
    // Errors
    BoxError,
    // Registration
    ComponentDescriptor,
    ComponentKind,
    ComponentRegistration,
    // Middleware
    ComposedRender,
    DATA_ARGS_KEY,
    DATA_KEY,
    DataAwareRender,
    DataDefinition,
    DataError,
    DataLoader,
    DataProps,
    DataState,
    DynDataDefinition,
    // Configuration
    Environment,
    IntoRenderResult,
    Logger,
    Middleware,
    MiddlewareFn,
    MiddlewareStack,
    MissingComponent,
    MosaicError,
    Next,
    // Props
    Props,
    RegistryError,
    RenderConfig,
    RenderError,
    RenderFn,
    // Render
    RenderHandler,
    RenderResult,
    RenderServices,
    RouteRef,
    middleware_fn,
    props,
    render_fn,
};

pub use mosaic_std::{Dispatcher, Registry, RegistryBuilder};

/// Data loader implementations.
pub mod loaders {
    pub use mosaic_std::loaders::{
        CacheScope, CachedLoader, DefinitionLoader, PendingLoader, Unscoped,
    };
}

/// Logger implementations.
pub mod logging {
    pub use mosaic_std::logging::{NoopLogger, TracingLogger};
}

/// Standard middleware implementations.
pub mod middleware {
    #![allow(clippy::wildcard_imports)]
    pub use mosaic_std::middleware::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use mosaic_std::testing::*;
}

/// Prelude module - common imports for Mosaic.
///
/// # Usage
///
/// ```rust,ignore
/// use mosaic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, ComponentDescriptor, ComponentKind, ComponentRegistration, DataDefinition,
        DataLoader, DataProps, DataState, Dispatcher, Middleware, Next, Props, Registry,
        RegistryBuilder, RenderConfig, RenderHandler, RenderResult, RenderServices,
        middleware_fn, props, render_fn,
    };
}

#[cfg(feature = "macros")]
pub use mosaic_macros::ComponentKind;
