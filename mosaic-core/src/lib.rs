//! # mosaic-core
//!
//! Core traits for the Mosaic content-block rendering framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! component libraries and middleware that don't need the full `mosaic-std`
//! registry and dispatcher.
//!
//! # Layers
//!
//! Rendering a content area passes through four layers, leaves first:
//!
//! ## Layer 1: Props ([`Props`], [`ComponentDescriptor`])
//!
//! An opaque JSON object bag. Descriptors name a registered type, carry its
//! props, and hold every other field the caller attached as middleware props.
//!
//! ## Layer 2: Render ([`RenderHandler`])
//!
//! The terminal of every render call. Receives the merged props bag and the
//! per-dispatch [`RenderServices`] and returns a value or "no output".
//!
//! ## Layer 3: Middleware ([`Middleware`], [`MiddlewareStack`])
//!
//! Cross-cutting interceptors composed into a chain-of-responsibility in
//! registration order. Each one decides whether to call [`Next`] (optionally
//! with rewritten props) or to return its own result.
//!
//! ## Layer 4: Data ([`DataDefinition`], [`DataLoader`])
//!
//! Registrations may declare how their data is loaded. A loader resolves the
//! [`DataState`] before the chain runs; the [`DataAwareRender`] adapter hands
//! it to the user render function in a decomposed shape.
//!
//! # Error Types
//!
//! - [`MosaicError`] - Top-level error type
//! - [`RegistryError`] - Setup-time registration errors
//! - [`RenderError`] - Errors propagated out of a render pass
//! - [`DataError`] - Data definition (de)serialization errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod chain;
mod config;
mod data;
mod descriptor;
mod error;
mod kind;
mod logger;
mod middleware;
mod props;
mod registration;
mod render;
mod services;

// Re-exports
pub use chain::{ComposedRender, MiddlewareStack};
pub use config::{Environment, RenderConfig};
pub use data::{
    DATA_ARGS_KEY, DATA_KEY, DataDefinition, DataLoader, DataProps, DataState, DynDataDefinition,
};
pub use descriptor::ComponentDescriptor;
pub use error::{BoxError, DataError, MissingComponent, MosaicError, RegistryError, RenderError};
pub use kind::ComponentKind;
pub use logger::Logger;
pub use middleware::{Middleware, MiddlewareFn, Next, middleware_fn};
pub use props::Props;
pub use registration::{AdapterKind, ComponentRegistration, DataAwareRender};
pub use render::{IntoRenderResult, RenderFn, RenderHandler, RenderResult, render_fn};
pub use services::{RenderServices, RouteRef};

#[doc(hidden)]
pub use serde_json;
