//! # mosaic-std
//!
//! Standard implementations for the Mosaic content-block rendering framework.
//!
//! This crate provides:
//! - **Registry**: [`RegistryBuilder`] for setup, frozen [`Registry`] for dispatch
//! - **Dispatch**: [`Dispatcher`] renders content areas in input order
//! - **Loaders**: [`DefinitionLoader`], [`PendingLoader`], [`CachedLoader`]
//! - **Loggers**: [`TracingLogger`], [`NoopLogger`]
//! - **Standard middleware**: Logging, Conditional, SkipRender, Catch, DefaultProps
//! - **Testing utilities**: recording logger and middleware

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use mosaic_core;

// Modules
pub mod dispatch;
pub mod loaders;
pub mod logging;
pub mod middleware;
pub mod registry;
pub mod testing;

pub use dispatch::Dispatcher;
pub use loaders::{CacheScope, CachedLoader, DefinitionLoader, PendingLoader, Unscoped};
pub use logging::{NoopLogger, TracingLogger};
pub use registry::{Registry, RegistryBuilder};
