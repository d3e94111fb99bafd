//! Error types for Mosaic.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`MosaicError`] - Top-level error type for all Mosaic operations
//! - [`RegistryError`] - Errors while building a registry
//! - [`RenderError`] - Errors propagated out of a render pass
//! - [`DataError`] - Errors converting data definition config and data
//!
//! An unregistered component is not an error at render time. It degrades to
//! an empty render, and [`MissingComponent`] only provides the log message.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Mosaic operations.
#[derive(Error, Debug)]
pub enum MosaicError {
    /// Registration failed during setup.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A render pass failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Data definition config or data could not be converted.
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while building a registry.
///
/// These are fatal: setup is aborted and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A registration for this type already exists. The original is retained.
    #[error("{0} has already been registered")]
    DuplicateRegistration(String),

    /// Kinds of a closed component enumeration have no registration.
    #[error("component kinds not registered: {}", .0.join(", "))]
    MissingKinds(Vec<String>),
}

/// A render-time lookup of a type that was never registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Component '{0}' has not been registered")]
pub struct MissingComponent(pub String);

/// Errors that abort a render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A middleware or render handler failed for one descriptor.
    #[error("rendering component '{kind}' at index {index} failed: {source}")]
    Component {
        /// Position of the descriptor in the content area.
        index: usize,
        /// The descriptor's type key.
        kind: String,
        /// The underlying middleware or handler error.
        #[source]
        source: BoxError,
    },
}

impl RenderError {
    /// The position of the failing descriptor.
    pub fn index(&self) -> usize {
        match self {
            RenderError::Component { index, .. } => *index,
        }
    }

    /// The type key of the failing descriptor.
    pub fn kind(&self) -> &str {
        match self {
            RenderError::Component { kind, .. } => kind,
        }
    }
}

/// Errors converting data definition config and loaded data.
#[derive(Error, Debug)]
pub enum DataError {
    /// `dataDefinitionArgs` did not match the definition's config shape.
    #[error("invalid data definition config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// Loaded data could not be serialized into the props bag.
    #[error("failed to encode loaded data: {0}")]
    Encode(#[source] serde_json::Error),

    /// Loaded data did not match the shape the render function asked for.
    #[error("failed to decode loaded data: {0}")]
    Decode(#[source] serde_json::Error),
}

// Convenience conversions
impl From<BoxError> for MosaicError {
    fn from(err: BoxError) -> Self {
        MosaicError::Custom(err)
    }
}
