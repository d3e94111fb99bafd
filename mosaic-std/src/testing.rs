//! Testing utilities for Mosaic.
//!
//! - [`RecordingLogger`]: a logger that keeps every warning for inspection
//! - [`RecordingMiddleware`]: a middleware that records the props it sees

use mosaic_core::{Logger, Middleware, Next, Props, RenderResult, RenderServices};
use std::sync::{Arc, Mutex};

// ============================================================================
// Recording Logger
// ============================================================================

/// A logger that records all warnings it receives.
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to the registry.
///
/// # Example
///
/// ```rust,ignore
/// let logger = RecordingLogger::new();
/// let registry = RegistryBuilder::new().with_logger(logger.clone()).build();
///
/// registry.get("ghost");
/// assert_eq!(logger.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    /// Create an empty recording logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clone of the recorded warnings.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    /// Get the number of recorded warnings.
    pub fn count(&self) -> usize {
        self.warnings.lock().unwrap().len()
    }

    /// Clear all recorded warnings.
    pub fn clear(&self) {
        self.warnings.lock().unwrap().clear();
    }
}

impl Logger for RecordingLogger {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_owned());
    }
}

// ============================================================================
// Recording Middleware
// ============================================================================

/// One call observed by a [`RecordingMiddleware`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// The component props.
    pub props: Props,
    /// The middleware props.
    pub middleware_props: Props,
}

/// A middleware that records every call it intercepts.
///
/// By default it forwards to `next`. A [`short_circuit`](Self::short_circuit)
/// recorder returns `Ok(None)` instead, so nothing downstream runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingMiddleware {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    short_circuit: bool,
}

impl RecordingMiddleware {
    /// Create a forwarding recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder that stops the chain.
    pub fn short_circuit() -> Self {
        Self {
            calls: Arc::default(),
            short_circuit: true,
        }
    }

    /// Get a clone of the recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<S: 'static, V: 'static> Middleware<S, V> for RecordingMiddleware {
    fn handle(
        &self,
        props: &Props,
        middleware_props: &Props,
        _services: &RenderServices<S>,
        next: Next<'_, S, V>,
    ) -> RenderResult<V> {
        self.calls.lock().unwrap().push(RecordedCall {
            props: props.clone(),
            middleware_props: middleware_props.clone(),
        });
        if self.short_circuit {
            return Ok(None);
        }
        next.run()
    }
}
