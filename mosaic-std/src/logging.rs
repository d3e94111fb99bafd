//! Standard loggers.

use mosaic_core::Logger;

/// Reports warnings through `tracing`.
///
/// Without the `tracing` feature warnings are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warn(&self, message: &str) {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(target: "mosaic", "{message}");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = message;
        }
    }
}

/// Drops every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn warn(&self, _message: &str) {}
}
