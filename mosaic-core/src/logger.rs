//! The logging collaborator used to report unregistered types.

use std::sync::Arc;

/// Receives warnings about degraded renders.
///
/// Registries call [`Logger::warn`] once per unregistered-type miss, and only
/// outside production configuration.
pub trait Logger: Send + Sync {
    /// Report a warning.
    fn warn(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}
