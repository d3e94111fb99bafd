//! Standard middleware.
//!
//! - [`LoggingMiddleware`]: traces every render call
//! - [`ConditionalMiddleware`]: applies an inner middleware when a predicate holds
//! - [`SkipRenderMiddleware`]: suppresses components flagged in their middleware props
//! - [`CatchMiddleware`]: isolates failures to the failing component
//! - [`DefaultPropsMiddleware`]: fills in middleware props the caller left out

mod catch;
mod conditional;
mod defaults;
mod logging;
mod skip;

pub use catch::CatchMiddleware;
pub use conditional::ConditionalMiddleware;
pub use defaults::DefaultPropsMiddleware;
pub use logging::LoggingMiddleware;
pub use skip::SkipRenderMiddleware;
