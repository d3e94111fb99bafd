//! Render configuration.
//!
//! The environment is passed in explicitly at construction. It gates only
//! whether unregistered-type misses are logged, never whether a page renders.

use std::{convert::Infallible, str::FromStr};

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Misses are logged.
    #[default]
    Development,
    /// Misses are silent.
    Production,
}

impl Environment {
    /// Variable read by [`Environment::from_env`].
    pub const ENV_VAR: &'static str = "MOSAIC_ENV";

    /// Read the environment from `MOSAIC_ENV`. Unset means development.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Parse an environment name. `production` and `prod` (any case) select
    /// production; anything else is development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Check for production.
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Configuration for a registry and its dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    /// The deployment environment.
    pub environment: Environment,
}

impl RenderConfig {
    /// Default configuration (development).
    pub fn new() -> Self {
        Self::default()
    }

    /// Production configuration.
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
        }
    }

    /// Configuration from `MOSAIC_ENV`.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
        }
    }

    /// Set the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Check for production.
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
