//! Component registry.
//!
//! Registration happens on a [`RegistryBuilder`] during setup. Calling
//! `.build()` freezes it into an immutable [`Registry`] that can be shared
//! across threads and read by any number of concurrent render passes.

use crate::logging::TracingLogger;
use mosaic_core::{
    ComponentKind, ComponentRegistration, DynDataDefinition, Logger, Middleware, MiddlewareStack,
    MissingComponent, RegistryError, RenderConfig,
};
use std::{collections::HashMap, fmt, sync::Arc};

// ============================================================================
// RegistryBuilder - for registering components and middleware
// ============================================================================

/// Builder for constructing a Registry.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register(hero)?
///     .register(teaser)?
///     .register_middleware(LoggingMiddleware::new())
///     .build();
/// ```
pub struct RegistryBuilder<S, V> {
    components: Vec<ComponentRegistration<S, V>>,
    index: HashMap<String, usize>,
    middleware: MiddlewareStack<S, V>,
    config: RenderConfig,
    logger: Arc<dyn Logger>,
}

impl<S, V> RegistryBuilder<S, V> {
    /// Create an empty builder with the default configuration and a
    /// [`TracingLogger`].
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            index: HashMap::new(),
            middleware: MiddlewareStack::new(),
            config: RenderConfig::default(),
            logger: Arc::new(TracingLogger),
        }
    }

    /// Set the render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the logger for unregistered-type misses.
    pub fn with_logger<L: Logger + 'static>(mut self, logger: L) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Register a component.
    ///
    /// Fails if the type is already registered; the original is retained.
    pub fn register(
        mut self,
        registration: ComponentRegistration<S, V>,
    ) -> Result<Self, RegistryError> {
        self.register_mut(registration)?;
        Ok(self)
    }

    /// Register a component (mutable version).
    pub fn register_mut(
        &mut self,
        registration: ComponentRegistration<S, V>,
    ) -> Result<(), RegistryError> {
        if self.index.contains_key(registration.kind()) {
            return Err(RegistryError::DuplicateRegistration(
                registration.kind().to_owned(),
            ));
        }
        self.index
            .insert(registration.kind().to_owned(), self.components.len());
        self.components.push(registration);
        Ok(())
    }

    /// Append a middleware.
    pub fn register_middleware<M: Middleware<S, V>>(mut self, middleware: M) -> Self {
        self.register_middleware_mut(middleware);
        self
    }

    /// Append a middleware (mutable version).
    pub fn register_middleware_mut<M: Middleware<S, V>>(&mut self, middleware: M) {
        self.middleware.push(middleware);
    }

    /// Check whether a type has been registered so far.
    pub fn is_registered(&self, kind: &str) -> bool {
        self.index.contains_key(kind)
    }

    /// Get the number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the builder has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Registry<S, V> {
        Registry {
            components: self.components,
            index: self.index,
            middleware: self.middleware,
            config: self.config,
            logger: self.logger,
        }
    }

    /// Build the registry, failing unless every kind of `K` is registered.
    pub fn build_checked<K: ComponentKind>(self) -> Result<Registry<S, V>, RegistryError> {
        let missing: Vec<String> = K::ALL
            .iter()
            .map(ComponentKind::type_key)
            .filter(|key| !self.index.contains_key(*key))
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            return Err(RegistryError::MissingKinds(missing));
        }
        Ok(self.build())
    }
}

impl<S, V> Default for RegistryBuilder<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry - immutable, thread-safe component storage
// ============================================================================

/// An immutable, thread-safe registry of components and middleware.
///
/// Created by calling [`RegistryBuilder::build`]. Share it via `Arc` between
/// concurrent render passes.
pub struct Registry<S, V> {
    components: Vec<ComponentRegistration<S, V>>,
    index: HashMap<String, usize>,
    middleware: MiddlewareStack<S, V>,
    config: RenderConfig,
    logger: Arc<dyn Logger>,
}

impl<S, V> Registry<S, V> {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder<S, V> {
        RegistryBuilder::new()
    }

    /// Check whether a type is registered.
    pub fn is_registered(&self, kind: &str) -> bool {
        self.index.contains_key(kind)
    }

    /// Look up a registration without reporting a miss.
    pub fn lookup(&self, kind: &str) -> Option<&ComponentRegistration<S, V>> {
        self.index.get(kind).map(|&i| &self.components[i])
    }

    /// Look up a registration for rendering.
    ///
    /// Outside production a miss logs one warning naming the type. In
    /// production a miss is silent. Either way the caller renders nothing.
    pub fn get(&self, kind: &str) -> Option<&ComponentRegistration<S, V>> {
        let found = self.lookup(kind);
        if found.is_none() && !self.config.is_production() {
            self.logger.warn(&MissingComponent(kind.to_owned()).to_string());
        }
        found
    }

    /// Look up a registration by closed kind.
    pub fn get_kind<K: ComponentKind>(&self, kind: K) -> Option<&ComponentRegistration<S, V>> {
        self.get(kind.type_key())
    }

    /// The data definition registered for a type.
    pub fn data_definition(&self, kind: &str) -> Option<&dyn DynDataDefinition<S>> {
        self.lookup(kind)?.data_definition()
    }

    /// Registered type keys in registration order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(ComponentRegistration::kind)
    }

    /// The middleware stack.
    pub fn middleware(&self) -> &MiddlewareStack<S, V> {
        &self.middleware
    }

    /// The render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Get the number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<S, V> fmt::Debug for Registry<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("components", &self.components)
            .field("middleware", &self.middleware.len())
            .field("config", &self.config)
            .finish()
    }
}
