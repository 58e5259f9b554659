// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prototype registry implementation.
//!
//! This module provides `ConfigurationPrototypeRegistry`, a keyed store holding
//! one canonical prototype per `ConfigurationType`, and its builder.

use crate::domain::{ConfigError, Configuration, ConfigurationType, Result};
use crate::ports::ClonableObject;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A registry of prototypes keyed by configuration type.
///
/// Each tag maps to at most one prototype; registering another prototype under
/// the same tag replaces the earlier one. Entries are never removed.
///
/// The registry performs no synchronization. Wrap it in a
/// [`SharedPrototypeRegistry`](crate::service::SharedPrototypeRegistry) to use
/// it from several threads.
///
/// # Examples
///
/// ```rust
/// use protocfg::prelude::*;
///
/// let mut registry = ConfigurationPrototypeRegistry::new();
/// registry.add_prototype(Configuration::new(
///     "Black",
///     true,
///     "English",
///     true,
///     12,
///     "Arial",
///     ConfigurationType::Basic,
/// ));
///
/// let copy = registry.clone(ConfigurationType::Basic).unwrap();
/// assert_eq!(copy.font_family(), "Arial");
/// ```
pub struct ConfigurationPrototypeRegistry<P: ClonableObject = Configuration> {
    /// Stored prototypes, one per tag
    prototypes: HashMap<ConfigurationType, Arc<P>>,
}

impl<P: ClonableObject> ConfigurationPrototypeRegistry<P> {
    /// Creates a new empty registry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use protocfg::service::ConfigurationPrototypeRegistry;
    ///
    /// let registry: ConfigurationPrototypeRegistry = ConfigurationPrototypeRegistry::new();
    /// assert!(registry.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Creates a new registry builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use protocfg::prelude::*;
    ///
    /// let registry = ConfigurationPrototypeRegistry::builder()
    ///     .with_prototype(Configuration::builder(ConfigurationType::Default).build())
    ///     .build();
    /// assert!(registry.contains(ConfigurationType::Default));
    /// ```
    pub fn builder() -> PrototypeRegistryBuilder<P> {
        PrototypeRegistryBuilder::new()
    }

    /// Registers a prototype under its own configuration type.
    ///
    /// Any prototype already stored under that tag is replaced.
    pub fn add_prototype(&mut self, prototype: P) {
        self.add_shared_prototype(Arc::new(prototype));
    }

    /// Registers a prototype the caller keeps a handle to.
    ///
    /// The registry stores the given `Arc` itself, so
    /// [`get_prototype`](Self::get_prototype) hands back that same allocation.
    pub fn add_shared_prototype(&mut self, prototype: Arc<P>) {
        let configuration_type = prototype.configuration_type();

        tracing::debug!(
            "Registering prototype for configuration type '{}'",
            configuration_type
        );

        if self
            .prototypes
            .insert(configuration_type, prototype)
            .is_some()
        {
            tracing::debug!(
                "Replaced existing prototype for configuration type '{}'",
                configuration_type
            );
        }
    }

    /// Returns the stored prototype for a tag, if one was registered.
    ///
    /// This is a reference lookup: the returned `Arc` points at the stored
    /// prototype itself, not at a copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use protocfg::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let prototype = Arc::new(Configuration::builder(ConfigurationType::Basic).build());
    /// let mut registry = ConfigurationPrototypeRegistry::new();
    /// registry.add_shared_prototype(Arc::clone(&prototype));
    ///
    /// let stored = registry.get_prototype(ConfigurationType::Basic).unwrap();
    /// assert!(Arc::ptr_eq(&stored, &prototype));
    /// assert!(registry.get_prototype(ConfigurationType::Advanced).is_none());
    /// ```
    pub fn get_prototype(&self, configuration_type: ConfigurationType) -> Option<Arc<P>> {
        self.prototypes.get(&configuration_type).cloned()
    }

    /// Returns a fresh copy of the prototype stored for a tag.
    ///
    /// The copy is produced by the prototype's own
    /// [`clone_object`](ClonableObject::clone_object) and has no remaining
    /// link to the registry. Returns `None` when nothing is registered under
    /// the tag.
    pub fn clone(&self, configuration_type: ConfigurationType) -> Option<P> {
        let prototype = self.prototypes.get(&configuration_type)?;
        tracing::trace!(
            "Cloning prototype for configuration type '{}'",
            configuration_type
        );
        Some(prototype.clone_object())
    }

    /// Returns a fresh copy of the prototype stored for a tag, or an error.
    ///
    /// # Returns
    ///
    /// * `Ok(P)` - A new copy of the prototype
    /// * `Err(ConfigError::PrototypeNotFound)` - Nothing is registered under the tag
    ///
    /// # Examples
    ///
    /// ```rust
    /// use protocfg::prelude::*;
    ///
    /// let registry: ConfigurationPrototypeRegistry = ConfigurationPrototypeRegistry::new();
    /// let err = registry.try_clone(ConfigurationType::Custom).unwrap_err();
    /// assert!(matches!(err, ConfigError::PrototypeNotFound { .. }));
    /// ```
    pub fn try_clone(&self, configuration_type: ConfigurationType) -> Result<P> {
        self.clone(configuration_type)
            .ok_or(ConfigError::PrototypeNotFound { configuration_type })
    }

    /// Checks whether a prototype is registered under a tag.
    pub fn contains(&self, configuration_type: ConfigurationType) -> bool {
        self.prototypes.contains_key(&configuration_type)
    }

    /// Returns the number of registered prototypes.
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Returns `true` if no prototype has been registered.
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Returns the registered tags in declaration order.
    pub fn configuration_types(&self) -> Vec<ConfigurationType> {
        ConfigurationType::ALL
            .into_iter()
            .filter(|configuration_type| self.contains(*configuration_type))
            .collect()
    }
}

impl<P: ClonableObject> Default for ConfigurationPrototypeRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ClonableObject + fmt::Debug> fmt::Debug for ConfigurationPrototypeRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationPrototypeRegistry")
            .field("prototypes", &self.prototypes)
            .finish()
    }
}

/// Builder for constructing a `ConfigurationPrototypeRegistry`.
///
/// Prototypes are registered in the order they are added, so a later
/// prototype with the same tag wins.
///
/// # Examples
///
/// ```rust
/// use protocfg::prelude::*;
///
/// let registry = PrototypeRegistryBuilder::new()
///     .with_prototype(Configuration::builder(ConfigurationType::Basic).font_size(10).build())
///     .with_prototype(Configuration::builder(ConfigurationType::Basic).font_size(11).build())
///     .build();
///
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.clone(ConfigurationType::Basic).unwrap().font_size(), 11);
/// ```
pub struct PrototypeRegistryBuilder<P: ClonableObject = Configuration> {
    prototypes: Vec<Arc<P>>,
}

impl<P: ClonableObject> PrototypeRegistryBuilder<P> {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            prototypes: Vec::new(),
        }
    }

    /// Adds a prototype to the builder.
    pub fn with_prototype(mut self, prototype: P) -> Self {
        self.prototypes.push(Arc::new(prototype));
        self
    }

    /// Adds a prototype the caller keeps a handle to.
    pub fn with_shared_prototype(mut self, prototype: Arc<P>) -> Self {
        self.prototypes.push(prototype);
        self
    }

    /// Builds the registry.
    pub fn build(self) -> ConfigurationPrototypeRegistry<P> {
        let mut registry = ConfigurationPrototypeRegistry::new();

        for prototype in self.prototypes {
            registry.add_shared_prototype(prototype);
        }

        registry
    }
}

impl<P: ClonableObject> Default for PrototypeRegistryBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
