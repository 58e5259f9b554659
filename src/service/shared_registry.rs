// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread-safe prototype registry.
//!
//! This module provides `SharedPrototypeRegistry`, which puts a
//! `ConfigurationPrototypeRegistry` behind a read-write lock so a single set of
//! prototypes can be registered and cloned from several threads.

use crate::domain::{Configuration, ConfigurationType, Result};
use crate::ports::ClonableObject;
use crate::service::ConfigurationPrototypeRegistry;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A prototype registry that can be shared between threads.
///
/// Registration takes the write lock; lookups and clones take the read lock.
/// Share it by wrapping it in an `Arc`.
///
/// # Examples
///
/// ```rust
/// use protocfg::prelude::*;
/// use std::sync::Arc;
/// use std::thread;
///
/// let registry = Arc::new(SharedPrototypeRegistry::new());
/// registry.add_prototype(Configuration::builder(ConfigurationType::Basic).font_size(12).build());
///
/// let worker = {
///     let registry = Arc::clone(&registry);
///     thread::spawn(move || registry.clone_prototype(ConfigurationType::Basic))
/// };
///
/// let copy = worker.join().unwrap().unwrap();
/// assert_eq!(copy.font_size(), 12);
/// ```
pub struct SharedPrototypeRegistry<P: ClonableObject = Configuration> {
    inner: RwLock<ConfigurationPrototypeRegistry<P>>,
}

impl<P: ClonableObject> SharedPrototypeRegistry<P> {
    /// Creates a new empty shared registry.
    pub fn new() -> Self {
        Self::from(ConfigurationPrototypeRegistry::new())
    }

    // A panic while holding the lock cannot leave the map half-updated, since
    // every mutation is a single insert.
    fn read(&self) -> RwLockReadGuard<'_, ConfigurationPrototypeRegistry<P>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConfigurationPrototypeRegistry<P>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a prototype under its own configuration type.
    ///
    /// See [`ConfigurationPrototypeRegistry::add_prototype`].
    pub fn add_prototype(&self, prototype: P) {
        self.write().add_prototype(prototype);
    }

    /// Registers a prototype the caller keeps a handle to.
    ///
    /// See [`ConfigurationPrototypeRegistry::add_shared_prototype`].
    pub fn add_shared_prototype(&self, prototype: Arc<P>) {
        self.write().add_shared_prototype(prototype);
    }

    /// Returns the stored prototype for a tag, if one was registered.
    pub fn get_prototype(&self, configuration_type: ConfigurationType) -> Option<Arc<P>> {
        self.read().get_prototype(configuration_type)
    }

    /// Returns a fresh copy of the prototype stored for a tag.
    ///
    /// Named `clone_prototype` rather than `clone` so that calls through an
    /// `Arc<SharedPrototypeRegistry>` are not captured by `Arc::clone`.
    pub fn clone_prototype(&self, configuration_type: ConfigurationType) -> Option<P> {
        self.read().clone(configuration_type)
    }

    /// Returns a fresh copy of the prototype stored for a tag, or an error.
    pub fn try_clone(&self, configuration_type: ConfigurationType) -> Result<P> {
        self.read().try_clone(configuration_type)
    }

    /// Checks whether a prototype is registered under a tag.
    pub fn contains(&self, configuration_type: ConfigurationType) -> bool {
        self.read().contains(configuration_type)
    }

    /// Returns the number of registered prototypes.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no prototype has been registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Consumes the wrapper and returns the plain registry.
    pub fn into_inner(self) -> ConfigurationPrototypeRegistry<P> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: ClonableObject> Default for SharedPrototypeRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ClonableObject> From<ConfigurationPrototypeRegistry<P>> for SharedPrototypeRegistry<P> {
    fn from(registry: ConfigurationPrototypeRegistry<P>) -> Self {
        Self {
            inner: RwLock::new(registry),
        }
    }
}
