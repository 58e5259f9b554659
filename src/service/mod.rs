// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the prototype registries.
//!
//! This module contains the registry that stores one prototype per
//! configuration type and hands out clones of it, plus a lock-protected
//! wrapper for sharing it between threads.

pub mod prototype_registry;
pub mod shared_registry;

// Re-export commonly used types
pub use prototype_registry::{ConfigurationPrototypeRegistry, PrototypeRegistryBuilder};
pub use shared_registry::SharedPrototypeRegistry;
