// SPDX-License-Identifier: MIT OR Apache-2.0

//! A prototype registry for application configurations.
//!
//! Building a fully-populated configuration means supplying every setting at
//! every call site. This crate lets you build one canonical instance per
//! configuration type once, register it, and then clone fresh, independent
//! copies from it whenever you need one.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`Configuration`, `ConfigurationType`, errors)
//! - **Ports**: The `ClonableObject` trait that any prototype family implements
//! - **Service**: The prototype registries that store and clone prototypes
//!
//! # Quick Start
//!
//! ```rust
//! use protocfg::prelude::*;
//!
//! let mut registry = ConfigurationPrototypeRegistry::new();
//! registry.add_prototype(Configuration::new(
//!     "Black",
//!     true,
//!     "English",
//!     true,
//!     12,
//!     "Arial",
//!     ConfigurationType::Basic,
//! ));
//!
//! let copy = registry.clone(ConfigurationType::Basic).unwrap();
//! assert_eq!(copy.theme_color(), "Black");
//! assert!(registry.clone(ConfigurationType::Advanced).is_none());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, Configuration, ConfigurationBuilder, ConfigurationType, Result,
    };
    pub use crate::ports::ClonableObject;
    pub use crate::service::{
        ConfigurationPrototypeRegistry, PrototypeRegistryBuilder, SharedPrototypeRegistry,
    };
}
