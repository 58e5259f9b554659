// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the configuration value object, the closed set of
//! configuration type tags, and the crate's error type. It has no knowledge of
//! how prototypes are stored.

pub mod configuration;
pub mod configuration_type;
pub mod errors;

// Re-export commonly used types
pub use configuration::{Configuration, ConfigurationBuilder};
pub use configuration_type::ConfigurationType;
pub use errors::{ConfigError, Result};
