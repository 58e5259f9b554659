// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the prototype registry crate.
//!
//! Looking up a tag with no registered prototype is a routine outcome and is
//! normally reported as `None`. The errors here cover the few places where a
//! caller explicitly asks for a `Result` instead.

use crate::domain::ConfigurationType;
use thiserror::Error;

/// The main error type for prototype registry operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use protocfg::domain::{ConfigError, ConfigurationType};
///
/// let error = ConfigError::PrototypeNotFound {
///     configuration_type: ConfigurationType::Advanced,
/// };
/// assert_eq!(
///     error.to_string(),
///     "No prototype registered for configuration type ADVANCED"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No prototype has been registered under the requested tag.
    #[error("No prototype registered for configuration type {configuration_type}")]
    PrototypeNotFound {
        /// The tag that was looked up
        configuration_type: ConfigurationType,
    },

    /// A string did not name any known configuration type.
    #[error("Invalid configuration type: '{value}'")]
    InvalidConfigurationType {
        /// The string that failed to parse
        value: String,
    },
}

/// A specialized Result type for prototype registry operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
