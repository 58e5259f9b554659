// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration type tags.
//!
//! This module provides `ConfigurationType`, the closed set of tags used to
//! tell configuration families apart and to key the prototype registry.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tag identifying a family of configurations.
///
/// Tags carry no behavior of their own. They are rendered and parsed using
/// their upper-case names (`BASIC`, `ADVANCED`, `CUSTOM`, `DEFAULT`).
///
/// # Examples
///
/// ```
/// use protocfg::domain::ConfigurationType;
///
/// let tag: ConfigurationType = "advanced".parse().unwrap();
/// assert_eq!(tag, ConfigurationType::Advanced);
/// assert_eq!(tag.to_string(), "ADVANCED");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfigurationType {
    /// A basic configuration.
    Basic,
    /// An advanced configuration.
    Advanced,
    /// A user-customized configuration.
    Custom,
    /// The default configuration.
    Default,
}

impl ConfigurationType {
    /// Every configuration type, in declaration order.
    pub const ALL: [ConfigurationType; 4] = [
        ConfigurationType::Basic,
        ConfigurationType::Advanced,
        ConfigurationType::Custom,
        ConfigurationType::Default,
    ];

    /// Returns the upper-case name of the tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use protocfg::domain::ConfigurationType;
    ///
    /// assert_eq!(ConfigurationType::Custom.as_str(), "CUSTOM");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationType::Basic => "BASIC",
            ConfigurationType::Advanced => "ADVANCED",
            ConfigurationType::Custom => "CUSTOM",
            ConfigurationType::Default => "DEFAULT",
        }
    }
}

impl fmt::Display for ConfigurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigurationType {
    type Err = ConfigError;

    /// Parses a tag name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        ConfigurationType::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::InvalidConfigurationType {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_uses_upper_case_names() {
        assert_eq!(ConfigurationType::Basic.to_string(), "BASIC");
        assert_eq!(ConfigurationType::Advanced.to_string(), "ADVANCED");
        assert_eq!(ConfigurationType::Custom.to_string(), "CUSTOM");
        assert_eq!(ConfigurationType::Default.to_string(), "DEFAULT");
    }

    #[test]
    fn test_parse_exact_names() {
        for tag in ConfigurationType::ALL {
            assert_eq!(tag.as_str().parse::<ConfigurationType>().unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "basic".parse::<ConfigurationType>().unwrap(),
            ConfigurationType::Basic
        );
        assert_eq!(
            "  Default ".parse::<ConfigurationType>().unwrap(),
            ConfigurationType::Default
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "premium".parse::<ConfigurationType>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidConfigurationType {
                value: "premium".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_string() {
        assert!("".parse::<ConfigurationType>().is_err());
    }

    #[test]
    fn test_all_is_distinct() {
        let set: HashSet<_> = ConfigurationType::ALL.into_iter().collect();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_copy_semantics() {
        let a = ConfigurationType::Custom;
        let b = a;
        assert_eq!(a, b);
    }
}
