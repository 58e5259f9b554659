// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application configuration value object.
//!
//! This module provides the `Configuration` type, an immutable bundle of user
//! interface settings tagged with a `ConfigurationType`. Configurations are the
//! prototypes stored in the registry.

use crate::domain::ConfigurationType;
use crate::ports::ClonableObject;
use serde::{Deserialize, Serialize};

/// A fully-initialized set of application settings.
///
/// Values are stored verbatim. Nothing is validated: empty strings and zero or
/// negative font sizes are accepted. Two configurations compare equal when all
/// seven fields match.
///
/// # Examples
///
/// ```
/// use protocfg::domain::{Configuration, ConfigurationType};
/// use protocfg::ports::ClonableObject;
///
/// let config = Configuration::new(
///     "Black",
///     true,
///     "English",
///     true,
///     12,
///     "Arial",
///     ConfigurationType::Basic,
/// );
/// let copy = config.clone_object();
/// assert_eq!(copy, config);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    theme_color: String,
    auto_save: bool,
    language: String,
    dark_mode: bool,
    font_size: i32,
    font_family: String,
    configuration_type: ConfigurationType,
}

impl Configuration {
    /// Creates a new configuration from all seven settings.
    pub fn new(
        theme_color: impl Into<String>,
        auto_save: bool,
        language: impl Into<String>,
        dark_mode: bool,
        font_size: i32,
        font_family: impl Into<String>,
        configuration_type: ConfigurationType,
    ) -> Self {
        Self {
            theme_color: theme_color.into(),
            auto_save,
            language: language.into(),
            dark_mode,
            font_size,
            font_family: font_family.into(),
            configuration_type,
        }
    }

    /// Creates a builder for a configuration of the given type.
    ///
    /// Settings that are never set keep their zero values (empty strings,
    /// `false` and `0`).
    ///
    /// # Examples
    ///
    /// ```
    /// use protocfg::domain::{Configuration, ConfigurationType};
    ///
    /// let config = Configuration::builder(ConfigurationType::Custom)
    ///     .theme_color("Navy")
    ///     .font_size(14)
    ///     .build();
    ///
    /// assert_eq!(config.theme_color(), "Navy");
    /// assert_eq!(config.font_size(), 14);
    /// assert_eq!(config.language(), "");
    /// ```
    pub fn builder(configuration_type: ConfigurationType) -> ConfigurationBuilder {
        ConfigurationBuilder::new(configuration_type)
    }

    /// Returns the theme color.
    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }

    /// Returns whether auto-save is enabled.
    pub fn auto_save(&self) -> bool {
        self.auto_save
    }

    /// Returns the interface language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns whether dark mode is enabled.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Returns the font size.
    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the configuration type tag.
    pub fn configuration_type(&self) -> ConfigurationType {
        self.configuration_type
    }

    /// Returns this configuration with the theme color replaced.
    ///
    /// Meant for customizing a copy obtained from the registry:
    ///
    /// ```
    /// use protocfg::prelude::*;
    ///
    /// let mut registry = ConfigurationPrototypeRegistry::new();
    /// registry.add_prototype(Configuration::new(
    ///     "Black", true, "English", true, 12, "Arial", ConfigurationType::Basic,
    /// ));
    ///
    /// let light = registry
    ///     .clone(ConfigurationType::Basic)
    ///     .unwrap()
    ///     .with_theme_color("White")
    ///     .with_dark_mode(false);
    ///
    /// assert_eq!(light.theme_color(), "White");
    /// let prototype = registry.get_prototype(ConfigurationType::Basic).unwrap();
    /// assert_eq!(prototype.theme_color(), "Black");
    /// ```
    pub fn with_theme_color(mut self, theme_color: impl Into<String>) -> Self {
        self.theme_color = theme_color.into();
        self
    }

    /// Returns this configuration with auto-save replaced.
    pub fn with_auto_save(mut self, auto_save: bool) -> Self {
        self.auto_save = auto_save;
        self
    }

    /// Returns this configuration with the language replaced.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Returns this configuration with dark mode replaced.
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Returns this configuration with the font size replaced.
    pub fn with_font_size(mut self, font_size: i32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns this configuration with the font family replaced.
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }
}

impl ClonableObject for Configuration {
    fn clone_object(&self) -> Self {
        // Every field is owned, so the copy shares no storage with `self`.
        Configuration::new(
            self.theme_color.as_str(),
            self.auto_save,
            self.language.as_str(),
            self.dark_mode,
            self.font_size,
            self.font_family.as_str(),
            self.configuration_type,
        )
    }

    fn configuration_type(&self) -> ConfigurationType {
        self.configuration_type
    }
}

/// Builder for constructing a `Configuration` with named settings.
#[derive(Debug)]
pub struct ConfigurationBuilder {
    configuration: Configuration,
}

impl ConfigurationBuilder {
    /// Creates a new builder for the given configuration type.
    pub fn new(configuration_type: ConfigurationType) -> Self {
        Self {
            configuration: Configuration::new("", false, "", false, 0, "", configuration_type),
        }
    }

    /// Sets the theme color.
    pub fn theme_color(mut self, theme_color: impl Into<String>) -> Self {
        self.configuration.theme_color = theme_color.into();
        self
    }

    /// Sets whether auto-save is enabled.
    pub fn auto_save(mut self, auto_save: bool) -> Self {
        self.configuration.auto_save = auto_save;
        self
    }

    /// Sets the interface language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.configuration.language = language.into();
        self
    }

    /// Sets whether dark mode is enabled.
    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.configuration.dark_mode = dark_mode;
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: i32) -> Self {
        self.configuration.font_size = font_size;
        self
    }

    /// Sets the font family.
    pub fn font_family(mut self, font_family: impl Into<String>) -> Self {
        self.configuration.font_family = font_family.into();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Configuration {
        self.configuration
    }
}
