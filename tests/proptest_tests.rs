// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the cloning and registry guarantees over arbitrary
//! configuration values, including ones no validation would ever accept.

use protocfg::domain::{Configuration, ConfigurationType};
use protocfg::ports::ClonableObject;
use protocfg::service::ConfigurationPrototypeRegistry;
use proptest::prelude::*;
use std::sync::Arc;

fn configuration_type() -> impl Strategy<Value = ConfigurationType> {
    prop::sample::select(ConfigurationType::ALL.to_vec())
}

fn configuration() -> impl Strategy<Value = Configuration> {
    (
        "\\PC*",
        prop::bool::ANY,
        "\\PC*",
        prop::bool::ANY,
        prop::num::i32::ANY,
        "\\PC*",
        configuration_type(),
    )
        .prop_map(
            |(theme_color, auto_save, language, dark_mode, font_size, font_family, tag)| {
                Configuration::new(
                    theme_color,
                    auto_save,
                    language,
                    dark_mode,
                    font_size,
                    font_family,
                    tag,
                )
            },
        )
}

// Test that clone_object copies every field into fresh storage
proptest! {
    #[test]
    fn test_clone_object_equal_and_distinct(config in configuration()) {
        let copy = config.clone_object();
        if !config.theme_color().is_empty() {
            prop_assert_ne!(config.theme_color().as_ptr(), copy.theme_color().as_ptr());
        }
        prop_assert_eq!(copy, config);
    }
}

// Test that customizing a clone never changes the source
proptest! {
    #[test]
    fn test_clone_independence(
        config in configuration(),
        theme_color in "\\PC*",
        font_size in prop::num::i32::ANY
    ) {
        let snapshot = config.clone();
        let _custom = config
            .clone_object()
            .with_theme_color(theme_color)
            .with_font_size(font_size);
        prop_assert_eq!(config, snapshot);
    }
}

// Test that get_prototype hands back the registered instance
proptest! {
    #[test]
    fn test_registry_round_trip(config in configuration()) {
        let config = Arc::new(config);
        let mut registry = ConfigurationPrototypeRegistry::new();
        registry.add_shared_prototype(Arc::clone(&config));

        let stored = registry.get_prototype(config.configuration_type()).unwrap();
        prop_assert!(Arc::ptr_eq(&stored, &config));
    }
}

// Test that clone returns an equal value backed by its own storage
proptest! {
    #[test]
    fn test_registry_clone_round_trip(config in configuration()) {
        let mut registry = ConfigurationPrototypeRegistry::new();
        registry.add_prototype(config.clone());

        let stored = registry.get_prototype(config.configuration_type()).unwrap();
        let copy = registry.clone(config.configuration_type()).unwrap();
        if !stored.font_family().is_empty() {
            prop_assert_ne!(copy.font_family().as_ptr(), stored.font_family().as_ptr());
        }
        prop_assert_eq!(copy, config);
    }
}

// Test that only registered tags are found
proptest! {
    #[test]
    fn test_unregistered_tags_are_absent(
        configs in prop::collection::vec(configuration(), 0..6),
        lookup in configuration_type()
    ) {
        let mut registry = ConfigurationPrototypeRegistry::new();
        for config in &configs {
            registry.add_prototype(config.clone());
        }

        let registered = configs.iter().any(|c| c.configuration_type() == lookup);
        prop_assert_eq!(registry.get_prototype(lookup).is_some(), registered);
        prop_assert_eq!(registry.clone(lookup).is_some(), registered);
    }
}

// Test that the last registration per tag wins
proptest! {
    #[test]
    fn test_last_write_wins(configs in prop::collection::vec(configuration(), 1..10)) {
        let mut registry = ConfigurationPrototypeRegistry::new();
        for config in &configs {
            registry.add_prototype(config.clone());
        }

        for tag in ConfigurationType::ALL {
            let expected = configs.iter().rev().find(|c| c.configuration_type() == tag);
            let cloned = registry.clone(tag);
            prop_assert_eq!(cloned.as_ref(), expected);
        }
    }
}

// Test that tag names parse regardless of case
proptest! {
    #[test]
    fn test_tag_parse_ignores_case(tag in configuration_type(), lower in prop::bool::ANY) {
        let name = if lower {
            tag.as_str().to_lowercase()
        } else {
            tag.as_str().to_string()
        };
        prop_assert_eq!(name.parse::<ConfigurationType>().unwrap(), tag);
    }
}
