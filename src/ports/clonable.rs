// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clonable prototype trait definition.
//!
//! This module defines the `ClonableObject` trait, the port through which the
//! prototype registries store and copy prototypes. Any type that implements it
//! can be registered, not only `Configuration`.

use crate::domain::ConfigurationType;

/// A trait for objects that can serve as prototypes.
///
/// # Contract
///
/// `clone_object` must return a new, independently owned value whose fields
/// equal those of `self` at the moment of the call. Mutating either value
/// afterwards must not affect the other, so any field with shared interior
/// state has to be deep-copied. The operation cannot fail.
///
/// `configuration_type` names the tag the prototype is filed under in a
/// registry.
///
/// # Examples
///
/// ```rust
/// use protocfg::domain::ConfigurationType;
/// use protocfg::ports::ClonableObject;
/// use protocfg::service::ConfigurationPrototypeRegistry;
///
/// #[derive(Debug, PartialEq)]
/// struct KeyBindings {
///     bindings: Vec<(String, String)>,
/// }
///
/// impl ClonableObject for KeyBindings {
///     fn clone_object(&self) -> Self {
///         KeyBindings {
///             bindings: self.bindings.clone(),
///         }
///     }
///
///     fn configuration_type(&self) -> ConfigurationType {
///         ConfigurationType::Custom
///     }
/// }
///
/// let mut registry = ConfigurationPrototypeRegistry::new();
/// registry.add_prototype(KeyBindings {
///     bindings: vec![("save".to_string(), "Ctrl+S".to_string())],
/// });
///
/// let copy = registry.clone(ConfigurationType::Custom).unwrap();
/// assert_eq!(copy.bindings.len(), 1);
/// ```
pub trait ClonableObject {
    /// Returns a new value with the same field values as `self`.
    fn clone_object(&self) -> Self
    where
        Self: Sized;

    /// Returns the tag this prototype is registered under.
    fn configuration_type(&self) -> ConfigurationType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Counter {
        tag: ConfigurationType,
        hits: Vec<u32>,
    }

    impl ClonableObject for Counter {
        fn clone_object(&self) -> Self {
            Counter {
                tag: self.tag,
                hits: self.hits.clone(),
            }
        }

        fn configuration_type(&self) -> ConfigurationType {
            self.tag
        }
    }

    #[test]
    fn test_custom_prototype_deep_copies() {
        let original = Counter {
            tag: ConfigurationType::Advanced,
            hits: vec![1, 2, 3],
        };
        let mut copy = original.clone_object();
        copy.hits.push(4);

        assert_eq!(original.hits, vec![1, 2, 3]);
        assert_eq!(copy.hits, vec![1, 2, 3, 4]);
        assert_eq!(copy.configuration_type(), ConfigurationType::Advanced);
    }
}
