// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait (port) that prototype families implement so
//! the registries in the service layer can store and copy them.

pub mod clonable;

// Re-export commonly used types
pub use clonable::ClonableObject;
