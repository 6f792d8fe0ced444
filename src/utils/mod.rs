//! Utility functions used while building registries.
//!
//! - [`registry_validation`] - Key and redirect target validation

pub mod registry_validation;
