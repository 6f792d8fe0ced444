//! Infrastructure layer: concrete registry storage and loading.
//!
//! # Modules
//!
//! - [`memory`] - In-memory repository implementations
//! - [`registry_file`] - JSON registry file loaded once at startup

pub mod memory;
pub mod registry_file;
