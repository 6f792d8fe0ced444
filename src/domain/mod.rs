//! Domain layer: registries, resolution outcomes and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Registry and resolution data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Registries are immutable after construction; nothing here takes a lock
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Resolution logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
