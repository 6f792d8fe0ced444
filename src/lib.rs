//! # URL Redirector
//!
//! A tiny key-to-URL redirect service built with Axum.
//!
//! `GET /github` answers `302 Found` with `Location: https://github.com/jawscout`;
//! unknown keys answer `500` with body `Key not in DB`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Registries, resolution outcomes and repository traits
//! - **Application Layer** ([`application`]) - Two-stage key resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage and registry file loading
//! - **API Layer** ([`api`]) - The dispatch handler and middleware
//!
//! ## Resolution Order
//!
//! A key is looked up in the redirect registry first. The *resolved value* is
//! then matched against the static-page registry; a match dispatches to the
//! static entry instead of redirecting.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: replace the built-in registries
//! export REGISTRY_FILE="registry.json"
//!
//! cargo run
//! curl -i http://localhost:3000/github
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ResolverService;
    pub use crate::domain::entities::{Registries, Resolution, StaticEntry, StaticPageRegistry};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
