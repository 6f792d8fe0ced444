//! Application layer services implementing resolution logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Two-stage key resolution

pub mod services;
