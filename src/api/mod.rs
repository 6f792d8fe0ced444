//! HTTP layer: the dispatch handler and its middleware.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod handlers;
pub mod middleware;
