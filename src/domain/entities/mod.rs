//! Core domain entities for key resolution.
//!
//! # Entity Types
//!
//! - [`StaticEntry`] - What a recognized static key does: nothing, or delegate to a handler
//! - [`StaticPageRegistry`] - Static key → [`StaticEntry`] mapping
//! - [`Registries`] - Both registries bundled as one immutable configuration object
//! - [`Resolution`] - The per-request outcome of resolving a key
//!
//! Registries are built once at startup and never mutated afterwards.

pub mod registries;
pub mod resolution;
pub mod static_entry;
pub mod static_pages;

pub use registries::Registries;
pub use resolution::Resolution;
pub use static_entry::{StaticEntry, StaticHandler, StaticHandlerFuture};
pub use static_pages::StaticPageRegistry;
