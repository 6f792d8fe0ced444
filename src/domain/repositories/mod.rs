//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`RedirectRepository`] - Key → destination URL lookups
//!
//! The in-memory implementation lives in `crate::infrastructure::memory`.
//! Mock implementations are generated via `mockall` for unit tests.

pub mod redirect_repository;

pub use redirect_repository::RedirectRepository;

#[cfg(test)]
pub use redirect_repository::MockRedirectRepository;
