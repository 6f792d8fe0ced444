//! In-memory repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryRedirectRepository`] - Redirect registry held in process memory

pub mod redirect_repository;

pub use redirect_repository::InMemoryRedirectRepository;
