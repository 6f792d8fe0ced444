//! Repository trait for redirect registry access.

use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the redirect registry.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryRedirectRepository`] - process-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Finds the destination registered for `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the key is registered
    /// - `Ok(None)` if it is not
    async fn find_target(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Lists every `(key, destination)` pair, sorted by key.
    async fn list(&self) -> Result<Vec<(String, String)>, AppError>;
}
