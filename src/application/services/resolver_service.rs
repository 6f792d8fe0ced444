//! Key resolution service.

use std::sync::Arc;

use crate::domain::entities::{Registries, Resolution, StaticPageRegistry};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::infrastructure::memory::InMemoryRedirectRepository;

/// Resolves request keys in two sequential stages.
///
/// 1. [`Self::resolve`] looks the key up in the redirect registry.
/// 2. [`Self::classify`] matches the *resolved value* (not the original key)
///    against the static-page registry.
///
/// A key that only exists in the static-page registry is therefore unknown:
/// `/robots.txt` fails unless some redirect resolves to `"robots.txt"`.
pub struct ResolverService<R: RedirectRepository> {
    redirect_repository: Arc<R>,
    static_pages: Arc<StaticPageRegistry>,
}

impl<R: RedirectRepository> ResolverService<R> {
    /// Creates a new resolver service.
    pub fn new(redirect_repository: Arc<R>, static_pages: Arc<StaticPageRegistry>) -> Self {
        Self {
            redirect_repository,
            static_pages,
        }
    }

    /// Looks `key` up in the redirect registry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyNotFound`] if the key is not registered.
    pub async fn resolve(&self, key: &str) -> Result<String, AppError> {
        self.redirect_repository
            .find_target(key)
            .await?
            .ok_or_else(|| AppError::key_not_found(key))
    }

    /// Matches a resolved value against the static-page registry.
    pub fn classify(&self, target: String) -> Resolution {
        match self.static_pages.get(&target) {
            Some(entry) => Resolution::Static {
                entry: entry.clone(),
                key: target,
            },
            None => Resolution::Redirect(target),
        }
    }

    /// Runs both stages: [`Self::resolve`] then [`Self::classify`].
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn resolve_request(&self, key: &str) -> Result<Resolution, AppError> {
        let target = self.resolve(key).await?;
        Ok(self.classify(target))
    }

    /// All registered redirects, sorted by key.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn redirects(&self) -> Result<Vec<(String, String)>, AppError> {
        self.redirect_repository.list().await
    }

    pub fn static_pages(&self) -> &StaticPageRegistry {
        &self.static_pages
    }
}

impl ResolverService<InMemoryRedirectRepository> {
    /// Builds a resolver over in-memory copies of `registries`.
    pub fn from_registries(registries: Registries) -> Self {
        Self::new(
            Arc::new(InMemoryRedirectRepository::new(registries.redirects)),
            Arc::new(registries.static_pages),
        )
    }
}
