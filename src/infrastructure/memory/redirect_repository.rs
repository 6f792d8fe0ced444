//! In-memory implementation of the redirect repository.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// Redirect registry held in process memory.
///
/// The map is moved in at construction and never mutated, so concurrent
/// lookups need no locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRedirectRepository {
    redirects: BTreeMap<String, String>,
}

impl InMemoryRedirectRepository {
    pub fn new(redirects: BTreeMap<String, String>) -> Self {
        Self { redirects }
    }

    pub fn len(&self) -> usize {
        self.redirects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.redirects.is_empty()
    }
}

#[async_trait]
impl RedirectRepository for InMemoryRedirectRepository {
    async fn find_target(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.redirects.get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<(String, String)>, AppError> {
        Ok(self
            .redirects
            .iter()
            .map(|(key, url)| (key.clone(), url.clone()))
            .collect())
    }
}
