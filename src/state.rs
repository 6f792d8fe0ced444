//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ResolverService;
use crate::domain::entities::Registries;
use crate::infrastructure::memory::InMemoryRedirectRepository;

/// State shared by every request. Cloning is cheap (`Arc` inside).
#[derive(Clone)]
pub struct AppState {
    pub resolver_service: Arc<ResolverService<InMemoryRedirectRepository>>,
}

impl AppState {
    pub fn new(resolver_service: Arc<ResolverService<InMemoryRedirectRepository>>) -> Self {
        Self { resolver_service }
    }

    /// Builds state over the given registries.
    pub fn from_registries(registries: Registries) -> Self {
        Self::new(Arc::new(ResolverService::from_registries(registries)))
    }
}
