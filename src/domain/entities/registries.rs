//! The immutable configuration object holding both registries.

use super::static_entry::StaticEntry;
use super::static_pages::StaticPageRegistry;
use std::collections::BTreeMap;

/// Redirects shipped with the binary, used when no registry file is configured.
pub const BUILTIN_REDIRECTS: &[(&str, &str)] = &[
    ("github", "https://github.com/jawscout"),
    ("home", "https://www.jawscout.cc"),
];

/// Static keys shipped with the binary. All of them use default handling.
pub const BUILTIN_STATIC_PAGES: &[&str] = &["icon.ico", "robots.txt"];

/// Redirect and static-page registries, constructed once and passed to the
/// resolver at startup.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    /// Key → destination URL.
    pub redirects: BTreeMap<String, String>,
    pub static_pages: StaticPageRegistry,
}

impl Registries {
    pub fn new(redirects: BTreeMap<String, String>, static_pages: StaticPageRegistry) -> Self {
        Self {
            redirects,
            static_pages,
        }
    }

    /// The built-in registries.
    pub fn builtin() -> Self {
        let redirects = BUILTIN_REDIRECTS
            .iter()
            .map(|(key, url)| (key.to_string(), url.to_string()))
            .collect();

        let static_pages = BUILTIN_STATIC_PAGES
            .iter()
            .map(|key| (key.to_string(), StaticEntry::NoOp))
            .collect();

        Self::new(redirects, static_pages)
    }

    /// Adds a redirect. Only meant for building registries before startup.
    pub fn with_redirect(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.redirects.insert(key.into(), url.into());
        self
    }

    /// Adds a static page. Only meant for building registries before startup.
    pub fn with_static_page(mut self, key: impl Into<String>, entry: StaticEntry) -> Self {
        self.static_pages = self.static_pages.with_page(key, entry);
        self
    }
}
