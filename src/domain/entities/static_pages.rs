//! Static page registry.

use super::static_entry::StaticEntry;
use std::collections::HashMap;

/// Immutable mapping of recognized static keys to their [`StaticEntry`].
///
/// Built once (via [`StaticPageRegistry::with_page`] or [`FromIterator`]) and
/// shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StaticPageRegistry {
    pages: HashMap<String, StaticEntry>,
}

impl StaticPageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page, replacing any previous entry for the same key.
    pub fn with_page(mut self, key: impl Into<String>, entry: StaticEntry) -> Self {
        self.pages.insert(key.into(), entry);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StaticEntry> {
        self.pages.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl FromIterator<(String, StaticEntry)> for StaticPageRegistry {
    fn from_iter<I: IntoIterator<Item = (String, StaticEntry)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_page_and_lookup() {
        let registry = StaticPageRegistry::new()
            .with_page("robots.txt", StaticEntry::NoOp)
            .with_page("icon.ico", StaticEntry::NoOp);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("robots.txt"));
        assert!(!registry.contains("github"));
        assert!(matches!(registry.get("icon.ico"), Some(StaticEntry::NoOp)));
        assert_eq!(registry.keys(), vec!["icon.ico", "robots.txt"]);
    }

    #[test]
    fn test_with_page_replaces_entry() {
        let registry = StaticPageRegistry::new()
            .with_page("robots.txt", StaticEntry::NoOp)
            .with_page("robots.txt", StaticEntry::delegate(|_req| async { "ok" }));

        assert_eq!(registry.len(), 1);
        assert!(registry.get("robots.txt").unwrap().is_delegate());
    }

    #[test]
    fn test_from_iterator() {
        let registry: StaticPageRegistry = ["a", "b"]
            .into_iter()
            .map(|k| (k.to_string(), StaticEntry::NoOp))
            .collect();

        assert_eq!(registry.keys(), vec!["a", "b"]);
        assert!(!registry.is_empty());
    }
}
