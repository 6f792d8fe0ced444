//! JSON registry file, read once at startup.
//!
//! # Format
//!
//! ```json
//! {
//!   "redirects": { "github": "https://github.com/jawscout" },
//!   "static_pages": ["icon.ico", "robots.txt"]
//! }
//! ```
//!
//! Both fields are optional. Static pages declared here use default handling
//! ([`StaticEntry::NoOp`]); delegated handlers can only be registered in code.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::entities::{Registries, StaticEntry, StaticPageRegistry};
use crate::utils::registry_validation::{RegistryValidationError, validate_key, validate_target};

/// Errors raised while loading a registry file.
#[derive(Debug, Error)]
pub enum RegistryFileError {
    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid key {key:?}: {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: RegistryValidationError,
    },

    #[error("invalid target for key {key:?} ({target:?}): {source}")]
    InvalidTarget {
        key: String,
        target: String,
        #[source]
        source: RegistryValidationError,
    },
}

/// On-disk registry layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryFile {
    #[serde(default)]
    pub redirects: BTreeMap<String, String>,

    #[serde(default)]
    pub static_pages: Vec<String>,
}

impl RegistryFile {
    /// Parses a registry from a JSON string without validating it.
    pub fn from_json_str(input: &str) -> Result<Self, RegistryFileError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Reads and parses a registry file without validating it.
    pub fn load(path: &Path) -> Result<Self, RegistryFileError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RegistryFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Validates every key and target and builds the immutable registries.
    ///
    /// # Errors
    ///
    /// - [`RegistryFileError::InvalidKey`] for an empty or multi-segment key
    /// - [`RegistryFileError::InvalidTarget`] for a target that is neither an
    ///   `http(s)` URL, a root-relative path, nor a declared static key
    pub fn into_registries(self) -> Result<Registries, RegistryFileError> {
        for key in &self.static_pages {
            validate_key(key).map_err(|source| RegistryFileError::InvalidKey {
                key: key.clone(),
                source,
            })?;
        }

        let static_pages: StaticPageRegistry = self
            .static_pages
            .into_iter()
            .map(|key| (key, StaticEntry::NoOp))
            .collect();

        for (key, target) in &self.redirects {
            validate_key(key).map_err(|source| RegistryFileError::InvalidKey {
                key: key.clone(),
                source,
            })?;
            validate_target(target, &static_pages).map_err(|source| {
                RegistryFileError::InvalidTarget {
                    key: key.clone(),
                    target: target.clone(),
                    source,
                }
            })?;
        }

        Ok(Registries::new(self.redirects, static_pages))
    }
}

/// Loads registries from `path`, or returns the built-in ones when `None`.
pub fn load_registries(path: Option<&Path>) -> Result<Registries, RegistryFileError> {
    match path {
        Some(path) => {
            let registries = RegistryFile::load(path)?.into_registries()?;
            tracing::info!(
                path = %path.display(),
                redirects = registries.redirects.len(),
                static_pages = registries.static_pages.len(),
                "Loaded registry file"
            );
            Ok(registries)
        }
        None => {
            tracing::debug!("No registry file configured, using built-in registries");
            Ok(Registries::builtin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let file = RegistryFile::from_json_str(
            r#"{
                "redirects": { "github": "https://github.com/jawscout", "bot": "robots.txt" },
                "static_pages": ["robots.txt"]
            }"#,
        )
        .unwrap();

        let registries = file.into_registries().unwrap();
        assert_eq!(registries.redirects.len(), 2);
        assert_eq!(registries.redirects["bot"], "robots.txt");
        assert!(registries.static_pages.contains("robots.txt"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let registries = RegistryFile::from_json_str("{}")
            .unwrap()
            .into_registries()
            .unwrap();

        assert!(registries.redirects.is_empty());
        assert!(registries.static_pages.is_empty());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = RegistryFile::from_json_str(r#"{ "redirect": {} }"#);
        assert!(matches!(result, Err(RegistryFileError::Parse(_))));
    }

    #[test]
    fn test_invalid_target_rejected() {
        let result = RegistryFile::from_json_str(r#"{ "redirects": { "x": "ftp://example.com" } }"#)
            .unwrap()
            .into_registries();

        match result {
            Err(RegistryFileError::InvalidTarget { key, source, .. }) => {
                assert_eq!(key, "x");
                assert_eq!(source, RegistryValidationError::UnsupportedProtocol);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_static_key_target_needs_declared_page() {
        let result = RegistryFile::from_json_str(r#"{ "redirects": { "bot": "robots.txt" } }"#)
            .unwrap()
            .into_registries();

        assert!(matches!(result, Err(RegistryFileError::InvalidTarget { .. })));
    }

    #[test]
    fn test_invalid_static_key_rejected() {
        let result = RegistryFile::from_json_str(r#"{ "static_pages": ["a/b"] }"#)
            .unwrap()
            .into_registries();

        assert!(matches!(
            result,
            Err(RegistryFileError::InvalidKey {
                source: RegistryValidationError::MultiSegmentKey,
                ..
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RegistryFile::load(Path::new("/nonexistent/registry.json"));
        assert!(matches!(result, Err(RegistryFileError::Io { .. })));
    }

    #[test]
    fn test_load_registries_defaults_to_builtin() {
        let registries = load_registries(None).unwrap();
        assert_eq!(registries.redirects["home"], "https://www.jawscout.cc");
    }
}
