//! Key and redirect target validation for registries loaded at startup.

use crate::domain::entities::StaticPageRegistry;
use url::Url;

/// Why a key or target was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryValidationError {
    #[error("key must not be empty")]
    EmptyKey,

    #[error("key must be a single path segment")]
    MultiSegmentKey,

    #[error("target must not be empty")]
    EmptyTarget,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("target contains characters not allowed in a Location header")]
    InvalidHeaderValue,
}

/// Validates a registry key.
///
/// # Rules
///
/// - Must not be empty
/// - Must not contain `/` (routes match exactly one path segment)
///
/// # Examples
///
/// ```ignore
/// assert!(validate_key("github").is_ok());
/// assert!(validate_key("robots.txt").is_ok());
/// assert!(validate_key("a/b").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<(), RegistryValidationError> {
    if key.is_empty() {
        return Err(RegistryValidationError::EmptyKey);
    }

    if key.contains('/') {
        return Err(RegistryValidationError::MultiSegmentKey);
    }

    Ok(())
}

/// Validates a redirect destination.
///
/// Accepted forms:
///
/// 1. A key of `static_pages` (dispatched through the static branch)
/// 2. A root-relative path such as `/about`
/// 3. An absolute `http` or `https` URL
///
/// Anything else is rejected, including `javascript:`, `data:` and `file:`
/// URLs and values with control characters.
pub fn validate_target(
    target: &str,
    static_pages: &StaticPageRegistry,
) -> Result<(), RegistryValidationError> {
    if target.is_empty() {
        return Err(RegistryValidationError::EmptyTarget);
    }

    if target.chars().any(|c| c.is_control()) {
        return Err(RegistryValidationError::InvalidHeaderValue);
    }

    if static_pages.contains(target) {
        return Ok(());
    }

    if target.starts_with('/') && !target.starts_with("//") {
        return Ok(());
    }

    let url = Url::parse(target).map_err(|e| RegistryValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(RegistryValidationError::UnsupportedProtocol),
    }
}
