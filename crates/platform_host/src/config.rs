//! Startup configuration for the remote listing collaborator.
//!
//! The base address is resolved once by the entry layer and injected into the runtime; nothing
//! below this crate reads a compiled-in address.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base address used when no configuration source supplies one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
/// Fixed path segment under which the remote serves uploaded files.
pub const UPLOADS_SEGMENT: &str = "/uploads/";

const LISTING_SEGMENT: &str = "/files";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejections produced while validating a configured base address.
pub enum ConfigError {
    /// The configured value was empty after trimming.
    #[error("api base url is empty")]
    EmptyBaseUrl,
    /// The configured value does not use an `http` or `https` scheme.
    #[error("api base url `{0}` must start with http:// or https://")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Resolved host configuration shared by the listing adapter and entry mapping.
pub struct HostConfig {
    api_base_url: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl HostConfig {
    /// Validates and normalizes a base address (trimmed, no trailing `/`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value is empty or not an `http(s)` address.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
        }
        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    /// Returns the normalized base address.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Returns the listing endpoint address (`{base}/files`).
    pub fn listing_url(&self) -> String {
        format!("{}{LISTING_SEGMENT}", self.api_base_url)
    }

    /// Returns the retrieval address for an uploaded file.
    ///
    /// The file name is joined verbatim; no percent-encoding is applied.
    pub fn upload_url(&self, file_name: &str) -> String {
        format!("{}{UPLOADS_SEGMENT}{file_name}", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_trims_whitespace_and_trailing_slashes() {
        let config = HostConfig::new("  https://files.example.test//  ").expect("valid config");
        assert_eq!(config.api_base_url(), "https://files.example.test");
        assert_eq!(config.listing_url(), "https://files.example.test/files");
    }

    #[test]
    fn upload_url_joins_name_without_escaping() {
        let config = HostConfig::new("http://localhost:8080").expect("valid config");
        assert_eq!(
            config.upload_url("Q3 report #2.pdf"),
            "http://localhost:8080/uploads/Q3 report #2.pdf"
        );
    }

    #[test]
    fn new_rejects_empty_and_non_http_values() {
        assert_eq!(HostConfig::new("   "), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(
            HostConfig::new("ftp://files.example.test"),
            Err(ConfigError::UnsupportedScheme(
                "ftp://files.example.test".to_string()
            ))
        );
    }

    #[test]
    fn default_uses_local_development_address() {
        assert_eq!(HostConfig::default().api_base_url(), DEFAULT_API_BASE_URL);
    }
}
