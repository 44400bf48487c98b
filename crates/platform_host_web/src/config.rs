//! Startup configuration resolution for browser builds.

use leptos::logging;
use platform_host::{HostConfig, DEFAULT_API_BASE_URL};

use crate::bridge;

/// `<meta name=...>` consulted first for the listing base address.
pub const API_BASE_META_NAME: &str = "file-manager-api-base";

/// Resolves the host configuration for this page load.
///
/// Sources, first match wins: the [`API_BASE_META_NAME`] meta tag, the `FILE_MANAGER_API_BASE`
/// build-time environment variable, then [`DEFAULT_API_BASE_URL`]. An invalid value is logged and
/// skipped.
pub fn load_host_config() -> HostConfig {
    resolve_host_config(
        bridge::meta_content(API_BASE_META_NAME).as_deref(),
        option_env!("FILE_MANAGER_API_BASE"),
    )
}

fn resolve_host_config(meta: Option<&str>, build_env: Option<&str>) -> HostConfig {
    for (source, candidate) in [("meta tag", meta), ("build env", build_env)] {
        let Some(candidate) = candidate else {
            continue;
        };
        match HostConfig::new(candidate) {
            Ok(config) => return config,
            Err(err) => logging::warn!("ignoring api base url from {source}: {err}"),
        }
    }
    HostConfig::default()
}
