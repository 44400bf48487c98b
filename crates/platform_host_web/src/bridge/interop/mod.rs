//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge.

use super::HttpTextResponse;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_text(url: &str) -> Result<HttpTextResponse, String> {
    imp::fetch_text(url).await
}

pub fn trigger_anchor_download(url: &str, file_name: &str) -> Result<(), String> {
    imp::trigger_anchor_download(url, file_name)
}

pub fn meta_content(name: &str) -> Option<String> {
    imp::meta_content(name)
}
