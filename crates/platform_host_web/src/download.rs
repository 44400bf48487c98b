//! Download host-service adapter backed by a transient anchor element.

use platform_host::{DownloadFuture, DownloadService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser download adapter using the anchor `download` attribute.
pub struct WebDownloadService;

impl DownloadService for WebDownloadService {
    fn trigger_download<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::trigger_anchor_download(url, file_name) })
    }
}
