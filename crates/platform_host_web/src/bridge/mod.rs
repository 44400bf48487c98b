//! Browser capability bridge used by the `platform_host_web` service adapters.
//!
//! Domain modules call these functions; target-specific transport lives under `interop`.

mod interop;

/// Status line and body of one completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTextResponse {
    /// HTTP status code.
    pub status: u16,
    /// Whether the status is in the 2xx range.
    pub ok: bool,
    /// Response body; empty when `ok` is `false`.
    pub body: String,
}

pub async fn fetch_text(url: &str) -> Result<HttpTextResponse, String> {
    interop::fetch_text(url).await
}

pub fn trigger_anchor_download(url: &str, file_name: &str) -> Result<(), String> {
    interop::trigger_anchor_download(url, file_name)
}

pub fn meta_content(name: &str) -> Option<String> {
    interop::meta_content(name)
}
