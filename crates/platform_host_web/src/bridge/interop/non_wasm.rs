use super::*;

fn unsupported() -> String {
    "Browser networking and DOM APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_text(_url: &str) -> Result<HttpTextResponse, String> {
    Err(unsupported())
}

pub fn trigger_anchor_download(_url: &str, _file_name: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn meta_content(_name: &str) -> Option<String> {
    None
}
