use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::*;

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "browser document is unavailable".to_string())
}

pub async fn fetch_text(url: &str) -> Result<HttpTextResponse, String> {
    let window = web_sys::window().ok_or_else(|| "browser window is unavailable".to_string())?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error_to_string)?;
    let response: web_sys::Response = value
        .dyn_into()
        .map_err(|_| "fetch resolved to a non-Response value".to_string())?;

    let status = response.status();
    if !response.ok() {
        return Ok(HttpTextResponse {
            status,
            ok: false,
            body: String::new(),
        });
    }

    let text = JsFuture::from(response.text().map_err(js_error_to_string)?)
        .await
        .map_err(js_error_to_string)?;
    Ok(HttpTextResponse {
        status,
        ok: true,
        body: text.as_string().unwrap_or_default(),
    })
}

pub fn trigger_anchor_download(url: &str, file_name: &str) -> Result<(), String> {
    let document = document()?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error_to_string)?
        .dyn_into()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;
    body.append_child(&anchor).map_err(js_error_to_string)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error_to_string)?;
    Ok(())
}

pub fn meta_content(name: &str) -> Option<String> {
    let document = document().ok()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    element
        .get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
