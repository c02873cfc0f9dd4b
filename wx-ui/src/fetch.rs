//! JSON GET requests through the browser `fetch` API.

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Errors that can occur while fetching and decoding a backend response.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no browser window available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

fn describe_js(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and decode the body as `T`.
///
/// The HTTP status is only logged. The body is decoded whatever the status,
/// since the analysis endpoint reports "no data" as a JSON `error` field
/// that may come with a non-2xx status.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(describe_js(e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| FetchError::Network(describe_js(e)))?;

    if !resp.ok() {
        log::warn!("GET {} returned HTTP {}", url, resp.status());
    }

    let text_promise = resp.text().map_err(|e| FetchError::Body(describe_js(e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Body(describe_js(e)))?
        .as_string()
        .ok_or_else(|| FetchError::Body("body is not a string".to_string()))?;

    log::debug!("GET {} -> {} bytes", url, text.len());
    Ok(serde_json::from_str(&text)?)
}
