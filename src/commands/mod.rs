//! Server Endpoint Wrappers
//!
//! Frontend bindings to the drawing server, organized by endpoint.

mod winners;
mod redraw;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use winners::*;
pub use redraw::*;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no global window".to_string())
}

/// Best-effort message out of a rejected promise
pub(crate) fn js_error_message(err: JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    "request failed".to_string()
}

async fn send(request: &Request) -> Result<Response, String> {
    let response = JsFuture::from(window()?.fetch_with_request(request))
        .await
        .map_err(js_error_message)?;
    let response: Response = response.dyn_into().map_err(js_error_message)?;
    if !response.ok() {
        return Err(format!("{} {} returned {}", request.method(), request.url(), response.status()));
    }
    Ok(response)
}

/// GET `url` and return the body as text
async fn get_text(url: &str) -> Result<String, String> {
    let request = Request::new_with_str(url).map_err(js_error_message)?;
    let response = send(&request).await?;
    let text = JsFuture::from(response.text().map_err(js_error_message)?)
        .await
        .map_err(js_error_message)?;
    text.as_string().ok_or_else(|| format!("{} returned a non-text body", url))
}

/// POST `body` as JSON to `url` and return the parsed JSON response
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<JsValue, String> {
    let payload = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let headers = Headers::new().map_err(js_error_message)?;
    headers.set("Content-Type", "application/json").map_err(js_error_message)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error_message)?;
    let response = send(&request).await?;
    JsFuture::from(response.json().map_err(js_error_message)?)
        .await
        .map_err(js_error_message)
}
