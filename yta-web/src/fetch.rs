//! Browser `fetch` transport.
//!
//! Endpoint paths are passed to `fetch` as-is, so they resolve against the
//! origin that served the page.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};
use yta_bridge::{BridgeError, HttpReply, Transport, FORM_CONTENT_TYPE};

/// Posts form bodies with `window.fetch`.
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

/// Turn a rejected JS promise (or failed binding call) into a transport error.
fn js_error(stage: &str, value: JsValue) -> BridgeError {
    let detail = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    BridgeError::Transport(format!("{stage}: {detail}"))
}

impl Transport for FetchTransport {
    async fn post_form(&self, path: &str, body: String) -> Result<HttpReply, BridgeError> {
        let window = web_sys::window()
            .ok_or_else(|| BridgeError::Transport("no window to fetch from".to_string()))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));
        let request =
            Request::new_with_str_and_init(path, &init).map_err(|e| js_error("request", e))?;
        request
            .headers()
            .set("Content-Type", FORM_CONTENT_TYPE)
            .map_err(|e| js_error("request", e))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("fetch", e))?
            .dyn_into()
            .map_err(|e| js_error("fetch", e))?;

        let text = response.text().map_err(|e| js_error("body", e))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| js_error("body", e))?;

        Ok(HttpReply::new(
            response.status(),
            text.as_string().unwrap_or_default(),
        ))
    }
}
