//! reqwest-backed transport for native hosts.

use std::time::Duration;

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use yta_bridge::{BridgeError, HttpReply, Transport, FORM_CONTENT_TYPE};

/// Posts form bodies to `base_url` + endpoint path.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport; `timeout` of `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn post_form(&self, path: &str, body: String) -> Result<HttpReply, BridgeError> {
        let url = self.url(path);
        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| BridgeError::Transport(format!("{url}: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BridgeError::Transport(format!("{url}: failed to read body: {e}")))?;
        debug!("{} answered {}", url, status);

        Ok(HttpReply::new(status, body))
    }
}
