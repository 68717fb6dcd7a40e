//! The network seam of the bridge.

use crate::outcome::{BridgeError, HttpReply};

/// Content type of every request body the bridge sends.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Sends one form-encoded POST and waits for the reply.
///
/// Implementations return `Err(BridgeError::Transport(..))` only when no
/// response arrived; any HTTP status, including errors, is an `Ok` reply.
/// The returned future is not required to be `Send`, so browser `fetch`
/// can implement it.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_form(&self, path: &str, body: String) -> Result<HttpReply, BridgeError>;
}
