//! Request outcomes, the error taxonomy, and payload parsing.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::render::display_value;

/// A parsed JSON response body.
pub type Payload = Map<String, Value>;

/// Everything that can turn an invocation into a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// The request never produced a response (network unreachable, aborted, ...)
    #[error("transport failed: {0}")]
    Transport(String),

    /// The backend answered outside the 2xx range
    #[error("unexpected HTTP status {status}{}", suffix(.detail))]
    HttpStatus { status: u16, detail: Option<String> },

    /// The body was not a JSON object
    #[error("malformed payload: {0}")]
    Payload(String),

    /// The payload carried an explicit `error` field; reported verbatim
    #[error("{0}")]
    Backend(String),

    /// The payload lacked a field the output template needs
    #[error("payload is missing field `{0}`")]
    MissingField(String),

    /// No binding is registered for this trigger
    #[error("no binding registered for trigger `{0}`")]
    UnknownTrigger(String),

    /// Rejected because an earlier invocation is still pending
    #[error("trigger `{0}` already has a request in flight")]
    Busy(String),

    /// A newer invocation of the same trigger took over the output slot
    #[error("response for `{0}` was superseded by a newer request")]
    Superseded(String),
}

fn suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn the reply into a payload, applying the status and `error` field checks.
    pub fn into_payload(self) -> Result<Payload, BridgeError> {
        if !self.is_success() {
            return Err(BridgeError::HttpStatus {
                status: self.status,
                detail: error_detail(&self.body),
            });
        }

        let value: Value = serde_json::from_str(&self.body)
            .map_err(|e| BridgeError::Payload(e.to_string()))?;
        let Value::Object(payload) = value else {
            return Err(BridgeError::Payload("expected a JSON object".to_string()));
        };

        match payload.get("error") {
            Some(error) if is_truthy(error) => Err(BridgeError::Backend(display_value(error))),
            _ => Ok(payload),
        }
    }
}

/// Pull the `error` text out of a failed reply's body, if it has one.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .filter(|error| is_truthy(error))
        .map(display_value)
}

/// JavaScript truthiness, which is what decides whether `error` counts.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Result of a single `fire`.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Success(Payload),
    Failure(BridgeError),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    /// The failure message, if this is a failure.
    pub fn message(&self) -> Option<String> {
        match self {
            RequestOutcome::Success(_) => None,
            RequestOutcome::Failure(e) => Some(e.to_string()),
        }
    }

    pub fn into_result(self) -> Result<Payload, BridgeError> {
        self.into()
    }
}

impl From<Result<Payload, BridgeError>> for RequestOutcome {
    fn from(result: Result<Payload, BridgeError>) -> Self {
        match result {
            Ok(payload) => RequestOutcome::Success(payload),
            Err(e) => RequestOutcome::Failure(e),
        }
    }
}

impl From<RequestOutcome> for Result<Payload, BridgeError> {
    fn from(outcome: RequestOutcome) -> Self {
        match outcome {
            RequestOutcome::Success(payload) => Ok(payload),
            RequestOutcome::Failure(e) => Err(e),
        }
    }
}
