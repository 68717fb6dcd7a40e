//! Diagnostic channel for failed invocations.

use log::error;

use crate::outcome::BridgeError;

/// Receives every failure the bridge produces, once per failed invocation.
pub trait Reporter {
    fn report(&self, trigger_id: &str, error: &BridgeError);
}

/// Writes failures to the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, trigger_id: &str, err: &BridgeError) {
        error!("Error ({}): {}", trigger_id, err);
    }
}
