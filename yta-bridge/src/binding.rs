//! Trigger → endpoint → render mappings.

use std::fmt;

use crate::outcome::{BridgeError, Payload};

/// How a trigger starts an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Form submission; the host must prevent the default navigation.
    Submit,
    /// Button click.
    Click,
}

/// Events one binding publishes and others react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeEvent {
    /// A transcript has been rendered and the analysis actions can run.
    TranscriptReady,
}

/// An element whose value is sent as a form parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub element_id: String,
    pub param_name: String,
}

type RenderFn = Box<dyn Fn(&Payload) -> Result<String, BridgeError>>;

/// The element a successful payload is rendered into.
pub struct OutputField {
    pub element_id: String,
    render: RenderFn,
}

impl OutputField {
    pub fn new(
        element_id: &str,
        render: impl Fn(&Payload) -> Result<String, BridgeError> + 'static,
    ) -> Self {
        Self {
            element_id: element_id.to_string(),
            render: Box::new(render),
        }
    }

    pub fn render(&self, payload: &Payload) -> Result<String, BridgeError> {
        (self.render)(payload)
    }
}

impl fmt::Debug for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputField")
            .field("element_id", &self.element_id)
            .finish_non_exhaustive()
    }
}

/// A configured trigger → endpoint → render mapping.
///
/// Built once from the configuration table and never changed after
/// registration.
#[derive(Debug)]
pub struct ActionBinding {
    pub trigger_id: String,
    pub kind: TriggerKind,
    pub endpoint: String,
    pub inputs: Vec<InputField>,
    pub output: OutputField,
    /// Published after this binding renders successfully.
    pub emits: Option<BridgeEvent>,
    /// The trigger stays hidden until this event is published.
    pub revealed_by: Option<BridgeEvent>,
}

impl ActionBinding {
    pub fn new(trigger_id: &str, kind: TriggerKind, endpoint: &str, output: OutputField) -> Self {
        Self {
            trigger_id: trigger_id.to_string(),
            kind,
            endpoint: endpoint.to_string(),
            inputs: Vec::new(),
            output,
            emits: None,
            revealed_by: None,
        }
    }

    pub fn submit(trigger_id: &str, endpoint: &str, output: OutputField) -> Self {
        Self::new(trigger_id, TriggerKind::Submit, endpoint, output)
    }

    pub fn click(trigger_id: &str, endpoint: &str, output: OutputField) -> Self {
        Self::new(trigger_id, TriggerKind::Click, endpoint, output)
    }

    /// Send `element_id`'s value as `param_name`.
    pub fn input(mut self, element_id: &str, param_name: &str) -> Self {
        self.inputs.push(InputField {
            element_id: element_id.to_string(),
            param_name: param_name.to_string(),
        });
        self
    }

    pub fn emits(mut self, event: BridgeEvent) -> Self {
        self.emits = Some(event);
        self
    }

    pub fn revealed_by(mut self, event: BridgeEvent) -> Self {
        self.revealed_by = Some(event);
        self
    }
}
