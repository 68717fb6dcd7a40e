//! Trigger component: a form or button that fires one binding.

use std::rc::Rc;

use crate::state::AppState;
use crate::AnalyzerBridge;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use yta_bridge::TriggerKind;

#[derive(Props, Clone, PartialEq)]
pub struct TriggerProps {
    /// Trigger id of the binding to fire
    pub trigger_id: String,
    /// Form contents, or the button label
    pub children: Element,
}

/// Run the binding in the background; the bridge renders or reports the result.
fn launch(bridge: &Rc<AnalyzerBridge>, trigger_id: &str) {
    let bridge = Rc::clone(bridge);
    let trigger_id = trigger_id.to_string();
    spawn(async move {
        let outcome = bridge.fire(&trigger_id).await;
        debug!("{} finished (success: {})", trigger_id, outcome.is_success());
    });
}

/// Renders the trigger for a registered binding.
///
/// Submit bindings become a `form` that suppresses navigation; click bindings
/// become a `button`. Triggers without a registered binding render nothing.
#[component]
pub fn Trigger(props: TriggerProps) -> Element {
    let state = use_context::<AppState>();
    let bridge = use_context::<Rc<AnalyzerBridge>>();

    let Some(kind) = bridge.binding(&props.trigger_id).map(|b| b.kind) else {
        return rsx! {};
    };
    let display = if state.is_visible(&props.trigger_id) {
        "block"
    } else {
        "none"
    };
    let trigger_id = props.trigger_id.clone();

    match kind {
        TriggerKind::Submit => rsx! {
            form {
                id: "{props.trigger_id}",
                style: "display: {display}; margin: 8px 0;",
                onsubmit: move |evt: Event<FormData>| {
                    evt.prevent_default();
                    launch(&bridge, &trigger_id);
                },
                {props.children}
            }
        },
        TriggerKind::Click => rsx! {
            button {
                id: "{props.trigger_id}",
                style: "display: {display};",
                onclick: move |_| launch(&bridge, &trigger_id),
                {props.children}
            }
        },
    }
}
