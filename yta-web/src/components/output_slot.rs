//! Output slot component.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct OutputSlotProps {
    /// Element id the bridge renders into
    pub element_id: String,
}

/// Shows the text the bridge rendered for `element_id`.
#[component]
pub fn OutputSlot(props: OutputSlotProps) -> Element {
    let state = use_context::<AppState>();
    let text = state.text(&props.element_id);

    rsx! {
        div {
            id: "{props.element_id}",
            style: "margin: 8px 0; white-space: pre-wrap;",
            "{text}"
        }
    }
}
