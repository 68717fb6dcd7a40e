//! Text input bound to a page element.

use crate::state::AppState;
use dioxus::prelude::*;
use yta_bridge::Page;

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Element id the bridge reads the value from
    pub element_id: String,
    #[props(default = String::new())]
    pub placeholder: String,
}

/// A text input whose value is mirrored into the page state on every keystroke.
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let state = use_context::<AppState>();
    let value = state.text(&props.element_id);
    let element_id = props.element_id.clone();

    let on_input = move |evt: Event<FormData>| {
        state.write(&element_id, &evt.value());
    };

    rsx! {
        input {
            id: "{props.element_id}",
            r#type: "text",
            placeholder: "{props.placeholder}",
            value: "{value}",
            style: "width: 70%; margin-right: 8px;",
            oninput: on_input,
        }
    }
}
