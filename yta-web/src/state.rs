//! Page view-model backed by Dioxus signals.
//!
//! `AppState` is provided via `use_context_provider` and doubles as the
//! [`Page`] the bridge renders into, so every slot write re-renders the
//! components reading that element.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use yta_bridge::bindings::ids;
use yta_bridge::{Page, PageElement};

/// Shared state of the analyzer page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Every element of the page, keyed by element id
    elements: Signal<BTreeMap<String, PageElement>>,
}

impl AppState {
    /// Create the page with every analyzer element present and empty.
    pub fn new() -> Self {
        let elements = ids::ALL
            .iter()
            .map(|id| (id.to_string(), PageElement::new("")))
            .collect();
        Self {
            elements: Signal::new(elements),
        }
    }

    pub fn text(&self, element_id: &str) -> String {
        self.read(element_id).unwrap_or_default()
    }

    pub fn is_visible(&self, element_id: &str) -> bool {
        self.elements
            .read()
            .get(element_id)
            .is_some_and(|element| element.visible)
    }
}

impl Page for AppState {
    fn contains(&self, element_id: &str) -> bool {
        self.elements.read().contains_key(element_id)
    }

    fn read(&self, element_id: &str) -> Option<String> {
        self.elements
            .read()
            .get(element_id)
            .map(|element| element.text.clone())
    }

    fn write(&self, element_id: &str, text: &str) -> bool {
        let mut elements = self.elements;
        let written = match elements.write().get_mut(element_id) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        };
        written
    }

    fn set_visible(&self, element_id: &str, visible: bool) {
        let mut elements = self.elements;
        if let Some(element) = elements.write().get_mut(element_id) {
            element.visible = visible;
        };
    }
}
