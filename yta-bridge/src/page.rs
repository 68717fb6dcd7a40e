//! The view-model the bridge reads inputs from and renders into.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Element access the bridge needs from its host page.
///
/// Methods take `&self`; implementations use interior mutability since the
/// bridge is shared across pending invocations on a single thread.
pub trait Page {
    /// Whether an element with this id exists.
    fn contains(&self, element_id: &str) -> bool;

    /// Current value (inputs) or text content (everything else).
    fn read(&self, element_id: &str) -> Option<String>;

    /// Replace the displayed text. Returns `false` if the element is absent.
    fn write(&self, element_id: &str, text: &str) -> bool;

    /// Show or hide an element. Absent elements are ignored.
    fn set_visible(&self, element_id: &str, visible: bool);
}

/// One element of a [`MemoryPage`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    pub text: String,
    pub visible: bool,
}

impl PageElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }
}

/// In-memory page keyed by element id.
///
/// Cheaply cloneable (via `Rc`); clones share the same elements, so a host
/// can keep one handle while the bridge owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: Rc<RefCell<BTreeMap<String, PageElement>>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemoryPage::insert`].
    pub fn with_element(self, element_id: &str, text: &str) -> Self {
        self.insert(element_id, text);
        self
    }

    pub fn insert(&self, element_id: &str, text: &str) {
        self.elements
            .borrow_mut()
            .insert(element_id.to_string(), PageElement::new(text));
    }

    pub fn text(&self, element_id: &str) -> Option<String> {
        self.read(element_id)
    }

    pub fn is_visible(&self, element_id: &str) -> bool {
        self.elements
            .borrow()
            .get(element_id)
            .is_some_and(|element| element.visible)
    }

    pub fn snapshot(&self) -> BTreeMap<String, PageElement> {
        self.elements.borrow().clone()
    }
}

impl Page for MemoryPage {
    fn contains(&self, element_id: &str) -> bool {
        self.elements.borrow().contains_key(element_id)
    }

    fn read(&self, element_id: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(element_id)
            .map(|element| element.text.clone())
    }

    fn write(&self, element_id: &str, text: &str) -> bool {
        match self.elements.borrow_mut().get_mut(element_id) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_visible(&self, element_id: &str, visible: bool) {
        if let Some(element) = self.elements.borrow_mut().get_mut(element_id) {
            element.visible = visible;
        }
    }
}
