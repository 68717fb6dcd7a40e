//! Form-to-JSON request bridge for the transcript analyzer page.
//!
//! This crate wires named triggers (form submissions and button clicks) to
//! backend endpoints and renders the JSON replies into output slots.
//!
//! # Architecture
//!
//! - [`FormBridge`] owns the registered [`ActionBinding`]s and executes them
//! - [`Page`] is the injected view-model the bridge reads inputs from and
//!   renders into (no global document lookups)
//! - [`Transport`] performs the actual form POST; `yta-cmd` provides a
//!   reqwest implementation and `yta-web` a browser `fetch` one
//! - [`Reporter`] is the diagnostic channel failures are sent to
//!
//! # Usage
//!
//! ```rust,no_run
//! use yta_bridge::{bindings, FormBridge, MemoryPage, Transport};
//!
//! async fn analyze<T: Transport>(transport: T) {
//!     let page = MemoryPage::new()
//!         .with_element(bindings::ids::TRANSCRIPT_FORM, "")
//!         .with_element(bindings::ids::URL, "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!         .with_element(bindings::ids::TRANSCRIPT, "");
//!
//!     let mut bridge = FormBridge::new(page.clone(), transport);
//!     for binding in bindings::analyzer_bindings() {
//!         bridge.register(binding);
//!     }
//!
//!     let outcome = bridge.fire(bindings::ids::TRANSCRIPT_FORM).await;
//!     if outcome.is_success() {
//!         println!("{}", page.text(bindings::ids::TRANSCRIPT).unwrap_or_default());
//!     }
//! }
//! ```

pub mod binding;
pub mod bindings;
mod bridge;
pub mod form;
pub mod outcome;
pub mod page;
pub mod render;
pub mod report;
pub mod transport;

pub use binding::{ActionBinding, BridgeEvent, InputField, OutputField, TriggerKind};
pub use bridge::{BindingState, FormBridge, OverlapPolicy};
pub use outcome::{BridgeError, HttpReply, Payload, RequestOutcome};
pub use page::{MemoryPage, Page, PageElement};
pub use report::{LogReporter, Reporter};
pub use transport::{Transport, FORM_CONTENT_TYPE};
