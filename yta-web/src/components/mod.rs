//! RSX components for the analyzer page.

mod output_slot;
mod text_input;
mod trigger;

pub use output_slot::OutputSlot;
pub use text_input::TextInput;
pub use trigger::Trigger;
