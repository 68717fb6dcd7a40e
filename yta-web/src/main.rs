//! Transcript Analyzer
//!
//! Fetches a video transcript and runs summary, sentiment, keyword, and
//! question-answering requests against the analyzer backend.
//!
//! Data flow:
//! 1. On mount: build the page state and register the analyzer bindings
//!    with a `FormBridge` that posts through `window.fetch`.
//! 2. Each trigger (form submit or button click) spawns `FormBridge::fire`.
//! 3. The bridge renders successful replies into the signal-backed page,
//!    which re-renders the matching output slot.
//! 4. A rendered transcript reveals the summarize, sentiment and keyword
//!    buttons.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use yta_bridge::bindings::{analyzer_bindings, ids};
use yta_bridge::{BridgeError, FormBridge, Reporter};

mod components;
mod fetch;
mod state;

use components::{OutputSlot, TextInput, Trigger};
use fetch::FetchTransport;
use state::AppState;

/// The bridge shared by every trigger component through context.
pub type AnalyzerBridge = FormBridge<AppState, FetchTransport>;

/// Sends bridge failures to the browser console.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, trigger_id: &str, err: &BridgeError) {
        error!("Error ({}): {}", trigger_id, err);
    }
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("analyzer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    use_context_provider(|| {
        let mut bridge = FormBridge::new(state, FetchTransport).with_reporter(ConsoleReporter);
        for binding in analyzer_bindings() {
            bridge.register(binding);
        }
        info!("Registered {} analyzer bindings", bridge.bindings().len());
        Rc::new(bridge)
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 22px; margin: 0 0 12px 0;",
                "YouTube Transcript Analyzer"
            }

            Trigger {
                trigger_id: ids::TRANSCRIPT_FORM.to_string(),
                TextInput {
                    element_id: ids::URL.to_string(),
                    placeholder: "Enter YouTube video URL".to_string(),
                }
                button { r#type: "submit", "Get Transcript" }
            }
            OutputSlot { element_id: ids::TRANSCRIPT.to_string() }

            div {
                style: "display: flex; gap: 8px; margin: 8px 0;",
                Trigger { trigger_id: ids::SUMMARIZE_BTN.to_string(), "Summarize" }
                Trigger { trigger_id: ids::SENTIMENT_BTN.to_string(), "Analyze Sentiment" }
                Trigger { trigger_id: ids::KEYWORD_BTN.to_string(), "Extract Keywords" }
            }
            OutputSlot { element_id: ids::SUMMARY.to_string() }
            OutputSlot { element_id: ids::SENTIMENT.to_string() }
            OutputSlot { element_id: ids::KEYWORDS.to_string() }

            Trigger {
                trigger_id: ids::ASK_QUESTION_FORM.to_string(),
                TextInput {
                    element_id: ids::QUESTION.to_string(),
                    placeholder: "Ask a question about the video".to_string(),
                }
                button { r#type: "submit", "Ask" }
            }
            OutputSlot { element_id: ids::ANSWER.to_string() }
        }
    }
}
