//! The analyzer page's binding table.
//!
//! | Trigger | Kind | Endpoint | Params | Output |
//! |---|---|---|---|---|
//! | `transcriptForm` | submit | `/transcript` | url | `transcript` |
//! | `summarizeBtn` | click | `/summarize` | transcript | `summary` |
//! | `sentimentBtn` | click | `/sentiment` | transcript | `sentiment` |
//! | `keywordBtn` | click | `/keywords` | transcript | `keywords` |
//! | `askQuestionForm` | submit | `/answer` | transcript, question | `answer` |

use crate::binding::{ActionBinding, BridgeEvent, OutputField};
use crate::render;

/// Element ids of the analyzer page.
pub mod ids {
    pub const TRANSCRIPT_FORM: &str = "transcriptForm";
    pub const URL: &str = "url";
    pub const TRANSCRIPT: &str = "transcript";

    pub const SUMMARIZE_BTN: &str = "summarizeBtn";
    pub const SUMMARY: &str = "summary";

    pub const SENTIMENT_BTN: &str = "sentimentBtn";
    pub const SENTIMENT: &str = "sentiment";

    pub const KEYWORD_BTN: &str = "keywordBtn";
    pub const KEYWORDS: &str = "keywords";

    pub const ASK_QUESTION_FORM: &str = "askQuestionForm";
    pub const QUESTION: &str = "question";
    pub const ANSWER: &str = "answer";

    /// Every element the analyzer page declares.
    pub const ALL: [&str; 12] = [
        TRANSCRIPT_FORM,
        URL,
        TRANSCRIPT,
        SUMMARIZE_BTN,
        SUMMARY,
        SENTIMENT_BTN,
        SENTIMENT,
        KEYWORD_BTN,
        KEYWORDS,
        ASK_QUESTION_FORM,
        QUESTION,
        ANSWER,
    ];
}

/// The analysis triggers revealed once a transcript is on the page.
pub const ANALYSIS_TRIGGERS: [&str; 3] = [ids::SUMMARIZE_BTN, ids::SENTIMENT_BTN, ids::KEYWORD_BTN];

/// Build the five analyzer bindings.
pub fn analyzer_bindings() -> Vec<ActionBinding> {
    vec![
        ActionBinding::submit(
            ids::TRANSCRIPT_FORM,
            "/transcript",
            OutputField::new(ids::TRANSCRIPT, |p| Ok(render::plain(p, "transcript"))),
        )
        .input(ids::URL, "url")
        .emits(BridgeEvent::TranscriptReady),
        ActionBinding::click(
            ids::SUMMARIZE_BTN,
            "/summarize",
            OutputField::new(ids::SUMMARY, |p| Ok(render::labelled(p, "Summary", "summary"))),
        )
        .input(ids::TRANSCRIPT, "transcript")
        .revealed_by(BridgeEvent::TranscriptReady),
        ActionBinding::click(
            ids::SENTIMENT_BTN,
            "/sentiment",
            OutputField::new(ids::SENTIMENT, render::sentiment),
        )
        .input(ids::TRANSCRIPT, "transcript")
        .revealed_by(BridgeEvent::TranscriptReady),
        ActionBinding::click(
            ids::KEYWORD_BTN,
            "/keywords",
            OutputField::new(ids::KEYWORDS, |p| {
                Ok(render::labelled(p, "Keywords", "keywords"))
            }),
        )
        .input(ids::TRANSCRIPT, "transcript")
        .revealed_by(BridgeEvent::TranscriptReady),
        ActionBinding::submit(
            ids::ASK_QUESTION_FORM,
            "/answer",
            OutputField::new(ids::ANSWER, |p| Ok(render::labelled(p, "Answer", "answer"))),
        )
        .input(ids::TRANSCRIPT, "transcript")
        .input(ids::QUESTION, "question"),
    ]
}
