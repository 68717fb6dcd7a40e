//! The whole analyzer flow: transcript, then every analysis it unlocks.

use anyhow::Context;
use futures::future::join_all;
use log::{info, warn};
use yta_bridge::bindings::{ids, ANALYSIS_TRIGGERS};
use yta_bridge::{BridgeError, Page, Transport};

use crate::analyze::{analyzer_bridge, analyzer_page};

/// Rendered output of one session step.
#[derive(Debug)]
pub struct SessionStep {
    pub trigger_id: String,
    pub result: Result<String, BridgeError>,
}

/// Everything a session produced.
#[derive(Debug)]
pub struct SessionReport {
    pub transcript: String,
    pub steps: Vec<SessionStep>,
}

impl SessionReport {
    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|s| s.result.is_err()).count()
    }

    /// Rendered text of every step that succeeded, in run order.
    pub fn rendered(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .filter_map(|s| s.result.as_ref().ok().map(String::as_str))
    }
}

/// Fetch the transcript for `url`, then run the analyses it reveals
/// concurrently, then answer `question` if one was given.
///
/// Only a failed transcript aborts the session; analysis failures are
/// reported and recorded in the returned steps.
pub async fn run_session<T: Transport>(
    transport: T,
    url: &str,
    question: Option<&str>,
) -> anyhow::Result<SessionReport> {
    let page = analyzer_page(&[(ids::URL, url)]);
    let bridge = analyzer_bridge(page.clone(), transport);

    bridge
        .fire(ids::TRANSCRIPT_FORM)
        .await
        .into_result()
        .context("/transcript request failed")?;
    let transcript = page.text(ids::TRANSCRIPT).unwrap_or_default();
    info!("Transcript ready ({} chars)", transcript.len());

    let mut triggers: Vec<&str> = ANALYSIS_TRIGGERS
        .into_iter()
        .filter(|trigger| page.is_visible(trigger))
        .collect();
    let outcomes = join_all(triggers.iter().map(|trigger| bridge.fire(trigger))).await;

    if let Some(question) = question {
        page.write(ids::QUESTION, question);
        triggers.push(ids::ASK_QUESTION_FORM);
    }
    let answer = match question {
        Some(_) => Some(bridge.fire(ids::ASK_QUESTION_FORM).await),
        None => None,
    };

    let steps: Vec<SessionStep> = triggers
        .into_iter()
        .zip(outcomes.into_iter().chain(answer))
        .map(|(trigger_id, outcome)| {
            let result = outcome.into_result().map(|_| {
                bridge
                    .binding(trigger_id)
                    .and_then(|b| page.text(&b.output.element_id))
                    .unwrap_or_default()
            });
            SessionStep {
                trigger_id: trigger_id.to_string(),
                result,
            }
        })
        .collect();

    let report = SessionReport { transcript, steps };
    if report.failures() > 0 {
        warn!(
            "{} of {} analyses failed",
            report.failures(),
            report.steps.len()
        );
    }
    Ok(report)
}
