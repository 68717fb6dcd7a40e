//! Registration and execution of action bindings.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, info, warn};

use crate::binding::{ActionBinding, BridgeEvent};
use crate::form::FormBody;
use crate::outcome::{BridgeError, Payload, RequestOutcome};
use crate::page::Page;
use crate::report::{LogReporter, Reporter};
use crate::transport::Transport;

/// What to do when a trigger fires while an earlier fire is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Every fire runs; whichever response resolves last owns the output slot.
    #[default]
    Allow,
    /// A fire is refused with [`BridgeError::Busy`] while another is pending.
    Reject,
    /// Every fire runs, but only the most recent one may render.
    Supersede,
}

/// Observable state of one binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Idle,
    Pending { in_flight: usize },
}

#[derive(Debug, Default)]
struct Slot {
    in_flight: usize,
    generation: u64,
}

/// Marks one invocation as pending for as long as it is alive.
///
/// Dropping it (normally, or because the fire future was dropped) puts the
/// binding back towards `Idle`.
struct InFlight<'a> {
    slots: &'a RefCell<HashMap<String, Slot>>,
    trigger_id: &'a str,
    generation: u64,
}

impl InFlight<'_> {
    fn is_latest(&self) -> bool {
        self.slots
            .borrow()
            .get(self.trigger_id)
            .is_some_and(|slot| slot.generation == self.generation)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(slot) = self.slots.borrow_mut().get_mut(self.trigger_id) {
            slot.in_flight = slot.in_flight.saturating_sub(1);
        }
    }
}

/// Binds triggers to backend endpoints and renders the replies into a page.
///
/// The bridge is single-threaded: `fire` takes `&self`, so any number of
/// invocations can be pending at once (e.g. several Dioxus `spawn`s sharing an
/// `Rc<FormBridge<..>>`), and no `RefCell` borrow is held across an await.
pub struct FormBridge<P, T> {
    page: P,
    transport: T,
    reporter: Box<dyn Reporter>,
    policy: OverlapPolicy,
    bindings: Vec<ActionBinding>,
    slots: RefCell<HashMap<String, Slot>>,
}

impl<P: Page, T: Transport> FormBridge<P, T> {
    /// Create a bridge reporting to the `log` facade with the `Allow` policy.
    pub fn new(page: P, transport: T) -> Self {
        Self {
            page,
            transport,
            reporter: Box::new(LogReporter),
            policy: OverlapPolicy::default(),
            bindings: Vec::new(),
            slots: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Register a binding if its trigger exists on the page.
    ///
    /// An absent trigger means the page does not offer that action; the
    /// binding is skipped without error. Triggers that wait for an event are
    /// hidden until it is published.
    pub fn register(&mut self, binding: ActionBinding) {
        if binding.trigger_id.is_empty() || !self.page.contains(&binding.trigger_id) {
            debug!(
                "Skipping binding for {}: trigger `{}` not on page",
                binding.endpoint, binding.trigger_id
            );
            return;
        }
        if self.binding(&binding.trigger_id).is_some() {
            warn!("Trigger `{}` is already bound; ignoring", binding.trigger_id);
            return;
        }
        if binding.revealed_by.is_some() {
            self.page.set_visible(&binding.trigger_id, false);
        }
        debug!("Registered `{}` -> {}", binding.trigger_id, binding.endpoint);
        self.slots
            .get_mut()
            .insert(binding.trigger_id.clone(), Slot::default());
        self.bindings.push(binding);
    }

    pub fn binding(&self, trigger_id: &str) -> Option<&ActionBinding> {
        self.bindings.iter().find(|b| b.trigger_id == trigger_id)
    }

    pub fn bindings(&self) -> &[ActionBinding] {
        &self.bindings
    }

    pub fn state(&self, trigger_id: &str) -> BindingState {
        match self.slots.borrow().get(trigger_id) {
            Some(slot) if slot.in_flight > 0 => BindingState::Pending {
                in_flight: slot.in_flight,
            },
            _ => BindingState::Idle,
        }
    }

    /// Run one invocation of the binding registered for `trigger_id`.
    ///
    /// Failures are sent to the reporter and returned; the page is only
    /// modified on success.
    pub async fn fire(&self, trigger_id: &str) -> RequestOutcome {
        let Some(binding) = self.binding(trigger_id) else {
            let err = BridgeError::UnknownTrigger(trigger_id.to_string());
            self.reporter.report(trigger_id, &err);
            return RequestOutcome::Failure(err);
        };

        let ticket = match self.begin(binding) {
            Ok(ticket) => ticket,
            Err(err) => {
                self.reporter.report(trigger_id, &err);
                return RequestOutcome::Failure(err);
            }
        };

        let form = self.collect(binding);
        info!("POST {} ({} params)", binding.endpoint, form.params().len());
        let result = match self.transport.post_form(&binding.endpoint, form.encode()).await {
            Ok(reply) => reply.into_payload(),
            Err(err) => Err(err),
        };

        if self.policy == OverlapPolicy::Supersede && !ticket.is_latest() {
            debug!("Dropping stale response for `{}`", trigger_id);
            return RequestOutcome::Failure(BridgeError::Superseded(trigger_id.to_string()));
        }

        let outcome: RequestOutcome = result.and_then(|payload| self.apply(binding, payload)).into();
        if let RequestOutcome::Failure(err) = &outcome {
            self.reporter.report(trigger_id, err);
        }
        drop(ticket);
        outcome
    }

    fn begin<'a>(&'a self, binding: &'a ActionBinding) -> Result<InFlight<'a>, BridgeError> {
        let mut slots = self.slots.borrow_mut();
        let slot = slots.entry(binding.trigger_id.clone()).or_default();
        if self.policy == OverlapPolicy::Reject && slot.in_flight > 0 {
            return Err(BridgeError::Busy(binding.trigger_id.clone()));
        }
        slot.in_flight += 1;
        slot.generation += 1;
        Ok(InFlight {
            slots: &self.slots,
            trigger_id: &binding.trigger_id,
            generation: slot.generation,
        })
    }

    fn collect(&self, binding: &ActionBinding) -> FormBody {
        let mut form = FormBody::new();
        for input in &binding.inputs {
            let value = self.page.read(&input.element_id).unwrap_or_else(|| {
                warn!(
                    "Input `{}` for `{}` is not on page; sending empty value",
                    input.element_id, binding.trigger_id
                );
                String::new()
            });
            form.set(&input.param_name, value);
        }
        form
    }

    fn apply(&self, binding: &ActionBinding, payload: Payload) -> Result<Payload, BridgeError> {
        let text = binding.output.render(&payload)?;
        if !self.page.write(&binding.output.element_id, &text) {
            debug!(
                "Output slot `{}` not on page; nothing rendered",
                binding.output.element_id
            );
        }
        if let Some(event) = binding.emits {
            self.publish(event);
        }
        Ok(payload)
    }

    fn publish(&self, event: BridgeEvent) {
        debug!("Publishing {:?}", event);
        for binding in self.bindings.iter().filter(|b| b.revealed_by == Some(event)) {
            self.page.set_visible(&binding.trigger_id, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{analyzer_bindings, ids, ANALYSIS_TRIGGERS};
    use crate::outcome::HttpReply;
    use crate::page::MemoryPage;
    use crate::transport::Transport;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::oneshot;

    /// A reply plus an optional gate the test opens to let it resolve.
    struct Scripted {
        reply: Result<HttpReply, BridgeError>,
        gate: Option<oneshot::Receiver<()>>,
    }

    /// Replays scripted replies per path and records every request.
    #[derive(Clone, Default)]
    struct ScriptedTransport {
        replies: Rc<RefCell<HashMap<String, VecDeque<Scripted>>>>,
        requests: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl ScriptedTransport {
        fn reply(&self, path: &str, status: u16, body: &str) {
            self.push(path, Ok(HttpReply::new(status, body)), None);
        }

        fn gated(&self, path: &str, body: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.push(path, Ok(HttpReply::new(200, body)), Some(rx));
            tx
        }

        fn fail(&self, path: &str, message: &str) {
            self.push(path, Err(BridgeError::Transport(message.to_string())), None);
        }

        fn push(
            &self,
            path: &str,
            reply: Result<HttpReply, BridgeError>,
            gate: Option<oneshot::Receiver<()>>,
        ) {
            self.replies
                .borrow_mut()
                .entry(path.to_string())
                .or_default()
                .push_back(Scripted { reply, gate });
        }

        fn requests(&self) -> Vec<(String, String)> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for ScriptedTransport {
        async fn post_form(&self, path: &str, body: String) -> Result<HttpReply, BridgeError> {
            self.requests.borrow_mut().push((path.to_string(), body));
            let scripted = self
                .replies
                .borrow_mut()
                .get_mut(path)
                .and_then(|queue| queue.pop_front())
                .unwrap_or_else(|| panic!("no scripted reply for {path}"));
            if let Some(gate) = scripted.gate {
                let _ = gate.await;
            }
            scripted.reply
        }
    }

    /// Collects reported messages.
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<(String, String)>>>);

    impl Recorder {
        fn messages(&self) -> Vec<String> {
            self.0.borrow().iter().map(|(_, m)| m.clone()).collect()
        }
    }

    impl Reporter for Recorder {
        fn report(&self, trigger_id: &str, err: &BridgeError) {
            self.0
                .borrow_mut()
                .push((trigger_id.to_string(), err.to_string()));
        }
    }

    fn analyzer_page() -> MemoryPage {
        let page = MemoryPage::new();
        for id in ids::ALL {
            page.insert(id, "");
        }
        page
    }

    struct Harness {
        page: MemoryPage,
        transport: ScriptedTransport,
        recorder: Recorder,
        bridge: FormBridge<MemoryPage, ScriptedTransport>,
    }

    fn harness_with(page: MemoryPage, policy: OverlapPolicy) -> Harness {
        let transport = ScriptedTransport::default();
        let recorder = Recorder::default();
        let mut bridge = FormBridge::new(page.clone(), transport.clone())
            .with_reporter(recorder.clone())
            .with_policy(policy);
        for binding in analyzer_bindings() {
            bridge.register(binding);
        }
        Harness {
            page,
            transport,
            recorder,
            bridge,
        }
    }

    fn harness() -> Harness {
        harness_with(analyzer_page(), OverlapPolicy::Allow)
    }

    async fn settle() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn register_hides_analysis_triggers() {
        let h = harness();
        assert_eq!(h.bridge.bindings().len(), 5);
        for trigger in ANALYSIS_TRIGGERS {
            assert!(!h.page.is_visible(trigger), "{trigger} should start hidden");
        }
        assert!(h.page.is_visible(ids::TRANSCRIPT_FORM));
        assert!(h.page.is_visible(ids::ASK_QUESTION_FORM));
    }

    #[test]
    fn register_skips_absent_trigger() {
        let page = MemoryPage::new()
            .with_element(ids::TRANSCRIPT_FORM, "")
            .with_element(ids::URL, "")
            .with_element(ids::TRANSCRIPT, "");
        let h = harness_with(page, OverlapPolicy::Allow);
        assert_eq!(h.bridge.bindings().len(), 1);
        assert!(h.bridge.binding(ids::SUMMARIZE_BTN).is_none());
    }

    #[tokio::test]
    async fn transcript_success_renders_and_reveals() {
        let h = harness();
        h.page.write(ids::URL, "http://example.com/v");
        h.transport.reply("/transcript", 200, r#"{"transcript":"hello"}"#);

        let outcome = h.bridge.fire(ids::TRANSCRIPT_FORM).await;

        assert!(outcome.is_success());
        assert_eq!(h.page.text(ids::TRANSCRIPT).as_deref(), Some("hello"));
        for trigger in ANALYSIS_TRIGGERS {
            assert!(h.page.is_visible(trigger), "{trigger} should be revealed");
        }
        assert_eq!(
            h.transport.requests(),
            [(
                "/transcript".to_string(),
                "url=http%3A%2F%2Fexample.com%2Fv".to_string()
            )]
        );
        assert!(h.recorder.messages().is_empty());
        assert_eq!(h.bridge.state(ids::TRANSCRIPT_FORM), BindingState::Idle);
    }

    #[tokio::test]
    async fn sentiment_renders_percentage() {
        let h = harness();
        h.page.write(ids::TRANSCRIPT, "great video");
        h.transport.reply(
            "/sentiment",
            200,
            r#"{"sentiment":{"label":"POSITIVE","score":0.9123}}"#,
        );

        let outcome = h.bridge.fire(ids::SENTIMENT_BTN).await;

        assert!(outcome.is_success());
        assert_eq!(
            h.page.text(ids::SENTIMENT).as_deref(),
            Some("Sentiment: POSITIVE (91.23%)")
        );
        assert_eq!(h.transport.requests()[0].1, "transcript=great+video");
    }

    #[tokio::test]
    async fn summary_and_keywords_use_their_templates() {
        let h = harness();
        h.transport.reply("/summarize", 200, r#"{"summary":"x"}"#);
        h.transport.reply("/keywords", 200, r#"{"keywords":"rust wasm"}"#);

        h.bridge.fire(ids::SUMMARIZE_BTN).await;
        h.bridge.fire(ids::KEYWORD_BTN).await;

        assert_eq!(h.page.text(ids::SUMMARY).as_deref(), Some("Summary: x"));
        assert_eq!(
            h.page.text(ids::KEYWORDS).as_deref(),
            Some("Keywords: rust wasm")
        );
    }

    #[tokio::test]
    async fn answer_sends_transcript_and_question() {
        let h = harness();
        h.page.write(ids::TRANSCRIPT, "the sky is blue");
        h.page.write(ids::QUESTION, "what colour is the sky?");
        h.transport.reply("/answer", 200, r#"{"answer":"blue"}"#);

        h.bridge.fire(ids::ASK_QUESTION_FORM).await;

        assert_eq!(h.page.text(ids::ANSWER).as_deref(), Some("Answer: blue"));
        assert_eq!(
            h.transport.requests()[0].1,
            "transcript=the+sky+is+blue&question=what+colour+is+the+sky%3F"
        );
    }

    #[tokio::test]
    async fn backend_error_field_leaves_page_untouched() {
        for (trigger, path) in [
            (ids::TRANSCRIPT_FORM, "/transcript"),
            (ids::SUMMARIZE_BTN, "/summarize"),
            (ids::SENTIMENT_BTN, "/sentiment"),
            (ids::KEYWORD_BTN, "/keywords"),
            (ids::ASK_QUESTION_FORM, "/answer"),
        ] {
            let h = harness();
            let before = h.page.snapshot();
            h.transport.reply(path, 200, r#"{"error":"quota exceeded"}"#);

            let outcome = h.bridge.fire(trigger).await;

            assert_eq!(
                outcome,
                RequestOutcome::Failure(BridgeError::Backend("quota exceeded".to_string()))
            );
            assert_eq!(h.page.snapshot(), before, "{trigger} modified the page");
            assert_eq!(h.recorder.messages(), ["quota exceeded"]);
        }
    }

    #[tokio::test]
    async fn http_status_failure_reports_once() {
        let h = harness();
        let before = h.page.snapshot();
        h.transport.reply("/summarize", 500, r#"{"error":"Failed to summarize transcript"}"#);

        let outcome = h.bridge.fire(ids::SUMMARIZE_BTN).await;

        assert!(matches!(
            outcome,
            RequestOutcome::Failure(BridgeError::HttpStatus { status: 500, .. })
        ));
        assert_eq!(h.page.snapshot(), before);
        assert_eq!(h.recorder.messages().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let h = harness();
        h.transport.fail("/keywords", "connection refused");

        let outcome = h.bridge.fire(ids::KEYWORD_BTN).await;

        assert_eq!(
            outcome.message().as_deref(),
            Some("transport failed: connection refused")
        );
        assert_eq!(
            h.recorder.messages(),
            ["transport failed: connection refused"]
        );
        assert_eq!(h.page.text(ids::KEYWORDS).as_deref(), Some(""));
    }

    #[tokio::test]
    async fn failed_transcript_does_not_reveal() {
        let h = harness();
        h.transport.reply("/transcript", 400, r#"{"error":"Invalid YouTube URL"}"#);

        h.bridge.fire(ids::TRANSCRIPT_FORM).await;

        for trigger in ANALYSIS_TRIGGERS {
            assert!(!h.page.is_visible(trigger));
        }
    }

    #[tokio::test]
    async fn missing_template_field_renders_undefined() {
        let h = harness();
        h.transport.reply("/summarize", 200, r#"{"result":"x"}"#);

        let outcome = h.bridge.fire(ids::SUMMARIZE_BTN).await;

        assert!(outcome.is_success());
        assert_eq!(
            h.page.text(ids::SUMMARY).as_deref(),
            Some("Summary: undefined")
        );
        assert!(h.recorder.messages().is_empty());
    }

    #[tokio::test]
    async fn transcript_without_field_still_reveals() {
        let h = harness();
        h.transport.reply("/transcript", 200, r#"{"status":"ok"}"#);

        let outcome = h.bridge.fire(ids::TRANSCRIPT_FORM).await;

        assert!(outcome.is_success());
        assert_eq!(h.page.text(ids::TRANSCRIPT).as_deref(), Some("undefined"));
        for trigger in ANALYSIS_TRIGGERS {
            assert!(h.page.is_visible(trigger), "{trigger} should be revealed");
        }
    }

    #[tokio::test]
    async fn sentiment_null_label_renders_null() {
        let h = harness();
        h.transport.reply(
            "/sentiment",
            200,
            r#"{"sentiment":{"label":null,"score":0.5}}"#,
        );

        let outcome = h.bridge.fire(ids::SENTIMENT_BTN).await;

        assert!(outcome.is_success());
        assert_eq!(
            h.page.text(ids::SENTIMENT).as_deref(),
            Some("Sentiment: null (50.00%)")
        );
    }

    #[tokio::test]
    async fn sentiment_array_is_a_failure() {
        let h = harness();
        h.transport
            .reply("/sentiment", 200, r#"{"sentiment":["POSITIVE",0.9]}"#);

        let outcome = h.bridge.fire(ids::SENTIMENT_BTN).await;

        assert!(matches!(
            outcome,
            RequestOutcome::Failure(BridgeError::Payload(_))
        ));
        assert_eq!(h.page.text(ids::SENTIMENT).as_deref(), Some(""));
        assert_eq!(h.recorder.messages().len(), 1);
    }

    #[tokio::test]
    async fn missing_sentiment_is_a_failure() {
        let h = harness();
        h.transport.reply("/sentiment", 200, r#"{"result":"x"}"#);

        let outcome = h.bridge.fire(ids::SENTIMENT_BTN).await;

        assert_eq!(
            outcome,
            RequestOutcome::Failure(BridgeError::MissingField("sentiment".to_string()))
        );
        assert_eq!(h.page.text(ids::SENTIMENT).as_deref(), Some(""));
    }

    #[tokio::test]
    async fn missing_input_element_sends_empty_value() {
        let page = MemoryPage::new()
            .with_element(ids::ASK_QUESTION_FORM, "")
            .with_element(ids::QUESTION, "why?")
            .with_element(ids::ANSWER, "");
        let h = harness_with(page, OverlapPolicy::Allow);
        h.transport.reply("/answer", 200, r#"{"answer":"because"}"#);

        let outcome = h.bridge.fire(ids::ASK_QUESTION_FORM).await;

        assert!(outcome.is_success());
        assert_eq!(h.transport.requests()[0].1, "transcript=&question=why%3F");
    }

    #[tokio::test]
    async fn missing_output_slot_still_succeeds() {
        let page = MemoryPage::new()
            .with_element(ids::TRANSCRIPT_FORM, "")
            .with_element(ids::URL, "u")
            .with_element(ids::SUMMARIZE_BTN, "");
        let h = harness_with(page, OverlapPolicy::Allow);
        h.transport.reply("/transcript", 200, r#"{"transcript":"t"}"#);

        let outcome = h.bridge.fire(ids::TRANSCRIPT_FORM).await;

        assert!(outcome.is_success());
        assert!(!h.page.contains(ids::TRANSCRIPT));
        assert!(h.page.is_visible(ids::SUMMARIZE_BTN));
    }

    #[tokio::test]
    async fn unknown_trigger_is_a_failure() {
        let h = harness();
        let outcome = h.bridge.fire("downloadBtn").await;
        assert_eq!(
            outcome,
            RequestOutcome::Failure(BridgeError::UnknownTrigger("downloadBtn".to_string()))
        );
        assert!(h.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn allow_policy_last_response_wins() {
        let h = harness();
        let first = h.transport.gated("/summarize", r#"{"summary":"first"}"#);
        let second = h.transport.gated("/summarize", r#"{"summary":"second"}"#);

        let (a, b, _) = tokio::join!(
            h.bridge.fire(ids::SUMMARIZE_BTN),
            h.bridge.fire(ids::SUMMARIZE_BTN),
            async {
                settle().await;
                assert_eq!(
                    h.bridge.state(ids::SUMMARIZE_BTN),
                    BindingState::Pending { in_flight: 2 }
                );
                second.send(()).unwrap();
                settle().await;
                assert_eq!(h.page.text(ids::SUMMARY).as_deref(), Some("Summary: second"));
                first.send(()).unwrap();
            }
        );

        assert!(a.is_success());
        assert!(b.is_success());
        assert_eq!(h.page.text(ids::SUMMARY).as_deref(), Some("Summary: first"));
        assert_eq!(h.bridge.state(ids::SUMMARIZE_BTN), BindingState::Idle);
    }

    #[tokio::test]
    async fn supersede_policy_keeps_newest_fire() {
        let h = harness_with(analyzer_page(), OverlapPolicy::Supersede);
        let first = h.transport.gated("/summarize", r#"{"summary":"first"}"#);
        let second = h.transport.gated("/summarize", r#"{"summary":"second"}"#);

        let (a, b, _) = tokio::join!(
            h.bridge.fire(ids::SUMMARIZE_BTN),
            h.bridge.fire(ids::SUMMARIZE_BTN),
            async {
                settle().await;
                second.send(()).unwrap();
                settle().await;
                first.send(()).unwrap();
            }
        );

        assert_eq!(
            a,
            RequestOutcome::Failure(BridgeError::Superseded(ids::SUMMARIZE_BTN.to_string()))
        );
        assert!(b.is_success());
        assert_eq!(h.page.text(ids::SUMMARY).as_deref(), Some("Summary: second"));
        assert!(h.recorder.messages().is_empty());
        assert_eq!(h.bridge.state(ids::SUMMARIZE_BTN), BindingState::Idle);
    }

    #[tokio::test]
    async fn reject_policy_refuses_overlap() {
        let h = harness_with(analyzer_page(), OverlapPolicy::Reject);
        let gate = h.transport.gated("/keywords", r#"{"keywords":"k"}"#);

        let (a, b, _) = tokio::join!(
            h.bridge.fire(ids::KEYWORD_BTN),
            async {
                settle().await;
                h.bridge.fire(ids::KEYWORD_BTN).await
            },
            async {
                settle().await;
                settle().await;
                gate.send(()).unwrap();
            }
        );

        assert!(a.is_success());
        assert_eq!(
            b,
            RequestOutcome::Failure(BridgeError::Busy(ids::KEYWORD_BTN.to_string()))
        );
        assert_eq!(h.transport.requests().len(), 1);
        assert_eq!(h.page.text(ids::KEYWORDS).as_deref(), Some("Keywords: k"));
    }

    #[tokio::test]
    async fn dropped_fire_returns_to_idle() {
        let h = harness();
        let _gate = h.transport.gated("/summarize", r#"{"summary":"never"}"#);

        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(10),
            h.bridge.fire(ids::SUMMARIZE_BTN),
        )
        .await;

        assert!(pending.is_err());
        assert_eq!(h.bridge.state(ids::SUMMARIZE_BTN), BindingState::Idle);
        assert_eq!(h.page.text(ids::SUMMARY).as_deref(), Some(""));
    }
}
