//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the analysis client
//! and settings. Both runners drive it the same way: feed messages in, let
//! it dispatch actions, read state (TUI) or subscribe to events (headless).

use std::sync::Arc;

use arca_client::AnalysisApi;
use tokio::sync::{broadcast, mpsc};
use tracing::debug;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, ExportStatus, ServiceHealth};
use crate::submission::RequestId;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit the matching EngineEvents.
#[derive(Debug, Clone, Default, PartialEq)]
struct StateSnapshot {
    latest_request: Option<RequestId>,
    loading: bool,
    has_result: bool,
    error: Option<String>,
    export_status: Option<ExportStatus>,
    health: ServiceHealth,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        let mut snapshot = Self {
            health: state.health.clone(),
            ..Self::default()
        };
        if let Some(analyzer) = &state.analyzer {
            let submission = &analyzer.submission;
            snapshot.latest_request = submission.latest_request();
            snapshot.loading = submission.is_loading();
            snapshot.has_result = submission.result().is_some();
            snapshot.error = submission.error().map(str::to_string);
            snapshot.export_status = analyzer.export_status.clone();
        }
        snapshot
    }
}

/// Orchestration engine for the ARCA console.
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, runners).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Effective settings for this run
    pub settings: Settings,

    api: Arc<A>,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<A> Engine<A>
where
    A: AnalysisApi + Send + Sync + 'static,
{
    /// Create an Engine around an analysis client.
    ///
    /// Creates the message channel (capacity 256), the event broadcaster and
    /// spawns the signal handler. Must be called inside a tokio runtime.
    pub fn new(api: A, settings: Settings) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            api: Arc::new(api),
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// Subscribers that fall behind lose the oldest events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.api);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner calls this
    /// before every render.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message. `None` once every sender is gone.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        let same_request = pre.latest_request == post.latest_request;

        // New request issued
        if !same_request && post.loading {
            if let Some(id) = post.latest_request {
                self.emit(EngineEvent::SubmissionStarted { id });
            }
        }

        // Latest request settled
        if same_request && pre.loading && !post.loading {
            if let Some(id) = post.latest_request {
                if post.has_result {
                    if let Some(report) = self.held_report() {
                        self.emit(EngineEvent::AnalysisSucceeded {
                            id,
                            report: Box::new(report),
                        });
                    }
                } else if let Some(message) = &post.error {
                    self.emit(EngineEvent::AnalysisFailed {
                        id,
                        message: message.clone(),
                    });
                }
            }
        }

        // Rejected before any request was issued
        if same_request && !pre.loading && !post.loading && pre.error != post.error {
            if let Some(message) = &post.error {
                self.emit(EngineEvent::SubmissionRejected {
                    message: message.clone(),
                });
            }
        }

        if pre.export_status != post.export_status {
            match &post.export_status {
                Some(ExportStatus::Saved(path)) => {
                    self.emit(EngineEvent::ReportExported { path: path.clone() })
                }
                Some(ExportStatus::Failed(message)) => self.emit(EngineEvent::ExportFailed {
                    message: message.clone(),
                }),
                None => {}
            }
        }

        if pre.health != post.health && post.health != ServiceHealth::Checking {
            self.emit(EngineEvent::HealthChanged {
                health: post.health.clone(),
            });
        }
    }

    fn held_report(&self) -> Option<arca_core::AnalysisReport> {
        self.state
            .analyzer
            .as_ref()
            .and_then(|a| a.submission.result())
            .cloned()
    }

    /// send() only fails when nobody is subscribed
    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormField, InputTab};
    use arca_client::test_utils::{test_report, test_risk, FakeAnalysisApi, FakeHealth};
    use arca_core::Error;
    use std::time::Duration;

    async fn settle<A>(engine: &mut Engine<A>)
    where
        A: AnalysisApi + Send + Sync + 'static,
    {
        let msg = tokio::time::timeout(Duration::from_secs(5), engine.next_message())
            .await
            .expect("timed out")
            .expect("channel closed");
        engine.process_message(msg);
    }

    fn type_text<A>(engine: &mut Engine<A>, text: &str)
    where
        A: AnalysisApi + Send + Sync + 'static,
    {
        engine.process_message(Message::SetField {
            field: FormField::Text,
            value: text.to_string(),
        });
    }

    #[tokio::test]
    async fn test_success_emits_started_and_succeeded() {
        let api = FakeAnalysisApi::new().with_report(test_report(
            "R1",
            vec![test_risk("low", Some("LOW")), test_risk("high", Some("HIGH"))],
        ));
        let mut engine = Engine::new(api, Settings::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::OpenAnalyzer);
        type_text(&mut engine, "Article 1");
        engine.process_message(Message::Submit);
        settle(&mut engine).await;

        assert!(matches!(
            events.try_recv().unwrap(),
            EngineEvent::SubmissionStarted { .. }
        ));
        match events.try_recv().unwrap() {
            EngineEvent::AnalysisSucceeded { report, .. } => {
                assert_eq!(report.regulation_id, "R1")
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_emits_failed() {
        let api = FakeAnalysisApi::new().with_error(Error::api(500, None));
        let mut engine = Engine::new(api, Settings::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::OpenAnalyzer);
        type_text(&mut engine, "Article 1");
        engine.process_message(Message::Submit);
        settle(&mut engine).await;

        let _started = events.try_recv().unwrap();
        match events.try_recv().unwrap() {
            EngineEvent::AnalysisFailed { message, .. } => assert_eq!(message, "Analysis failed"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_emits_event_and_sends_nothing() {
        let mut engine = Engine::new(FakeAnalysisApi::new(), Settings::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::OpenAnalyzer);
        engine.process_message(Message::SelectTab(InputTab::File));
        engine.process_message(Message::Submit);

        match events.try_recv().unwrap() {
            EngineEvent::SubmissionRejected { message } => {
                assert_eq!(message, "Please select a file")
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(engine.api().call_count(), 0);
    }

    #[tokio::test]
    async fn test_export_emits_path() {
        let temp = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.export.directory = temp.path().to_path_buf();

        let api = FakeAnalysisApi::new().with_report(test_report("R5", vec![]));
        let mut engine = Engine::new(api, settings);
        let mut events = engine.subscribe();

        engine.process_message(Message::OpenAnalyzer);
        type_text(&mut engine, "Article 1");
        engine.process_message(Message::Submit);
        settle(&mut engine).await;
        engine.process_message(Message::Export);
        settle(&mut engine).await;

        let mut exported = None;
        while let Ok(event) = events.try_recv() {
            if let EngineEvent::ReportExported { path } = event {
                exported = Some(path);
            }
        }
        assert_eq!(exported, Some(temp.path().join("arca_report_R5.json")));
    }

    #[tokio::test]
    async fn test_health_change_emitted() {
        let api = FakeAnalysisApi::new().with_health(FakeHealth::Unreachable);
        let mut engine = Engine::new(api, Settings::default());
        let mut events = engine.subscribe();

        engine.process_message(Message::CheckHealth);
        settle(&mut engine).await;

        match events.try_recv().unwrap() {
            EngineEvent::HealthChanged { health } => {
                assert_eq!(health, ServiceHealth::Unreachable)
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_drain_pending_messages() {
        let mut engine = Engine::new(FakeAnalysisApi::new(), Settings::default());
        let tx = engine.msg_sender();
        tx.send(Message::OpenAnalyzer).await.unwrap();
        tx.send(Message::Quit).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert!(engine.should_quit());
    }
}
