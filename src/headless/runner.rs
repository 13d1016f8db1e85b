//! Headless mode runner - one submission through the Engine, no TUI
//!
//! The job is replayed as the same messages a user would produce on the
//! analyzer page; engine events are translated into NDJSON lines.

use std::io::Write;
use std::path::PathBuf;

use tokio::sync::broadcast::{self, error::TryRecvError};

use arca_app::config::Settings;
use arca_app::{Engine, EngineEvent, FormField, InputTab, Message};
use arca_client::AnalysisApi;
use arca_core::prelude::*;

use super::HeadlessEvent;

/// What to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobInput {
    /// Regulation text, already read from `--text-file`
    Text(String),
    /// Document to upload
    File(PathBuf),
}

/// A one-shot analysis assembled from command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessJob {
    pub input: JobInput,
    pub title: Option<String>,
    pub date: Option<String>,
    /// Write the report to the configured export directory on success
    pub export: bool,
}

impl HeadlessJob {
    fn kind(&self) -> &'static str {
        match self.input {
            JobInput::Text(_) => "text",
            JobInput::File(_) => "file",
        }
    }

    /// Form edits that reproduce this job on a fresh analyzer page
    fn form_messages(&self) -> Vec<Message> {
        let (tab, field, value) = match &self.input {
            JobInput::Text(text) => (InputTab::Text, FormField::Text, text.clone()),
            JobInput::File(path) => (
                InputTab::File,
                FormField::FilePath,
                path.display().to_string(),
            ),
        };
        let mut messages = vec![
            Message::SelectTab(tab),
            Message::SetField { field, value },
        ];
        if let Some(title) = &self.title {
            messages.push(Message::SetField {
                field: FormField::Title,
                value: title.clone(),
            });
        }
        if let Some(date) = &self.date {
            messages.push(Message::SetField {
                field: FormField::Date,
                value: date.clone(),
            });
        }
        messages
    }
}

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Succeeded => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Run `job` and write NDJSON events to stdout
pub async fn run_headless<A>(api: A, settings: Settings, job: HeadlessJob) -> Result<Outcome>
where
    A: AnalysisApi + Send + Sync + 'static,
{
    let mut stdout = std::io::stdout();
    run_headless_with_output(api, settings, job, &mut stdout).await
}

/// Run `job`, writing NDJSON events to `out`
pub async fn run_headless_with_output<A, W>(
    api: A,
    settings: Settings,
    job: HeadlessJob,
    out: &mut W,
) -> Result<Outcome>
where
    A: AnalysisApi + Send + Sync + 'static,
    W: Write,
{
    info!("═══════════════════════════════════════════════════════");
    info!("ARCA console starting in HEADLESS mode");
    info!("Service: {}", settings.api.base_url);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(api, settings);
    let mut events = engine.subscribe();

    engine.process_message(Message::OpenAnalyzer);
    for message in job.form_messages() {
        engine.process_message(message);
    }
    engine.process_message(Message::Submit);

    let outcome = drive(&mut engine, &mut events, &job, out).await;
    info!("Headless run finished: {:?}", outcome);
    Ok(outcome)
}

async fn drive<A, W>(
    engine: &mut Engine<A>,
    events: &mut broadcast::Receiver<EngineEvent>,
    job: &HeadlessJob,
    out: &mut W,
) -> Outcome
where
    A: AnalysisApi + Send + Sync + 'static,
    W: Write,
{
    // Submission is synchronous: either a request went out or it was refused
    let request_id = match pending_event(events) {
        Some(EngineEvent::SubmissionStarted { id }) => id.value(),
        Some(EngineEvent::SubmissionRejected { message }) => {
            HeadlessEvent::error(message, true).write_to(out);
            return Outcome::Failed;
        }
        _ => {
            HeadlessEvent::error("Regulation text is empty".to_string(), true).write_to(out);
            return Outcome::Failed;
        }
    };
    HeadlessEvent::submission_started(request_id, job.kind()).write_to(out);

    let report = loop {
        match next_event(engine, events).await {
            Some(EngineEvent::AnalysisSucceeded { report, .. }) => break report,
            Some(EngineEvent::AnalysisFailed { message, .. }) => {
                HeadlessEvent::analysis_failed(request_id, message).write_to(out);
                return Outcome::Failed;
            }
            Some(_) => continue,
            None => return interrupted(out),
        }
    };
    HeadlessEvent::analysis_succeeded(request_id, &report).write_to(out);

    if !job.export {
        return Outcome::Succeeded;
    }

    engine.process_message(Message::Export);
    loop {
        match next_event(engine, events).await {
            Some(EngineEvent::ReportExported { path }) => {
                HeadlessEvent::report_exported(&path).write_to(out);
                return Outcome::Succeeded;
            }
            Some(EngineEvent::ExportFailed { message }) => {
                HeadlessEvent::error(format!("Export failed: {message}"), true).write_to(out);
                return Outcome::Failed;
            }
            Some(_) => continue,
            None => return interrupted(out),
        }
    }
}

fn interrupted<W: Write>(out: &mut W) -> Outcome {
    HeadlessEvent::error("Interrupted".to_string(), true).write_to(out);
    Outcome::Failed
}

/// An event already broadcast, if any
fn pending_event(events: &mut broadcast::Receiver<EngineEvent>) -> Option<EngineEvent> {
    loop {
        match events.try_recv() {
            Ok(event) => return Some(event),
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless event receiver lagged by {} events", skipped);
            }
            Err(_) => return None,
        }
    }
}

/// Pump engine messages until an event is broadcast.
///
/// `None` when a quit was requested (signal) or the channel closed.
async fn next_event<A>(
    engine: &mut Engine<A>,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Option<EngineEvent>
where
    A: AnalysisApi + Send + Sync + 'static,
{
    loop {
        if let Some(event) = pending_event(events) {
            return Some(event);
        }
        if engine.should_quit() {
            info!("Quit requested");
            return None;
        }
        let message = engine.next_message().await?;
        engine.process_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_messages_for_file_job() {
        let job = HeadlessJob {
            input: JobInput::File(PathBuf::from("law.pdf")),
            title: Some("Title".into()),
            date: None,
            export: false,
        };
        let messages = job.form_messages();

        assert!(matches!(messages[0], Message::SelectTab(InputTab::File)));
        assert!(matches!(
            &messages[1],
            Message::SetField { field: FormField::FilePath, value } if value == "law.pdf"
        ));
        assert_eq!(messages.len(), 3);
        assert_eq!(job.kind(), "file");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::Succeeded.exit_code(), 0);
        assert_eq!(Outcome::Failed.exit_code(), 1);
    }
}
