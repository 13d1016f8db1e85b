//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use std::path::PathBuf;

use arca_core::AnalysisReport;

use crate::state::ServiceHealth;
use crate::submission::RequestId;

#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Submission Lifecycle
    // ─────────────────────────────────────────────────────────
    /// A request was issued
    SubmissionStarted { id: RequestId },

    /// Local validation stopped a submission before any request
    SubmissionRejected { message: String },

    /// The latest request returned a report
    AnalysisSucceeded {
        id: RequestId,
        report: Box<AnalysisReport>,
    },

    /// The latest request failed
    AnalysisFailed { id: RequestId, message: String },

    // ─────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────
    ReportExported { path: PathBuf },
    ExportFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Service
    // ─────────────────────────────────────────────────────────
    HealthChanged { health: ServiceHealth },
}

impl EngineEvent {
    /// Event type name for logging/filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::SubmissionStarted { .. } => "submission_started",
            EngineEvent::SubmissionRejected { .. } => "submission_rejected",
            EngineEvent::AnalysisSucceeded { .. } => "analysis_succeeded",
            EngineEvent::AnalysisFailed { .. } => "analysis_failed",
            EngineEvent::ReportExported { .. } => "report_exported",
            EngineEvent::ExportFailed { .. } => "export_failed",
            EngineEvent::HealthChanged { .. } => "health_changed",
        }
    }
}
