//! Headless mode - one-shot analysis with NDJSON output
//!
//! Runs a single submission through the same Engine the TUI uses and writes
//! one JSON object per line to stdout, so scripts and CI jobs can consume
//! the result without parsing a terminal screen.
//!
//! # Example Output
//!
//! ```json
//! {"event":"submission_started","request_id":1,"kind":"text","timestamp":1704700001000}
//! {"event":"analysis_succeeded","request_id":1,"regulation_id":"REG-1",...}
//! {"event":"report_exported","path":"./arca_report_REG-1.json","timestamp":1704700003000}
//! ```

pub mod runner;

pub use runner::{run_headless, run_headless_with_output, HeadlessJob, JobInput, Outcome};

use std::io::{self, Write};

use arca_core::{severity_label, sort_risks, AnalysisReport, ReportSummary};
use chrono::Utc;
use serde::Serialize;
use tracing::error;

/// One risk in display order, trimmed to what a script needs to triage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub policy_id: String,
    /// Raw severity as sent by the service, if any
    pub severity: Option<String>,
    /// Badge text, e.g. `HIGH SEVERITY`
    pub label: String,
    pub divergence_summary: String,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A request was sent to the service
    SubmissionStarted {
        request_id: u64,
        kind: String,
        timestamp: i64,
    },

    /// The service returned a report
    AnalysisSucceeded {
        request_id: u64,
        regulation_id: String,
        regulation_title: String,
        total_risks_flagged: u64,
        policies_analyzed: u64,
        date_processed: String,
        risks: Vec<RiskSummary>,
        timestamp: i64,
    },

    /// The request failed; `message` is what the analyzer page would show
    AnalysisFailed {
        request_id: u64,
        message: String,
        timestamp: i64,
    },

    /// The report was written to disk
    ReportExported { path: String, timestamp: i64 },

    /// Anything else that stops the run
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };
        if let Err(e) = writeln!(out, "{}", json).and_then(|_| out.flush()) {
            error!("Failed to write headless event: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn submission_started(request_id: u64, kind: &str) -> Self {
        Self::SubmissionStarted {
            request_id,
            kind: kind.to_string(),
            timestamp: Self::now(),
        }
    }

    /// Summary of `report` with risks in display order
    pub fn analysis_succeeded(request_id: u64, report: &AnalysisReport) -> Self {
        let summary = ReportSummary::of(report);
        let risks = sort_risks(&report.risks)
            .into_iter()
            .map(|risk| RiskSummary {
                policy_id: risk.policy_id.clone(),
                severity: risk.severity.as_ref().map(|s| s.as_str().to_string()),
                label: severity_label(risk.severity.as_ref()),
                divergence_summary: risk.divergence_summary.clone(),
            })
            .collect();

        Self::AnalysisSucceeded {
            request_id,
            regulation_id: report.regulation_id.clone(),
            regulation_title: report.regulation_title.clone(),
            total_risks_flagged: summary.total_risks,
            policies_analyzed: summary.policies_analyzed,
            date_processed: report.date_processed.clone(),
            risks,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(request_id: u64, message: String) -> Self {
        Self::AnalysisFailed {
            request_id,
            message,
            timestamp: Self::now(),
        }
    }

    pub fn report_exported(path: &std::path::Path) -> Self {
        Self::ReportExported {
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
