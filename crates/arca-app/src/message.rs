//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use arca_core::{AnalysisReport, HealthStatus};

use crate::input_key::InputKey;
use crate::state::{FormField, InputTab};
use crate::submission::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (animations)
    Tick,

    /// Quit immediately (q on Home, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Enter the analyzer with a fresh form and no result
    OpenAnalyzer,
    /// Return to the landing page, dropping the analyzer
    GoHome,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next visible field
    FocusNext,
    /// Move focus to the previous visible field
    FocusPrev,
    /// Switch between the text and file tabs
    ToggleInputTab,
    /// Select a tab directly
    SelectTab(InputTab),
    /// Type a character into the focused field
    InputChar(char),
    /// Delete the character before the cursor in the focused field
    InputBackspace,
    /// Replace a field's contents (headless runner, paste)
    SetField { field: FormField, value: String },

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the form for the active tab
    Submit,
    /// Response for `id` arrived with a report
    AnalysisCompleted {
        id: RequestId,
        report: Box<AnalysisReport>,
    },
    /// Request `id` failed; `message` is what the user sees
    AnalysisFailed { id: RequestId, message: String },
    /// Dismiss the error banner
    DismissError,
    /// Clear the held result, keeping the form
    NewAnalysis,

    // ─────────────────────────────────────────────────────────
    // Export Messages
    // ─────────────────────────────────────────────────────────
    /// Write the held report as JSON
    Export,
    /// Report written
    ExportCompleted { path: PathBuf },
    /// Report could not be written
    ExportFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll results up one line
    ScrollUp,
    /// Scroll results down one line
    ScrollDown,
    /// Page up in results
    PageUp,
    /// Page down in results
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Service Health
    // ─────────────────────────────────────────────────────────
    /// Query `GET /health`
    CheckHealth,
    /// Health check answered
    HealthChecked(HealthStatus),
    /// Health check could not reach the service
    HealthCheckFailed { message: String },
}
