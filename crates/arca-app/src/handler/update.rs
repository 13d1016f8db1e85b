//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppPhase;
use crate::state::AppState;

use super::{keys::handle_key, navigation, submission, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::OpenAnalyzer => navigation::handle_open_analyzer(state),
        Message::GoHome => navigation::handle_go_home(state),

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => navigation::handle_focus_next(state),
        Message::FocusPrev => navigation::handle_focus_prev(state),
        Message::ToggleInputTab => navigation::handle_select_tab(state, None),
        Message::SelectTab(tab) => navigation::handle_select_tab(state, Some(tab)),
        Message::InputChar(c) => navigation::handle_input_char(state, c),
        Message::InputBackspace => navigation::handle_input_backspace(state),
        Message::SetField { field, value } => navigation::handle_set_field(state, field, value),

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => submission::handle_submit(state),
        Message::AnalysisCompleted { id, report } => {
            submission::handle_analysis_completed(state, id, *report)
        }
        Message::AnalysisFailed { id, message } => {
            submission::handle_analysis_failed(state, id, message)
        }
        Message::DismissError => submission::handle_dismiss_error(state),
        Message::NewAnalysis => submission::handle_new_analysis(state),

        // ─────────────────────────────────────────────────────────
        // Export Messages
        // ─────────────────────────────────────────────────────────
        Message::Export => submission::handle_export(state),
        Message::ExportCompleted { path } => submission::handle_export_completed(state, path),
        Message::ExportFailed { message } => submission::handle_export_failed(state, message),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => navigation::handle_scroll(state, -1),
        Message::ScrollDown => navigation::handle_scroll(state, 1),
        Message::PageUp => navigation::handle_page(state, false),
        Message::PageDown => navigation::handle_page(state, true),

        // ─────────────────────────────────────────────────────────
        // Service Health
        // ─────────────────────────────────────────────────────────
        Message::CheckHealth => submission::handle_check_health(state),
        Message::HealthChecked(status) => submission::handle_health_checked(state, status),
        Message::HealthCheckFailed { message } => {
            submission::handle_health_check_failed(state, message)
        }
    }
}
