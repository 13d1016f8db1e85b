//! Key event handlers for each route

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AnalyzerState, AppState, FormField, Route};

/// Convert key events to messages based on the current route
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match (state.route, state.analyzer.as_ref()) {
        (Route::Analyzer, Some(analyzer)) => handle_key_analyzer(analyzer, key),
        _ => handle_key_home(key),
    }
}

fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('a' | 'A') => Some(Message::OpenAnalyzer),
        InputKey::Char('q' | 'Q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_analyzer(analyzer: &AnalyzerState, key: InputKey) -> Option<Message> {
    let has_result = analyzer.submission.result().is_some();

    match key {
        // Global shortcuts
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('s') => Some(Message::Submit),
        InputKey::CharCtrl('e') => Some(Message::Export),
        InputKey::CharCtrl('d') => Some(Message::DismissError),
        InputKey::CharCtrl('n') => Some(Message::NewAnalysis),
        InputKey::CharCtrl('b') => Some(Message::GoHome),
        InputKey::Esc if analyzer.submission.error().is_some() => Some(Message::DismissError),
        InputKey::F(2) => Some(Message::ToggleInputTab),

        // Focus
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),

        // Results scrolling
        InputKey::Up if has_result => Some(Message::ScrollUp),
        InputKey::Down if has_result => Some(Message::ScrollDown),
        InputKey::PageUp if has_result => Some(Message::PageUp),
        InputKey::PageDown if has_result => Some(Message::PageDown),

        // Editing: Enter is a newline in the text area and submits elsewhere
        InputKey::Enter if analyzer.form.focus == FormField::Text => Some(Message::InputChar('\n')),
        InputKey::Enter => Some(Message::Submit),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Char(c) => Some(Message::InputChar(c)),

        _ => None,
    }
}
