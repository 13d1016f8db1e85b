//! Route changes, form editing and results scrolling

use tracing::debug;

use super::UpdateResult;
use crate::state::{AppState, FormField, InputTab};

pub fn handle_open_analyzer(state: &mut AppState) -> UpdateResult {
    debug!("Opening analyzer");
    state.open_analyzer();
    UpdateResult::none()
}

pub fn handle_go_home(state: &mut AppState) -> UpdateResult {
    debug!("Returning home");
    state.go_home();
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        analyzer.form.focus_next();
    }
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        analyzer.form.focus_prev();
    }
    UpdateResult::none()
}

pub fn handle_select_tab(state: &mut AppState, tab: Option<InputTab>) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        let tab = tab.unwrap_or_else(|| analyzer.form.tab.toggle());
        analyzer.form.set_tab(tab);
    }
    UpdateResult::none()
}

pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        let focus = analyzer.form.focus;
        // Only the regulation text is multi-line
        if c == '\n' && focus != FormField::Text {
            return UpdateResult::none();
        }
        analyzer.form.value_mut(focus).push(c);
    }
    UpdateResult::none()
}

pub fn handle_input_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        let focus = analyzer.form.focus;
        analyzer.form.value_mut(focus).pop();
    }
    UpdateResult::none()
}

pub fn handle_set_field(state: &mut AppState, field: FormField, value: String) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        *analyzer.form.value_mut(field) = value;
    }
    UpdateResult::none()
}

pub fn handle_scroll(state: &mut AppState, delta: i32) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        analyzer.results_scroll.scroll_by(delta);
    }
    UpdateResult::none()
}

/// Scroll one page; `down` selects the direction
pub fn handle_page(state: &mut AppState, down: bool) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        let page = analyzer.results_scroll.page();
        analyzer.results_scroll.scroll_by(if down { page } else { -page });
    }
    UpdateResult::none()
}
