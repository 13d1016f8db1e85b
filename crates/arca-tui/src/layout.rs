//! Screen layout definitions for the TUI
//!
//! Every route shares the same frame: a bordered header, the page body,
//! and a one-line key hint bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header including its borders
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Product name, route and service status pill
    pub header: Rect,

    /// Page content
    pub body: Rect,

    /// Key hints for the current route
    pub hints: Rect,
}

/// Split the terminal into header, body and hint bar.
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, hints] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        body,
        hints,
    }
}

/// Analyzer body: form on top, results below.
///
/// The form shrinks to its fixed height once a report is shown so the
/// results pane gets the rest of the screen.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerAreas {
    pub form: Rect,
    pub results: Rect,
}

/// Rows the form needs: two single-line inputs, tabs, and the body field.
pub const FORM_COMPACT_HEIGHT: u16 = 11;

pub fn analyzer(body: Rect, has_results: bool) -> AnalyzerAreas {
    let form_constraint = if has_results {
        Constraint::Length(FORM_COMPACT_HEIGHT)
    } else {
        Constraint::Min(FORM_COMPACT_HEIGHT)
    };
    let results_constraint = if has_results {
        Constraint::Min(5)
    } else {
        Constraint::Length(0)
    };

    let [form, results] = Layout::vertical([form_constraint, results_constraint]).areas(body);
    AnalyzerAreas { form, results }
}
