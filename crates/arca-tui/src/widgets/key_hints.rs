//! Bottom bar listing the keys that do something on the current page.

use arca_app::Route;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct KeyHints {
    route: Route,
    has_result: bool,
    has_error: bool,
}

impl KeyHints {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            has_result: false,
            has_error: false,
        }
    }

    pub fn has_result(mut self, has_result: bool) -> Self {
        self.has_result = has_result;
        self
    }

    pub fn has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    /// `(key, action)` pairs in display order
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.route {
            Route::Home => vec![("Enter", "analyze a regulation"), ("q", "quit")],
            Route::Analyzer => {
                let mut hints = vec![("Tab", "next field"), ("F2", "text/file"), ("^S", "analyze")];
                if self.has_error {
                    hints.push(("Esc", "dismiss"));
                }
                if self.has_result {
                    hints.extend([("↑↓", "scroll"), ("^E", "export"), ("^N", "new")]);
                }
                hints.extend([("^B", "home"), ("^C", "quit")]);
                hints
            }
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
