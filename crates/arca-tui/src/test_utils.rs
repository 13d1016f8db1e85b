//! Test helpers for rendering widgets and whole frames into ratatui's
//! `TestBackend` and asserting on the resulting buffer.

use arca_app::{AppState, Message};
use arca_core::AnalysisReport;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Narrow terminal for degraded layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Wrapper around a `TestBackend` terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `term.draw_with(|f| view(f, &mut state))`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_text(self.buffer(), line).contains(text)
    }

    /// Every row of the buffer, newline separated
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        (0..self.buffer().area.height).find(|&y| self.line_contains(y, text))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_text(buffer: &Buffer, y: u16) -> String {
    if y >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// State on the analyzer page with an empty form
pub fn analyzer_state() -> AppState {
    let mut state = AppState::new();
    arca_app::handler::update(&mut state, Message::OpenAnalyzer);
    state
}

/// State on the analyzer page holding `report`
pub fn state_with_report(report: AnalysisReport) -> AppState {
    let mut state = analyzer_state();
    let analyzer = state.analyzer.as_mut().expect("analyzer open");
    let id = analyzer.submission.start_request();
    analyzer.submission.succeed(id, report);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        assert_eq!(
            TestTerminal::compact().area(),
            Rect::new(0, 0, COMPACT_WIDTH, COMPACT_HEIGHT)
        );
    }

    #[test]
    fn test_buffer_queries() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("first\nsecond"), term.area());

        assert!(term.buffer_contains("second"));
        assert!(term.line_contains(0, "first"));
        assert_eq!(term.find_line("second"), Some(1));
        assert_eq!(term.find_line("third"), None);
        assert!(!term.line_contains(99, "first"));
    }

    #[test]
    fn test_state_with_report_is_on_analyzer() {
        let state = state_with_report(arca_client::test_utils::test_report("R", vec![]));
        let analyzer = state.analyzer.as_ref().unwrap();
        assert!(analyzer.submission.result().is_some());
        assert!(!analyzer.submission.is_loading());
    }
}
