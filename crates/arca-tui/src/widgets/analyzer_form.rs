//! Analyzer input form: tab bar, title/date inputs, body field and the
//! submit row with the word counter.

use arca_app::state::AnalysisForm;
use arca_app::{FormField, InputTab};
use arca_core::{upload_warning, MAX_WORDS, UPLOAD_HINT};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

const CURSOR: &str = "▏";

pub struct AnalyzerForm<'a> {
    form: &'a AnalysisForm,
    icons: IconSet,
    loading: bool,
}

impl<'a> AnalyzerForm<'a> {
    pub fn new(form: &'a AnalysisForm, icons: IconSet) -> Self {
        Self {
            form,
            icons,
            loading: false,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for tab in [InputTab::Text, InputTab::File] {
            let style = if tab == self.form.tab {
                styles::focused_selected()
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(format!(" {} ", tab.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("F2", styles::keybinding()));
        spans.push(Span::styled(" switch", styles::text_muted()));
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }

    /// Bordered input for one field. Empty unfocused fields show the placeholder.
    fn render_field(&self, field: FormField, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focus == field;
        let value = self.form.value(field);
        let block = styles::glass_block(focused).title(format!(" {} ", field.label()));
        let inner = block.inner(area);

        let mut lines: Vec<Line> = if value.is_empty() && !focused {
            vec![Line::from(Span::styled(
                field.placeholder(),
                styles::text_muted().add_modifier(Modifier::ITALIC),
            ))]
        } else {
            value
                .split('\n')
                .map(|l| Line::from(Span::styled(l, styles::text_primary())))
                .collect()
        };
        if focused {
            match lines.last_mut() {
                Some(last) => last.push_span(Span::styled(CURSOR, styles::accent())),
                None => lines.push(Line::from(Span::styled(CURSOR, styles::accent()))),
            }
        }

        // Keep the end of the text (where typing happens) in view
        let overflow = (lines.len() as u16).saturating_sub(inner.height);
        Paragraph::new(lines)
            .block(block)
            .scroll((overflow, 0))
            .render(area, buf);
    }

    /// Accepted types under the path input, plus a warning for a doubtful file
    fn render_upload_hint(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            format!(" {UPLOAD_HINT}"),
            styles::text_muted(),
        ))];
        if let Some(warning) = self.form.selected_file().and_then(upload_warning) {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", self.icons.alert()), styles::status_yellow()),
                Span::styled(warning, styles::status_yellow()),
            ]));
        }
        Paragraph::new(lines).render(area, buf);
    }

    fn render_submit_row(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        if self.loading {
            spans.push(Span::styled(" Analyzing... ", styles::text_muted()));
        } else {
            spans.push(Span::styled(" Analyze ", styles::focused_selected()));
            spans.push(Span::styled(" Ctrl+S", styles::keybinding()));
        }

        if self.form.tab == InputTab::Text {
            let words = self.form.word_count();
            let style = if words > MAX_WORDS {
                styles::status_red().add_modifier(Modifier::BOLD)
            } else {
                styles::text_muted()
            };
            spans.push(Span::raw("   "));
            spans.push(Span::styled(word_counter(words), style));
        } else if let Some(path) = self.form.selected_file() {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(self.icons.document(), styles::accent()));
            spans.push(Span::styled(
                format!(" {}", path.display()),
                styles::text_secondary(),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

/// `N / 2000 words`
pub fn word_counter(words: usize) -> String {
    format!("{words} / {MAX_WORDS} words")
}

impl Widget for AnalyzerForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Text body grows with the area; the path input stays one line tall
        let (body_constraint, spacer) = match self.form.tab {
            InputTab::Text => (Constraint::Fill(1), Constraint::Length(0)),
            InputTab::File => (Constraint::Length(3), Constraint::Fill(1)),
        };
        let [tabs, meta, body, below, submit] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            body_constraint,
            spacer,
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_tabs(tabs, buf);

        let [title, date] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(meta);
        self.render_field(FormField::Title, title, buf);
        self.render_field(FormField::Date, date, buf);

        let body_field = match self.form.tab {
            InputTab::Text => FormField::Text,
            InputTab::File => FormField::FilePath,
        };
        self.render_field(body_field, body, buf);
        if self.form.tab == InputTab::File {
            self.render_upload_hint(below, buf);
        }
        self.render_submit_row(submit, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use arca_app::config::IconMode;

    fn render(form: &AnalysisForm, loading: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 16);
        term.render_widget(
            AnalyzerForm::new(form, IconSet::new(IconMode::Unicode)).loading(loading),
            term.area(),
        );
        term
    }

    #[test]
    fn test_text_tab_shows_counter() {
        let mut form = AnalysisForm::default();
        form.regulation_text = "one two  three".to_string();
        let term = render(&form, false);

        assert!(term.buffer_contains("Regulation Text"));
        assert!(term.buffer_contains("3 / 2000 words"));
        assert!(term.buffer_contains("Analyze"));
    }

    #[test]
    fn test_placeholders_on_unfocused_empty_fields() {
        let form = AnalysisForm::default();
        let term = render(&form, false);

        assert!(term.buffer_contains("YYYY-MM-DD (optional)"));
    }

    #[test]
    fn test_file_tab() {
        let mut form = AnalysisForm::default();
        form.set_tab(InputTab::File);
        form.file_path = "docs/law.pdf".to_string();
        let term = render(&form, false);

        assert!(term.buffer_contains("Document Path"));
        assert!(term.buffer_contains("docs/law.pdf"));
        assert!(term.buffer_contains("PDF, TXT or MD (max 10MB)"));
        assert!(!term.buffer_contains("Unsupported"));
        assert!(!term.buffer_contains("words"));
    }

    #[test]
    fn test_unsupported_file_warns_without_blocking() {
        let mut form = AnalysisForm::default();
        form.set_tab(InputTab::File);
        form.file_path = "docs/law.docx".to_string();
        let term = render(&form, false);

        assert!(term.buffer_contains("Unsupported file type"));
        assert!(term.buffer_contains("Ctrl+S"));
        assert!(form.build_request().is_ok());
    }

    #[test]
    fn test_loading_replaces_button() {
        let form = AnalysisForm::default();
        let term = render(&form, true);

        assert!(term.buffer_contains("Analyzing..."));
        assert!(!term.buffer_contains("Ctrl+S"));
    }

    #[test]
    fn test_word_counter_format() {
        assert_eq!(word_counter(0), "0 / 2000 words");
        assert_eq!(word_counter(2001), "2001 / 2000 words");
    }

    #[test]
    fn test_long_text_keeps_end_visible() {
        let mut form = AnalysisForm::default();
        form.regulation_text = (1..=40)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let term = render(&form, false);

        assert!(term.buffer_contains("line 40"));
        assert!(!term.buffer_contains("line 1 "));
    }
}
