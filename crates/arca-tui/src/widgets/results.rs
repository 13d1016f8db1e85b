//! Results pane: summary cards, severity counts, sorted risk list and the
//! export status line.

use arca_app::{ExportStatus, ResultsScroll};
use arca_core::{sort_risks, AnalysisReport, ReportSummary, SeverityClass, SeverityCounts};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use super::risk_card::RiskCard;
use crate::theme::{icons::IconSet, styles};

/// Renders against a [`ResultsScroll`], which it updates with the wrapped
/// row count of the risk list.
pub struct ResultsView<'a> {
    report: &'a AnalysisReport,
    icons: IconSet,
    tick: u64,
    export_status: Option<&'a ExportStatus>,
}

impl<'a> ResultsView<'a> {
    pub fn new(report: &'a AnalysisReport, icons: IconSet) -> Self {
        Self {
            report,
            icons,
            tick: 0,
            export_status: None,
        }
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    pub fn export_status(mut self, status: Option<&'a ExportStatus>) -> Self {
        self.export_status = status;
        self
    }

    /// Risk lines in display order (HIGH first, received order within a bucket).
    pub fn risk_lines(&self) -> Vec<Line<'a>> {
        if self.report.risks.is_empty() {
            return vec![Line::from(Span::styled(
                format!("{} No compliance risks were flagged.", self.icons.check()),
                styles::status_green(),
            ))];
        }
        sort_risks(&self.report.risks)
            .into_iter()
            .flat_map(|risk| RiskCard::new(risk, self.icons).tick(self.tick).lines())
            .collect()
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let title = if self.report.regulation_title.trim().is_empty() {
            "Untitled regulation"
        } else {
            self.report.regulation_title.as_str()
        };
        let line = Line::from(vec![
            Span::styled(self.icons.document(), styles::accent()),
            Span::raw(" "),
            Span::styled(title, styles::heading()),
            Span::styled(format!("  ({})", self.report.regulation_id), styles::text_muted()),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let summary = ReportSummary::of(self.report);
        let cards = [
            ("Total Risks", summary.total_risks.to_string()),
            ("Policies Analyzed", summary.policies_analyzed.to_string()),
            ("Date Processed", summary.date_processed),
        ];
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for ((label, value), column) in cards.iter().zip(columns.iter()) {
            let title = format!(" {label} ");
            Paragraph::new(Line::from(Span::styled(value.as_str(), styles::accent_bold())))
                .alignment(Alignment::Center)
                .block(styles::card_block(&title))
                .render(*column, buf);
        }
    }

    fn render_counts(&self, area: Rect, buf: &mut Buffer) {
        let counts = SeverityCounts::of(&self.report.risks);
        let buckets = [
            (SeverityClass::Critical, counts.high, "high"),
            (SeverityClass::Caution, counts.medium, "medium"),
            (SeverityClass::Safe, counts.low, "low"),
            (SeverityClass::Neutral, counts.other, "other"),
        ];
        let mut spans = Vec::new();
        for (class, count, name) in buckets {
            spans.push(Span::styled(self.icons.severity(class), styles::severity_accent(class)));
            spans.push(Span::styled(format!(" {count} {name}   "), styles::text_secondary()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let line = match self.export_status {
            Some(ExportStatus::Saved(path)) => Line::from(vec![
                Span::styled(self.icons.check(), styles::status_green()),
                Span::styled(format!(" Report saved to {}", path.display()), styles::status_green()),
            ]),
            Some(ExportStatus::Failed(message)) => Line::from(vec![
                Span::styled(self.icons.alert(), styles::status_red()),
                Span::styled(format!(" Export failed: {message}"), styles::status_red()),
            ]),
            None => Line::from(vec![
                Span::styled("Ctrl+E", styles::keybinding()),
                Span::styled(" export JSON report", styles::text_muted()),
            ]),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl StatefulWidget for ResultsView<'_> {
    type State = ResultsScroll;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ResultsScroll) {
        let [title, cards, counts, list, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_title(title, buf);
        self.render_cards(cards, buf);
        self.render_counts(counts, buf);

        let list_title = format!(" Risks ({}) ", self.report.risks.len());
        let block = styles::glass_block(true).title(list_title.as_str());
        let inner = block.inner(list);
        block.render(list, buf);

        // Offsets count wrapped rows, so measure at the pane's width
        let risks = Paragraph::new(self.risk_lines()).wrap(Wrap { trim: false });
        let rows = u16::try_from(risks.line_count(inner.width)).unwrap_or(u16::MAX);
        scroll.update_content_size(rows, inner.height);
        risks.scroll((scroll.offset(), 0)).render(inner, buf);

        self.render_status(status, buf);
    }
}
