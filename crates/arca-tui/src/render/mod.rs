//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use arca_app::state::AnalyzerState;
use arca_app::{AppState, Route};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Animation frames live in the model. The only write is the measured size
/// of the results pane, which bounds scrolling.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::AppHeader::new(state.route, &state.health, icons).base_url(&state.settings.api.base_url),
        areas.header,
    );

    let mut hints = widgets::KeyHints::new(state.route);
    match (state.route, state.analyzer.as_mut()) {
        (Route::Analyzer, Some(analyzer)) => {
            hints = hints
                .has_result(analyzer.submission.result().is_some())
                .has_error(analyzer.submission.error().is_some());
            render_analyzer(frame, areas.body, analyzer, state.tick, icons);
        }
        _ => frame.render_widget(widgets::HomeView::new(icons), areas.body),
    }
    frame.render_widget(hints, areas.hints);
}

fn render_analyzer(
    frame: &mut Frame,
    body: Rect,
    analyzer: &mut AnalyzerState,
    tick: u64,
    icons: IconSet,
) {
    let submission = &analyzer.submission;

    let body = match submission.error() {
        Some(message) => {
            let [banner, rest] =
                Layout::vertical([Constraint::Length(widgets::BANNER_HEIGHT), Constraint::Min(0)])
                    .areas(body);
            frame.render_widget(widgets::ErrorBanner::new(message, icons), banner);
            rest
        }
        None => body,
    };

    let report = submission.result();
    let areas = layout::analyzer(body, report.is_some());

    frame.render_widget(
        widgets::AnalyzerForm::new(&analyzer.form, icons).loading(submission.is_loading()),
        areas.form,
    );

    if let Some(report) = report {
        frame.render_stateful_widget(
            widgets::ResultsView::new(report, icons)
                .tick(tick)
                .export_status(analyzer.export_status.as_ref()),
            areas.results,
            &mut analyzer.results_scroll,
        );
    }

    if submission.is_loading() {
        frame.render_widget(widgets::AnalyzingOverlay::new(tick), body);
    }
}
