//! Full-frame render tests over `view()`

use super::view;
use crate::test_utils::{analyzer_state, state_with_report, TestTerminal};
use arca_app::handler::update;
use arca_app::{AppState, ExportStatus, InputTab, Message, ServiceHealth};
use arca_client::test_utils::{test_report, test_risk};
use std::path::PathBuf;

fn draw(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(100, 40);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_home_is_default_page() {
    let mut state = AppState::new();
    let term = draw(&mut state);

    assert!(term.buffer_contains("Regulatory Compliance Reimagined"));
    assert!(term.buffer_contains("analyze a regulation"));
    assert!(!term.buffer_contains("Regulation Text"));
}

#[test]
fn test_analyzer_page_shows_form() {
    let mut state = analyzer_state();
    let term = draw(&mut state);

    assert!(term.buffer_contains("Analyzer"));
    assert!(term.buffer_contains("Paste Text"));
    assert!(term.buffer_contains("0 / 2000 words"));
    assert!(!term.buffer_contains("Total Risks"));
}

#[test]
fn test_header_pill_follows_health() {
    let mut state = AppState::new();
    state.health = ServiceHealth::Healthy;
    assert!(draw(&mut state).buffer_contains("service online"));

    state.health = ServiceHealth::Unreachable;
    assert!(draw(&mut state).buffer_contains("service offline"));
}

#[test]
fn test_results_in_severity_order() {
    let mut state = state_with_report(test_report(
        "R1",
        vec![test_risk("POL-LOW", Some("LOW")), test_risk("POL-HIGH", Some("HIGH"))],
    ));
    let term = draw(&mut state);

    let high = term.find_line("POL-HIGH").expect("high risk shown");
    let low = term.find_line("POL-LOW").expect("low risk shown");
    assert!(high < low);
    assert!(term.buffer_contains("HIGH SEVERITY"));
    assert!(term.buffer_contains("Total Risks"));
}

#[test]
fn test_error_banner_rendered() {
    let mut state = analyzer_state();
    update(&mut state, Message::SelectTab(InputTab::File));
    update(&mut state, Message::Submit);
    let term = draw(&mut state);

    assert!(term.buffer_contains("Please select a file"));
    assert!(term.buffer_contains("Esc dismiss"));
}

#[test]
fn test_loading_overlay() {
    let mut state = analyzer_state();
    for c in "Article 1".chars() {
        update(&mut state, Message::InputChar(c));
    }
    update(&mut state, Message::Submit);
    let term = draw(&mut state);

    assert!(term.buffer_contains("Analyzing regulation..."));
    assert!(term.buffer_contains("Compliance Auditor"));
}

#[test]
fn test_export_status_shown() {
    let mut state = state_with_report(test_report("R9", vec![]));
    state.analyzer.as_mut().unwrap().export_status =
        Some(ExportStatus::Saved(PathBuf::from("arca_report_R9.json")));
    let term = draw(&mut state);

    assert!(term.buffer_contains("Report saved to arca_report_R9.json"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = state_with_report(test_report("R", vec![test_risk("p", Some("HIGH"))]));
    let mut term = TestTerminal::with_size(20, 6);
    term.draw_with(|frame| view(frame, &mut state));

    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &mut AppState::new()));
}

#[test]
fn test_scroll_bound_measured_by_view() {
    let risks = (0..6)
        .map(|i| test_risk(&format!("POL-{i}"), Some("MEDIUM")))
        .collect();
    let mut state = state_with_report(test_report("R7", risks));
    draw(&mut state);

    let max = state.analyzer.as_ref().unwrap().results_scroll.max_offset();
    assert!(max > 0);

    for _ in 0..(max + 30) {
        update(&mut state, Message::ScrollDown);
    }
    let term = draw(&mut state);
    assert_eq!(state.analyzer.as_ref().unwrap().results_scroll.offset(), max);
    assert!(term.buffer_contains("POL-5"));
}
