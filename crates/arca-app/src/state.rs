//! Application state (Model in TEA pattern)

use std::path::{Path, PathBuf};

use arca_core::prelude::*;
use arca_core::{word_count, AnalysisRequest, FileAnalysisRequest, TextAnalysisRequest};

use crate::config::Settings;
use crate::submission::Submission;

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing page: hero, pipeline, team, footer
    #[default]
    Home,
    /// Form and results
    Analyzer,
}

/// Input variant selected in the analyzer form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputTab {
    #[default]
    Text,
    File,
}

impl InputTab {
    pub fn toggle(self) -> Self {
        match self {
            InputTab::Text => InputTab::File,
            InputTab::File => InputTab::Text,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputTab::Text => "Paste Text",
            InputTab::File => "Upload File",
        }
    }
}

/// Editable fields of the analyzer form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Date,
    Text,
    FilePath,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Regulation Title",
            FormField::Date => "Date of Law",
            FormField::Text => "Regulation Text",
            FormField::FilePath => "Document Path",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Title => "e.g. Data Protection Amendment 2025 (optional)",
            FormField::Date => "YYYY-MM-DD (optional)",
            FormField::Text => "Paste the regulation text here...",
            FormField::FilePath => "Path to a .pdf, .txt or .md file",
        }
    }
}

const TEXT_FIELDS: &[FormField] = &[FormField::Title, FormField::Date, FormField::Text];
const FILE_FIELDS: &[FormField] = &[FormField::Title, FormField::Date, FormField::FilePath];

/// Raw form values, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisForm {
    pub tab: InputTab,
    pub focus: FormField,
    pub regulation_title: String,
    pub date_of_law: String,
    pub regulation_text: String,
    pub file_path: String,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self {
            tab: InputTab::Text,
            focus: FormField::Text,
            regulation_title: String::new(),
            date_of_law: String::new(),
            regulation_text: String::new(),
            file_path: String::new(),
        }
    }
}

impl AnalysisForm {
    /// Fields shown for the active tab, in focus order.
    pub fn fields(&self) -> &'static [FormField] {
        match self.tab {
            InputTab::Text => TEXT_FIELDS,
            InputTab::File => FILE_FIELDS,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.cycle(1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.cycle(self.fields().len() - 1);
    }

    fn cycle(&self, step: usize) -> FormField {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        fields[(current + step) % fields.len()]
    }

    /// Switch tabs. Focus on the body field carries over to the other body field.
    pub fn set_tab(&mut self, tab: InputTab) {
        self.tab = tab;
        if !self.fields().contains(&self.focus) {
            self.focus = match tab {
                InputTab::Text => FormField::Text,
                InputTab::File => FormField::FilePath,
            };
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.regulation_title,
            FormField::Date => &self.date_of_law,
            FormField::Text => &self.regulation_text,
            FormField::FilePath => &self.file_path,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.regulation_title,
            FormField::Date => &mut self.date_of_law,
            FormField::Text => &mut self.regulation_text,
            FormField::FilePath => &mut self.file_path,
        }
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.regulation_text)
    }

    /// Selected file, if any. Surrounding whitespace is not part of a path.
    pub fn selected_file(&self) -> Option<&Path> {
        let trimmed = self.file_path.trim();
        (!trimmed.is_empty()).then(|| Path::new(trimmed))
    }

    /// Build the request for the active tab from the current values.
    pub fn build_request(&self) -> Result<AnalysisRequest> {
        match self.tab {
            InputTab::Text => TextAnalysisRequest::build(
                &self.regulation_text,
                &self.date_of_law,
                &self.regulation_title,
            )
            .map(AnalysisRequest::Text),
            InputTab::File => FileAnalysisRequest::build(
                self.selected_file(),
                &self.date_of_law,
                &self.regulation_title,
            )
            .map(AnalysisRequest::File),
        }
    }
}

/// Outcome of the last export, shown as a status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}

/// Scroll position of the results pane.
///
/// Row counts are measured by the view on every draw, so offsets are in
/// wrapped rows and never run past the last screenful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsScroll {
    offset: u16,
    /// Wrapped rows of risk content (set during render)
    total_rows: u16,
    /// Rows visible in the pane (set during render)
    visible_rows: u16,
}

impl ResultsScroll {
    /// First visible row
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max_offset(&self) -> u16 {
        self.total_rows.saturating_sub(self.visible_rows)
    }

    /// Move by `delta` rows, clamped to the measured content
    pub fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.offset) + delta;
        self.offset = target.clamp(0, i32::from(self.max_offset())) as u16;
    }

    /// Rows moved by PageUp/PageDown
    pub fn page(&self) -> i32 {
        i32::from(self.visible_rows.saturating_sub(2).max(1))
    }

    /// Record the measured content and viewport, pulling the offset back in range
    pub fn update_content_size(&mut self, total_rows: u16, visible_rows: u16) {
        self.total_rows = total_rows;
        self.visible_rows = visible_rows;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Everything the analyzer page owns. Dropped when leaving the page.
#[derive(Debug, Default)]
pub struct AnalyzerState {
    pub form: AnalysisForm,
    pub submission: Submission,
    pub results_scroll: ResultsScroll,
    pub export_status: Option<ExportStatus>,
}

impl AnalyzerState {
    pub fn new(submission: Submission) -> Self {
        Self {
            submission,
            ..Default::default()
        }
    }
}

/// Reachability of the analysis service, for the header pill
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceHealth {
    #[default]
    Unknown,
    Checking,
    Healthy,
    /// Reachable but not ready (e.g. vector store still loading)
    Degraded(String),
    Unreachable,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub route: Route,
    /// Present only while `route == Route::Analyzer`
    pub analyzer: Option<AnalyzerState>,
    pub health: ServiceHealth,
    pub settings: Settings,
    /// Animation frame counter
    pub tick: u64,
    /// Last request id issued by any analyzer, so ids never repeat
    last_request_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            route: Route::Home,
            analyzer: None,
            health: ServiceHealth::Unknown,
            settings,
            tick: 0,
            last_request_seq: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Enter the analyzer with a fresh form and no result.
    pub fn open_analyzer(&mut self) {
        self.retire_analyzer();
        self.analyzer = Some(AnalyzerState::new(Submission::starting_after(
            self.last_request_seq,
        )));
        self.route = Route::Analyzer;
    }

    /// Back to the landing page. Any held or pending analysis is dropped.
    pub fn go_home(&mut self) {
        self.retire_analyzer();
        self.route = Route::Home;
    }

    fn retire_analyzer(&mut self) {
        if let Some(analyzer) = self.analyzer.take() {
            if analyzer.submission.is_loading() {
                debug!("Leaving analyzer with a request in flight; its response will be discarded");
            }
            self.last_request_seq = analyzer.submission.last_issued();
        }
    }
}
