//! ARCA console library
//!
//! Wires the workspace crates together for the `arca` binary: the TUI from
//! arca-tui, the headless NDJSON runner and the `--check` health check.

pub mod check;
pub mod headless;

// Re-export main entry points
pub use arca_tui::run as run_tui;
pub use check::check_service;
pub use headless::{run_headless, HeadlessJob, JobInput, Outcome};
