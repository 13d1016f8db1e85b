//! # arca-core - Core Domain Types
//!
//! Foundation crate for the ARCA console. Provides the analysis service
//! contract, error handling, presentation rules and report export.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Service Contract (`report`, `request`, `severity`)
//! - [`AnalysisReport`] - Report returned for one analyzed regulation
//! - [`RiskEntry`] - One conflict between the regulation and a policy
//! - [`Severity`] - Open severity enum (HIGH/MEDIUM/LOW/other)
//! - [`AnalysisRequest`] - Text or file submission
//! - [`HealthStatus`] - Response of the service health endpoint
//!
//! ### Presentation (`presentation`)
//! - [`sort_risks()`] - Stable severity ordering for display
//! - [`SeverityClass`] - Badge/icon bucket for a severity
//! - [`ReportSummary`], [`SeverityCounts`] - Figures for the results header
//!
//! ### Export (`export`)
//! - [`export_file_name()`], [`to_pretty_json()`], [`write_report()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with the analysis error taxonomy
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use arca_core::prelude::*;
//! ```

pub mod error;
pub mod export;
pub mod logging;
pub mod prelude;
pub mod presentation;
pub mod report;
pub mod request;
pub mod severity;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt, ANALYSIS_FAILED, NO_FILE_SELECTED, SERVICE_UNREACHABLE};
pub use export::{export_file_name, to_pretty_json, write_report};
pub use presentation::{
    display_date, severity_label, severity_rank, sort_risks, ReportSummary, SeverityClass,
    SeverityCounts,
};
pub use report::{AnalysisReport, HealthStatus, ReportMetadata, RiskEntry};
pub use request::{
    is_accepted_upload, upload_warning, word_count, AnalysisRequest, FileAnalysisRequest,
    TextAnalysisRequest, ACCEPTED_EXTENSIONS, MAX_UPLOAD_BYTES, MAX_WORDS, UPLOAD_HINT,
};
pub use severity::Severity;
