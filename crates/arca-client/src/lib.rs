//! # arca-client - Analysis Service Client
//!
//! Talks to the remote ARCA analysis service over HTTP.
//!
//! Depends on [`arca_core`] for the request/report contract and error handling.
//!
//! ## Public API
//!
//! - [`AnalysisApi`] - Service contract (text analysis, file analysis, health)
//! - [`submit()`] - Route an [`arca_core::AnalysisRequest`] to the right endpoint
//! - [`HttpAnalysisClient`] - reqwest implementation
//! - [`validate_base_url()`] - Check a configured base URL
//! - [`error_detail()`] - Extract the `detail` message from an error body

pub mod api;
pub mod client;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{submit, AnalysisApi, LocalAnalysisApi};
pub use client::{error_detail, validate_base_url, HttpAnalysisClient, DEFAULT_BASE_URL};
