//! Analysis service contract
//!
//! The app layer only talks to the service through [`AnalysisApi`], so the
//! HTTP client can be swapped for a scripted fake in tests.

use arca_core::prelude::*;
use arca_core::{AnalysisReport, AnalysisRequest, FileAnalysisRequest, HealthStatus, TextAnalysisRequest};

/// Remote regulation analysis
#[trait_variant::make(AnalysisApi: Send)]
pub trait LocalAnalysisApi {
    /// `POST /analyze_regulation`
    async fn analyze_text(&self, request: &TextAnalysisRequest) -> Result<AnalysisReport>;

    /// `POST /analyze_regulation_file`
    async fn analyze_file(&self, request: &FileAnalysisRequest) -> Result<AnalysisReport>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus>;
}

/// Dispatch a request to the matching endpoint.
pub async fn submit<A>(api: &A, request: &AnalysisRequest) -> Result<AnalysisReport>
where
    A: AnalysisApi + Sync,
{
    debug!("Submitting {} analysis request", request.kind());
    match request {
        AnalysisRequest::Text(req) => AnalysisApi::analyze_text(api, req).await,
        AnalysisRequest::File(req) => AnalysisApi::analyze_file(api, req).await,
    }
}
