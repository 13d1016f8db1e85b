//! reqwest-backed [`AnalysisApi`] implementation

use std::time::Duration;

use arca_core::prelude::*;
use arca_core::{AnalysisReport, FileAnalysisRequest, HealthStatus, TextAnalysisRequest};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::api::AnalysisApi;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const TEXT_ENDPOINT: &str = "analyze_regulation";
const FILE_ENDPOINT: &str = "analyze_regulation_file";
const HEALTH_ENDPOINT: &str = "health";

/// HTTP client for the ARCA analysis service.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8000`).
    ///
    /// `timeout` of `None` leaves requests unbounded; analyses routinely take
    /// minutes.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = validate_base_url(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Turn a response into a report, mapping status and body failures.
    async fn read_report(resp: reqwest::Response) -> Result<AnalysisReport> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "analysis request rejected");
            return Err(Error::api(status.as_u16(), error_detail(&body)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        let report = AnalysisReport::from_json(&body)?;
        info!(
            regulation_id = %report.regulation_id,
            risks = report.risks.len(),
            "analysis complete"
        );
        Ok(report)
    }
}

impl AnalysisApi for HttpAnalysisClient {
    async fn analyze_text(&self, request: &TextAnalysisRequest) -> Result<AnalysisReport> {
        let url = self.url(TEXT_ENDPOINT);
        info!(url = %url, words = arca_core::word_count(&request.new_regulation_text), "submitting regulation text");

        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_report(resp).await
    }

    async fn analyze_file(&self, request: &FileAnalysisRequest) -> Result<AnalysisReport> {
        let bytes = tokio::fs::read(&request.path)
            .await
            .map_err(|e| Error::file_read(&request.path, e.to_string()))?;

        let url = self.url(FILE_ENDPOINT);
        info!(url = %url, file = %request.path.display(), bytes = bytes.len(), "uploading regulation file");

        let part = Part::bytes(bytes)
            .file_name(request.file_name())
            .mime_str(request.mime_type())
            .map_err(|e| Error::transport(e.to_string()))?;

        let mut form = Form::new().part("file", part);
        if let Some(date) = &request.date_of_law {
            form = form.text("date_of_law", date.clone());
        }
        if let Some(title) = &request.regulation_title {
            form = form.text("regulation_title", title.clone());
        }
        form = form.text("summarize", request.summarize.to_string());

        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_report(resp).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let url = self.url(HEALTH_ENDPOINT);
        debug!(url = %url, "checking service health");

        let resp = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), error_detail(&body)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| Error::decode(e.to_string()))
    }
}

/// Check the base URL is absolute http(s) and drop any trailing slash.
pub fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| Error::config_invalid(format!("invalid API URL '{trimmed}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(Error::config_invalid(format!(
            "unsupported API URL scheme '{other}' (expected http or https)"
        ))),
    }
}

/// Pull a user-facing message out of an error body.
///
/// FastAPI sends `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "..."}, ...]}` for request validation failures.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    warn!("analysis service unreachable: {}", err);
    Error::transport(err.to_string())
}
