//! Test utilities for the analysis client
//!
//! [`FakeAnalysisApi`] replays scripted outcomes in order and records every
//! request it receives.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use arca_core::prelude::*;
use arca_core::{
    AnalysisReport, AnalysisRequest, FileAnalysisRequest, HealthStatus, ReportMetadata, RiskEntry,
    Severity, TextAnalysisRequest,
};

use crate::api::AnalysisApi;

/// How the fake answers `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeHealth {
    Healthy,
    Unhealthy,
    Unreachable,
}

/// Scripted [`AnalysisApi`].
///
/// Each analysis call pops the next scripted outcome. When the script is
/// exhausted the call fails as if the service were down.
pub struct FakeAnalysisApi {
    outcomes: Mutex<VecDeque<Result<AnalysisReport>>>,
    calls: Mutex<Vec<AnalysisRequest>>,
    health: FakeHealth,
    delay: Option<Duration>,
}

impl Default for FakeAnalysisApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeAnalysisApi {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            health: FakeHealth::Healthy,
            delay: None,
        }
    }

    /// Answer the next analysis with `report`.
    pub fn with_report(self, report: AnalysisReport) -> Self {
        self.push(Ok(report));
        self
    }

    /// Fail the next analysis with `err`.
    pub fn with_error(self, err: Error) -> Self {
        self.push(Err(err));
        self
    }

    pub fn with_health(mut self, health: FakeHealth) -> Self {
        self.health = health;
        self
    }

    /// Delay every analysis answer, to observe the in-flight state.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push(&self, outcome: Result<AnalysisReport>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<AnalysisRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    async fn answer(&self, request: AnalysisRequest) -> Result<AnalysisReport> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front())
            .unwrap_or_else(|| Err(Error::transport("no scripted response")))
    }
}

impl AnalysisApi for FakeAnalysisApi {
    async fn analyze_text(&self, request: &TextAnalysisRequest) -> Result<AnalysisReport> {
        self.answer(AnalysisRequest::Text(request.clone())).await
    }

    async fn analyze_file(&self, request: &FileAnalysisRequest) -> Result<AnalysisReport> {
        self.answer(AnalysisRequest::File(request.clone())).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        match self.health {
            FakeHealth::Unreachable => Err(Error::transport("connection refused")),
            health => Ok(HealthStatus {
                status: if health == FakeHealth::Healthy {
                    "healthy".to_string()
                } else {
                    "unhealthy".to_string()
                },
                timestamp: "2025-06-02T10:00:00".to_string(),
                vectorstore_loaded: health == FakeHealth::Healthy,
                agents_initialized: health == FakeHealth::Healthy,
            }),
        }
    }
}

/// Creates a test risk.
///
/// # Arguments
/// * `policy_id` - Policy identifier
/// * `severity` - Raw severity label, `None` for a missing field
pub fn test_risk(policy_id: &str, severity: Option<&str>) -> RiskEntry {
    RiskEntry {
        policy_id: policy_id.to_string(),
        severity: severity.map(Severity::parse),
        divergence_summary: format!("{policy_id} conflicts with the new rule"),
        conflicting_policy_excerpt: "Customer data is retained for 90 days.".to_string(),
        new_rule_excerpt: "Customer data must be deleted within 30 days.".to_string(),
        recommendation: "Reduce the retention period to 30 days.".to_string(),
    }
}

/// Creates a test report holding `risks` in the given order.
pub fn test_report(regulation_id: &str, risks: Vec<RiskEntry>) -> AnalysisReport {
    AnalysisReport {
        regulation_id: regulation_id.to_string(),
        regulation_title: "T".to_string(),
        date_of_law: "2025-01-01".to_string(),
        date_processed: "2025-01-02".to_string(),
        total_risks_flagged: risks.len() as u64,
        risks,
        metadata: Some(ReportMetadata {
            total_policies_analyzed: Some(5),
            extra: Default::default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::submit;

    #[tokio::test]
    async fn test_fake_replays_in_order() {
        let api = FakeAnalysisApi::new()
            .with_report(test_report("R1", vec![]))
            .with_error(Error::api(500, Some("boom".into())));
        let request = TextAnalysisRequest::build("Article 1", "", "").unwrap();

        let first = api.analyze_text(&request).await.unwrap();
        assert_eq!(first.regulation_id, "R1");

        let second = api.analyze_text(&request).await.unwrap_err();
        assert_eq!(second.user_message(), "boom");

        let third = api.analyze_text(&request).await.unwrap_err();
        assert!(matches!(third, Error::Transport { .. }));
        assert_eq!(api.call_count(), 3);
    }

    #[tokio::test]
    async fn test_submit_dispatches_by_variant() {
        let api = FakeAnalysisApi::new()
            .with_report(test_report("T", vec![]))
            .with_report(test_report("F", vec![]));

        let text = AnalysisRequest::Text(TextAnalysisRequest::build("x", "", "").unwrap());
        let file = AnalysisRequest::File(
            FileAnalysisRequest::build(Some(std::path::Path::new("law.pdf")), "", "").unwrap(),
        );

        submit(&api, &text).await.unwrap();
        submit(&api, &file).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls[0].kind(), "text");
        assert_eq!(calls[1].kind(), "file");
    }

    #[tokio::test]
    async fn test_fake_health() {
        assert!(FakeAnalysisApi::new().health().await.unwrap().is_healthy());

        let unhealthy = FakeAnalysisApi::new().with_health(FakeHealth::Unhealthy);
        assert!(!unhealthy.health().await.unwrap().is_healthy());

        let down = FakeAnalysisApi::new().with_health(FakeHealth::Unreachable);
        assert!(down.health().await.is_err());
    }

    #[test]
    fn test_report_helper() {
        let report = test_report("R1", vec![test_risk("a", Some("HIGH")), test_risk("b", None)]);
        assert_eq!(report.total_risks_flagged, 2);
        assert_eq!(report.risks[1].severity, None);
    }
}
