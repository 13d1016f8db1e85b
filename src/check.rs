//! `arca --check`: query `GET /health` and report in one line

use std::io::Write;

use arca_client::AnalysisApi;
use arca_core::prelude::*;

use crate::headless::Outcome;

/// Print the service status to `out`. Succeeds only for a healthy service.
pub async fn check_service<A, W>(api: &A, base_url: &str, out: &mut W) -> Result<Outcome>
where
    A: AnalysisApi + Sync,
    W: Write,
{
    let (line, outcome) = match AnalysisApi::health(api).await {
        Ok(status) if status.is_healthy() => (
            format!(
                "{base_url}: healthy (vector store loaded: {}, agents initialized: {})",
                status.vectorstore_loaded, status.agents_initialized
            ),
            Outcome::Succeeded,
        ),
        Ok(status) => (
            format!("{base_url}: {} (not ready)", status.status),
            Outcome::Failed,
        ),
        Err(e) => {
            warn!("Health check against {} failed: {}", base_url, e);
            (format!("{base_url}: {}", e.user_message()), Outcome::Failed)
        }
    };
    writeln!(out, "{line}")?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arca_client::test_utils::{FakeAnalysisApi, FakeHealth};

    async fn check(health: FakeHealth) -> (Outcome, String) {
        let api = FakeAnalysisApi::new().with_health(health);
        let mut out = Vec::new();
        let outcome = check_service(&api, "http://svc", &mut out).await.unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_healthy_service() {
        let (outcome, line) = check(FakeHealth::Healthy).await;
        assert_eq!(outcome, Outcome::Succeeded);
        assert!(line.starts_with("http://svc: healthy"));
    }

    #[tokio::test]
    async fn test_unhealthy_service() {
        let (outcome, line) = check(FakeHealth::Unhealthy).await;
        assert_eq!(outcome, Outcome::Failed);
        assert!(line.contains("unhealthy (not ready)"));
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let (outcome, line) = check(FakeHealth::Unreachable).await;
        assert_eq!(outcome, Outcome::Failed);
        assert!(line.contains("Unable to reach the analysis service"));
    }
}
