//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::PathBuf;
use std::sync::Arc;

use arca_client::AnalysisApi;
use arca_core::{write_report, AnalysisReport, AnalysisRequest};
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::message::Message;
use crate::submission::RequestId;
use crate::UpdateAction;

/// Execute an action by spawning a background task
///
/// Every task reports back through `msg_tx`; none of them touch state.
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: AnalysisApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::Analyze { id, request } => {
            tokio::spawn(async move {
                run_analysis(id, request, msg_tx, api).await;
            });
        }

        UpdateAction::Export { report, directory } => {
            tokio::spawn(async move {
                run_export(report, directory, msg_tx).await;
            });
        }

        UpdateAction::CheckHealth => {
            tokio::spawn(async move {
                let msg = match api.health().await {
                    Ok(status) => Message::HealthChecked(status),
                    Err(e) => Message::HealthCheckFailed {
                        message: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

async fn run_analysis<A>(
    id: RequestId,
    request: AnalysisRequest,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
) where
    A: AnalysisApi + Sync,
{
    let msg = match arca_client::submit(api.as_ref(), &request).await {
        Ok(report) => Message::AnalysisCompleted {
            id,
            report: Box::new(report),
        },
        Err(e) => {
            warn!("Analysis request {} failed: {}", id, e);
            Message::AnalysisFailed {
                id,
                message: e.user_message(),
            }
        }
    };

    if msg_tx.send(msg).await.is_err() {
        warn!("Analysis result for request {} dropped: channel closed", id);
    }
}

async fn run_export(report: Box<AnalysisReport>, directory: PathBuf, msg_tx: mpsc::Sender<Message>) {
    let written = tokio::task::spawn_blocking(move || write_report(&report, &directory)).await;

    let msg = match written {
        Ok(Ok(path)) => Message::ExportCompleted { path },
        Ok(Err(e)) => {
            warn!("Export failed: {}", e);
            Message::ExportFailed {
                message: e.to_string(),
            }
        }
        Err(e) => {
            error!("Export task panicked: {}", e);
            Message::ExportFailed {
                message: "Export failed".to_string(),
            }
        }
    };

    let _ = msg_tx.send(msg).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use arca_client::test_utils::{test_report, test_risk, FakeAnalysisApi, FakeHealth};
    use arca_core::{Error, TextAnalysisRequest};
    use std::time::Duration;
    use tempfile::tempdir;

    fn text_request() -> AnalysisRequest {
        AnalysisRequest::Text(TextAnalysisRequest::build("Article 1", "", "").unwrap())
    }

    async fn next(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for message")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_analyze_success_reports_completion() {
        let api = Arc::new(FakeAnalysisApi::new().with_report(test_report(
            "R1",
            vec![test_risk("a", Some("HIGH"))],
        )));
        let (tx, mut rx) = mpsc::channel(8);
        let mut submission = crate::submission::Submission::new();
        let id = submission.start_request();

        handle_action(
            UpdateAction::Analyze {
                id,
                request: text_request(),
            },
            tx,
            api.clone(),
        );

        match next(&mut rx).await {
            Message::AnalysisCompleted { id: got, report } => {
                assert_eq!(got, id);
                assert_eq!(report.regulation_id, "R1");
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_failure_carries_user_message() {
        let api = Arc::new(
            FakeAnalysisApi::new().with_error(Error::api(400, Some("bad title".into()))),
        );
        let (tx, mut rx) = mpsc::channel(8);
        let id = crate::submission::Submission::new().start_request();

        handle_action(
            UpdateAction::Analyze {
                id,
                request: text_request(),
            },
            tx,
            api,
        );

        match next(&mut rx).await {
            Message::AnalysisFailed { message, .. } => assert_eq!(message, "bad title"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_message() {
        let api = Arc::new(FakeAnalysisApi::new().with_error(Error::transport("refused")));
        let (tx, mut rx) = mpsc::channel(8);
        let id = crate::submission::Submission::new().start_request();

        handle_action(
            UpdateAction::Analyze {
                id,
                request: text_request(),
            },
            tx,
            api,
        );

        match next(&mut rx).await {
            Message::AnalysisFailed { message, .. } => {
                assert_eq!(message, "Unable to reach the analysis service")
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let temp = tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::Export {
                report: Box::new(test_report("R7", vec![])),
                directory: temp.path().to_path_buf(),
            },
            tx,
            Arc::new(FakeAnalysisApi::new()),
        );

        match next(&mut rx).await {
            Message::ExportCompleted { path } => {
                assert_eq!(path, temp.path().join("arca_report_R7.json"));
                assert!(path.exists());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_export_failure_reported() {
        let temp = tempdir().unwrap();
        // A file where the directory should be
        let blocker = temp.path().join("reports");
        std::fs::write(&blocker, "not a dir").unwrap();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::Export {
                report: Box::new(test_report("R7", vec![])),
                directory: blocker,
            },
            tx,
            Arc::new(FakeAnalysisApi::new()),
        );

        assert!(matches!(next(&mut rx).await, Message::ExportFailed { .. }));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (tx, mut rx) = mpsc::channel(8);
        handle_action(
            UpdateAction::CheckHealth,
            tx.clone(),
            Arc::new(FakeAnalysisApi::new()),
        );
        assert!(matches!(next(&mut rx).await, Message::HealthChecked(_)));

        handle_action(
            UpdateAction::CheckHealth,
            tx,
            Arc::new(FakeAnalysisApi::new().with_health(FakeHealth::Unreachable)),
        );
        assert!(matches!(
            next(&mut rx).await,
            Message::HealthCheckFailed { .. }
        ));
    }
}
