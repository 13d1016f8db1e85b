//! Submission, response and export handlers

use std::path::PathBuf;

use arca_core::{upload_warning, AnalysisReport, AnalysisRequest, HealthStatus};
use tracing::{debug, info, warn};

use super::{UpdateAction, UpdateResult};
use crate::state::{AppState, ExportStatus, InputTab, ServiceHealth};
use crate::submission::RequestId;

/// Submit the active tab's form.
///
/// Ignored while a request is in flight. Empty text sends nothing and
/// changes nothing; a missing file is reported in the error banner.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(analyzer) = state.analyzer.as_mut() else {
        return UpdateResult::none();
    };

    if analyzer.submission.is_loading() {
        debug!(
            "Submission ignored: request {:?} still in flight",
            analyzer.submission.latest_request()
        );
        return UpdateResult::none();
    }

    let request = match analyzer.form.build_request() {
        Ok(request) => request,
        Err(err) => {
            match analyzer.form.tab {
                InputTab::Text => debug!("Nothing submitted: {}", err),
                InputTab::File => analyzer.submission.reject(err.user_message()),
            }
            return UpdateResult::none();
        }
    };

    if let AnalysisRequest::File(file) = &request {
        if let Some(warning) = upload_warning(&file.path) {
            warn!("Sending {} anyway: {}", file.path.display(), warning);
        }
    }

    let id = analyzer.submission.start_request();
    analyzer.results_scroll.reset();
    analyzer.export_status = None;
    info!("Submitting {} analysis as request {}", request.kind(), id);

    UpdateResult::action(UpdateAction::Analyze { id, request })
}

pub fn handle_analysis_completed(
    state: &mut AppState,
    id: RequestId,
    report: AnalysisReport,
) -> UpdateResult {
    let Some(analyzer) = state.analyzer.as_mut() else {
        debug!("Discarding result for request {}: analyzer closed", id);
        return UpdateResult::none();
    };

    let regulation_id = report.regulation_id.clone();
    let risks = report.risks.len();
    if analyzer.submission.succeed(id, report) {
        analyzer.results_scroll.reset();
        info!(
            "Request {} succeeded: {} with {} risk(s)",
            id, regulation_id, risks
        );
    }
    UpdateResult::none()
}

pub fn handle_analysis_failed(state: &mut AppState, id: RequestId, message: String) -> UpdateResult {
    let Some(analyzer) = state.analyzer.as_mut() else {
        debug!("Discarding failure for request {}: analyzer closed", id);
        return UpdateResult::none();
    };

    if analyzer.submission.fail(id, message.clone()) {
        warn!("Request {} failed: {}", id, message);
    }
    UpdateResult::none()
}

pub fn handle_dismiss_error(state: &mut AppState) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        analyzer.submission.clear_error();
    }
    UpdateResult::none()
}

pub fn handle_new_analysis(state: &mut AppState) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        if analyzer.submission.reset() {
            analyzer.results_scroll.reset();
            analyzer.export_status = None;
        } else {
            debug!("New analysis ignored while a request is in flight");
        }
    }
    UpdateResult::none()
}

pub fn handle_export(state: &mut AppState) -> UpdateResult {
    let directory = state.settings.export.directory.clone();
    let Some(report) = state
        .analyzer
        .as_ref()
        .and_then(|analyzer| analyzer.submission.result())
    else {
        debug!("Export ignored: no report held");
        return UpdateResult::none();
    };

    UpdateResult::action(UpdateAction::Export {
        report: Box::new(report.clone()),
        directory,
    })
}

pub fn handle_export_completed(state: &mut AppState, path: PathBuf) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        analyzer.export_status = Some(ExportStatus::Saved(path));
    }
    UpdateResult::none()
}

pub fn handle_export_failed(state: &mut AppState, message: String) -> UpdateResult {
    if let Some(analyzer) = state.analyzer.as_mut() {
        analyzer.export_status = Some(ExportStatus::Failed(message));
    }
    UpdateResult::none()
}

pub fn handle_check_health(state: &mut AppState) -> UpdateResult {
    state.health = ServiceHealth::Checking;
    UpdateResult::action(UpdateAction::CheckHealth)
}

pub fn handle_health_checked(state: &mut AppState, status: HealthStatus) -> UpdateResult {
    state.health = if status.is_healthy() {
        ServiceHealth::Healthy
    } else {
        ServiceHealth::Degraded(status.status)
    };
    debug!("Service health: {:?}", state.health);
    UpdateResult::none()
}

pub fn handle_health_check_failed(state: &mut AppState, message: String) -> UpdateResult {
    debug!("Service health check failed: {}", message);
    state.health = ServiceHealth::Unreachable;
    UpdateResult::none()
}
