//! Submission lifecycle for the analyzer
//!
//! [`Submission`] owns the loading/result/error triplet. Its fields are
//! private; the transitions below are the only writers. At most one of
//! `result` and `error` is ever set.

use std::fmt;

use arca_core::AnalysisReport;
use tracing::debug;

/// Sequence number issued per submission.
///
/// Ids only ever increase, so a response can be matched against the latest
/// issued request and discarded when it is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct Submission {
    loading: bool,
    result: Option<AnalysisReport>,
    error: Option<String>,
    latest_request: Option<RequestId>,
    next_request: u64,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue an id sequence from an earlier analyzer, so its late
    /// responses can never match a request issued here.
    pub fn starting_after(last_issued: u64) -> Self {
        Self {
            next_request: last_issued,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&AnalysisReport> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    /// Highest id issued so far (0 if none).
    pub fn last_issued(&self) -> u64 {
        self.next_request
    }

    /// Begin a request: loading, nothing shown, fresh id.
    pub fn start_request(&mut self) -> RequestId {
        self.next_request += 1;
        let id = RequestId(self.next_request);
        self.loading = true;
        self.result = None;
        self.error = None;
        self.latest_request = Some(id);
        id
    }

    fn is_pending(&self, id: RequestId) -> bool {
        self.loading && self.latest_request == Some(id)
    }

    /// Apply a successful response. Returns false if `id` is stale.
    pub fn succeed(&mut self, id: RequestId, report: AnalysisReport) -> bool {
        if !self.is_pending(id) {
            debug!("Discarding stale analysis result for request {}", id);
            return false;
        }
        self.loading = false;
        self.result = Some(report);
        self.error = None;
        true
    }

    /// Apply a failed response. Returns false if `id` is stale.
    pub fn fail(&mut self, id: RequestId, message: impl Into<String>) -> bool {
        if !self.is_pending(id) {
            debug!("Discarding stale analysis failure for request {}", id);
            return false;
        }
        self.loading = false;
        self.result = None;
        self.error = Some(message.into());
        true
    }

    /// Local validation failure; no request was issued.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.result = None;
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop the held result and error. Ignored while a request is in flight.
    pub fn reset(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.result = None;
        self.error = None;
        true
    }
}
