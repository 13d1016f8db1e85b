//! Message handlers for the analyzer console
//!
//! - `update`: `update()` and the per-message dispatch
//! - `keys`: Key event handlers per route
//! - `navigation`: Route changes, form editing and scrolling
//! - `submission`: Submit, response and export handlers

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod submission;
pub(crate) mod update;


use std::path::PathBuf;

use arca_core::{AnalysisReport, AnalysisRequest};

use crate::message::Message;
use crate::submission::RequestId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send an analysis request; the answer comes back tagged with `id`
    Analyze {
        id: RequestId,
        request: AnalysisRequest,
    },

    /// Write a report to `directory`
    Export {
        report: Box<AnalysisReport>,
        directory: PathBuf,
    },

    /// Query the service health endpoint
    CheckHealth,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
