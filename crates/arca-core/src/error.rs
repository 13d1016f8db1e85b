//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when the service rejects a request without a usable `detail`.
pub const ANALYSIS_FAILED: &str = "Analysis failed";

/// Message shown when the analysis service cannot be reached at all.
pub const SERVICE_UNREACHABLE: &str = "Unable to reach the analysis service";

/// Message shown when a file submission is attempted without a file.
pub const NO_FILE_SELECTED: &str = "Please select a file";

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Analysis Errors
    // ─────────────────────────────────────────────────────────────
    /// A local precondition failed; no request was sent.
    #[error("{message}")]
    Validation { message: String },

    /// The service could not be reached or the request could not be sent.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The service answered with a non-2xx status.
    #[error("Analysis service returned {status}: {}", .detail.as_deref().unwrap_or(ANALYSIS_FAILED))]
    Api { status: u16, detail: Option<String> },

    /// A 2xx response body could not be decoded as a report.
    #[error("Failed to decode analysis response: {message}")]
    Decode { message: String },

    #[error("Failed to read {}: {reason}", .path.display())]
    FileRead { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn api(status: u16, detail: Option<String>) -> Self {
        Self::Api { status, detail }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// The single string the analyzer view shows for this error.
    ///
    /// Server-provided `detail` is surfaced verbatim; everything the user
    /// cannot act on collapses to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation { message } => message.clone(),
            Error::Api {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            Error::Api { .. } | Error::Decode { .. } | Error::Json(_) => {
                ANALYSIS_FAILED.to_string()
            }
            Error::Transport { .. } => SERVICE_UNREACHABLE.to_string(),
            other => other.to_string(),
        }
    }

    /// Errors that stop the binary before any UI starts
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal { .. } | Error::ConfigInvalid { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
