//! Outbound analysis requests
//!
//! Requests are built fresh from form values on every submission. Builders
//! enforce the local preconditions and return [`Error::Validation`] without
//! touching the network.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result, NO_FILE_SELECTED};

/// Conventional upper bound on regulation length. Shown, not enforced.
pub const MAX_WORDS: usize = 2000;

/// Conventional upper bound on uploaded documents. Shown, not enforced.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions the service documents as supported.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md"];

/// Hint shown under the document path input
pub const UPLOAD_HINT: &str = "PDF, TXT or MD (max 10MB)";

/// JSON body of `POST /analyze_regulation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextAnalysisRequest {
    pub new_regulation_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_law: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulation_title: Option<String>,
}

impl TextAnalysisRequest {
    /// Build from raw form values.
    ///
    /// The regulation text is sent as typed; optional fields are dropped when
    /// blank and trimmed otherwise.
    pub fn build(text: &str, date_of_law: &str, regulation_title: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::validation("Regulation text is required"));
        }

        Ok(Self {
            new_regulation_text: text.to_string(),
            date_of_law: optional_field(date_of_law),
            regulation_title: optional_field(regulation_title),
        })
    }
}

/// Multipart body of `POST /analyze_regulation_file`.
///
/// Only the path is held; the bytes are read when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAnalysisRequest {
    pub path: PathBuf,
    pub date_of_law: Option<String>,
    pub regulation_title: Option<String>,
    pub summarize: bool,
}

impl FileAnalysisRequest {
    /// Build from raw form values. A missing path is the one hard failure.
    pub fn build(path: Option<&Path>, date_of_law: &str, regulation_title: &str) -> Result<Self> {
        let path = match path {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => return Err(Error::validation(NO_FILE_SELECTED)),
        };

        Ok(Self {
            path,
            date_of_law: optional_field(date_of_law),
            regulation_title: optional_field(regulation_title),
            summarize: true,
        })
    }

    /// File name sent in the multipart `file` part.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string())
    }

    /// MIME type for the `file` part, from the extension.
    pub fn mime_type(&self) -> &'static str {
        match extension_of(&self.path).as_deref() {
            Some("pdf") => "application/pdf",
            Some("txt") => "text/plain",
            Some("md") => "text/markdown",
            _ => "application/octet-stream",
        }
    }
}

/// Whether the extension is one the service documents as supported
pub fn is_accepted_upload(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Non-blocking warning for a document the service will likely refuse.
///
/// Unreadable or missing files get no warning here; the read error is
/// reported when the request is sent.
pub fn upload_warning(path: &Path) -> Option<String> {
    if !is_accepted_upload(path) {
        return Some(format!(
            "Unsupported file type; expected {}",
            ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    let size = std::fs::metadata(path).ok()?.len();
    (size > MAX_UPLOAD_BYTES).then(|| {
        format!(
            "File is {:.1}MB; the limit is 10MB",
            size as f64 / (1024.0 * 1024.0)
        )
    })
}

/// One submission, either variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    Text(TextAnalysisRequest),
    File(FileAnalysisRequest),
}

impl AnalysisRequest {
    /// Short label for logs and headless output.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisRequest::Text(_) => "text",
            AnalysisRequest::File(_) => "file",
        }
    }
}

/// Count whitespace-separated words, the way the form's counter does.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}
