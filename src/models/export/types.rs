use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::outline::Slide;

/// `created` timestamps are local wall-clock ISO-8601 with microseconds.
pub const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
/// Used instead of [`CREATED_FORMAT`] when the microseconds are zero.
pub const CREATED_FORMAT_WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
/// Accepts any number of fractional digits, including none.
pub const CREATED_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Snapshot of an outline at export time.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub slides: Vec<Slide>,
}

// ── Wire types ────────────────────────────────────────────────────

/// `{ "presentation": { ... } }` wrapper of the JSON download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationDocument {
    pub presentation: PresentationBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationBody {
    pub topic: String,
    pub created: String,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Text,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "json" => Some(ExportFormat::Json),
            "text" | "txt" => Some(ExportFormat::Text),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    /// Suggested download name: spaces in the topic become underscores.
    pub fn file_name(self, topic: &str) -> String {
        format!("{}_presentation.{}", topic.replace(' ', "_"), self.extension())
    }
}

#[derive(Debug)]
pub enum ExportError {
    Json(serde_json::Error),
    Timestamp(chrono::ParseError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Json(e) => write!(f, "Export JSON error: {e}"),
            ExportError::Timestamp(e) => write!(f, "Export timestamp error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json(e)
    }
}

impl From<chrono::ParseError> for ExportError {
    fn from(e: chrono::ParseError) -> Self {
        ExportError::Timestamp(e)
    }
}
