pub mod open_graph;

pub use open_graph::{MetaTagProperties, OG_TAGS};

use serde::Serialize;
use strum::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

// ============================================================================
// Scrape results
// ============================================================================

/// Outcome of a single `debug` call.
///
/// Serializes without a tag: `Empty` is `{}`, the other two variants carry
/// their own `status` field so callers branch on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScrapeResult {
    Empty(EmptyResult),
    Success(ScrapeSuccess),
    Failure(ScrapeFailure),
}

/// Returned for a missing URL; no status, no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmptyResult {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeSuccess {
    pub status: Status,
    /// RFC 1123 style, always GMT.
    #[serde(rename = "timeScrapped")]
    pub time_scrapped: String,
    #[serde(rename = "responseCode")]
    pub response_code: u16,
    #[serde(rename = "fetchedURL")]
    pub fetched_url: String,
    pub host: String,
    #[serde(flatten)]
    pub properties: MetaTagProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeFailure {
    pub status: Status,
    pub message: String,
}

impl ScrapeResult {
    pub fn empty() -> Self {
        ScrapeResult::Empty(EmptyResult::default())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ScrapeResult::Failure(ScrapeFailure {
            status: Status::Error,
            message: message.into(),
        })
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            ScrapeResult::Empty(_) => None,
            ScrapeResult::Success(s) => Some(s.status),
            ScrapeResult::Failure(f) => Some(f.status),
        }
    }
}
