use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a page from being scraped.
///
/// None of these escape `SharingDebugger::debug`; they are folded into a
/// failure result carrying the `Display` text.
#[derive(Error, Debug)]
pub enum DebugError {
    #[error("{0}")]
    UrlParse(#[from] url::ParseError),

    #[error("{status}: {status_text}")]
    Fetch { status: u16, status_text: String },

    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

impl DebugError {
    /// Non-success HTTP response, reported with the server's own reason
    /// phrase.
    pub fn from_response(response: &reqwest::Response) -> Self {
        Self::fetch(response.status(), response.extensions().get::<ReasonPhrase>())
    }

    /// hyper only attaches a `ReasonPhrase` when the server's phrase differs
    /// from the canonical one, so the canonical phrase fills in otherwise.
    pub fn fetch(status: StatusCode, reason: Option<&ReasonPhrase>) -> Self {
        let status_text = match reason {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
            None => status.canonical_reason().unwrap_or_default().to_string(),
        };

        DebugError::Fetch {
            status: status.as_u16(),
            status_text,
        }
    }
}

pub type DebugResult<T> = Result<T, DebugError>;
