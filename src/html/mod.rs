//! Plain-text helpers for pulling metadata out of a page's `<head>`.
//!
//! Nothing here builds a DOM. Tags are located with literal splits so that
//! odd markup produces the same results a simple linear scan would.

pub mod entities;
pub mod property_map;
pub mod scanner;

pub use entities::decode_entities;
pub use property_map::PropertyMap;
pub use scanner::{clean_content, find_html_value};

use once_cell::sync::Lazy;
use regex::Regex;

static HEAD_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<head(?:\s+[^>]*?)?>").expect("valid <head> pattern")
});

const HEAD_CLOSE: &str = "</head>";

/// Return the markup between the first opening `<head ...>` tag and the
/// following `</head>`.
///
/// The opening tag is matched case-insensitively; the closing tag must be
/// the literal lowercase `</head>`. When the closing tag is missing the rest
/// of the segment is returned. Returns an empty string if there is no head.
pub fn extract_head(html: &str) -> &str {
    let mut segments = HEAD_OPEN.split(html);
    segments.next();

    match segments.next() {
        Some(segment) if !segment.is_empty() => {
            segment.split(HEAD_CLOSE).next().unwrap_or_default()
        }
        _ => "",
    }
}
