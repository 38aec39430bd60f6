use std::fmt::Write;

use axum::extract::{Query, State};
use axum::response::Html;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::handlers::debug::DebugQuery;
use crate::models::{ScrapeFailure, ScrapeResult, ScrapeSuccess};
use crate::state::AppState;

/// GET /?q=<encoded-url>
///
/// The search form, followed by the scrape result when a URL was given.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<DebugQuery>,
) -> Html<String> {
    let url = params.url();
    let data = state.debugger.debug(url).await;
    Html(render_page(url, &data))
}

// ── Rendering ──────────────────────────────────────────────────────────────

pub fn render_page(url: &str, data: &ScrapeResult) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<form method="get" action="/">
<input type="url" name="q" placeholder="https://example.com" value="{}">
<button type="submit">Debug</button>
</form>
"#,
        encode_double_quoted_attribute(url)
    );

    match data {
        ScrapeResult::Empty(_) => {}
        ScrapeResult::Success(success) => render_success(&mut body, success),
        ScrapeResult::Failure(failure) => render_failure(&mut body, failure),
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sharing Debugger</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
<h1>Sharing Debugger</h1>
{body}</body>
</html>
"#
    )
}

fn render_success(out: &mut String, success: &ScrapeSuccess) {
    let _ = writeln!(out, r#"<section class="result {}">"#, success.status.as_ref());
    out.push_str("<table class=\"provenance\">\n");
    row(out, "Time Scraped", &success.time_scrapped);
    row(out, "Response Code", &success.response_code.to_string());
    row(out, "Fetched URL", &success.fetched_url);
    row(out, "Host", &success.host);
    if let Some(canonical) = &success.properties.canonical_url {
        row(out, "Canonical URL", canonical);
    }
    out.push_str("</table>\n");

    out.push_str("<h2>Open Graph</h2>\n");
    if success.properties.open_graph.is_empty() {
        out.push_str("<p class=\"empty\">No Open Graph tags found.</p>\n");
    } else {
        out.push_str("<table class=\"open-graph\">\n");
        for (tag, value) in success.properties.ordered_tags() {
            row(out, tag, value);
        }
        out.push_str("</table>\n");
    }
    out.push_str("</section>\n");
}

fn render_failure(out: &mut String, failure: &ScrapeFailure) {
    let _ = writeln!(
        out,
        r#"<section class="result {}"><p>{}</p></section>"#,
        failure.status.as_ref(),
        encode_text(&failure.message)
    );
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "<tr><th>{}</th><td>{}</td></tr>",
        encode_text(label),
        encode_text(value)
    );
}
