use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::error::{DebugError, DebugResult};
use crate::html::{extract_head, find_html_value};
use crate::models::{MetaTagProperties, ScrapeResult, ScrapeSuccess, Status, OG_TAGS};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
pub const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.5";

const GMT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

// ── Metadata extraction ────────────────────────────────────────────────────

/// Pull the canonical URL and Open Graph tags out of a full HTML document.
pub fn get_meta_tag_properties(html: &str) -> MetaTagProperties {
    let page_head = extract_head(html);

    let open_graph = find_html_value(page_head, "meta", "content", &OG_TAGS);
    let mut canonical = find_html_value(page_head, "link", "href", &["canonical"]);

    MetaTagProperties {
        canonical_url: canonical.remove("canonical"),
        open_graph,
    }
}

/// `host[:port]` as a browser would report it; the port only appears when
/// it differs from the scheme default.
pub fn url_host(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

// ── Service ────────────────────────────────────────────────────────────────

/// Fetches pages and reports their sharing metadata.
///
/// Cloning is cheap; the inner HTTP client shares its connection pool.
#[derive(Clone, Debug)]
pub struct SharingDebugger {
    client: ReqwestClient,
}

impl SharingDebugger {
    pub fn new(fetch_timeout: Duration) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));

        let client = ReqwestClient::builder()
            .timeout(fetch_timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Build around an existing client, keeping its headers and timeouts.
    pub fn with_client(client: ReqwestClient) -> Self {
        Self { client }
    }

    /// Scrape `url` and describe the outcome.
    ///
    /// An empty `url` returns [`ScrapeResult::Empty`] without touching the
    /// network. Every failure becomes a [`ScrapeResult::Failure`] and is
    /// logged; nothing is retried.
    pub async fn debug(&self, url: &str) -> ScrapeResult {
        if url.is_empty() {
            return ScrapeResult::empty();
        }

        match self.scrape(url).await {
            Ok(success) => {
                tracing::info!(
                    url = %url,
                    status = success.response_code,
                    tags = success.properties.open_graph.len(),
                    "Scraped page"
                );
                ScrapeResult::Success(success)
            }
            Err(e) => {
                let message = format!("Can't scrap this site, reason: \"{e}\".");
                tracing::warn!(error = ?e, url = %url, "{message}");
                ScrapeResult::failure(message)
            }
        }
    }

    async fn scrape(&self, url: &str) -> DebugResult<ScrapeSuccess> {
        let parsed = Url::parse(url)?;

        let response = self.client.get(parsed.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DebugError::from_response(&response));
        }

        let html: String = response.text().await?;
        let properties = get_meta_tag_properties(&html);

        Ok(ScrapeSuccess {
            status: Status::Success,
            time_scrapped: Utc::now().format(GMT_FORMAT).to_string(),
            response_code: status.as_u16(),
            fetched_url: url.to_string(),
            host: url_host(&parsed),
            properties,
        })
    }
}

// ── Unit tests ─────────────────────────────────────────────────────────────
