use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::ScrapeResult;
use crate::state::AppState;

// ── Query params ───────────────────────────────────────────────────────────

/// `?q=<url>`; a missing parameter is treated like an empty one.
#[derive(Debug, Default, Deserialize)]
pub struct DebugQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl DebugQuery {
    pub fn url(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

// ── Handler ────────────────────────────────────────────────────────────────

/// GET /api/debug?q=<encoded-url>
///
/// Always 200; failures are reported inside the body via `status`.
pub async fn debug_json(
    State(state): State<AppState>,
    Query(params): Query<DebugQuery>,
) -> Json<ScrapeResult> {
    Json(state.debugger.debug(params.url()).await)
}
