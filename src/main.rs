use axum::{routing::get, Router};
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sharing_debugger::config::Config;
use sharing_debugger::debugger::SharingDebugger;
use sharing_debugger::handlers;
use sharing_debugger::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "sharing_debugger=info,tower_http=info"
            .parse()
            .unwrap()
    });

    let config = Config::from_env();

    if config.is_dev {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    }

    info!("🚀 Sharing Debugger starting...");
    info!(
        "📝 Configuration loaded (fetch timeout {:?})",
        config.fetch_timeout
    );

    // CORS: permissive in dev, restrictive in production.
    let cors = if config.is_dev {
        info!("🔓 CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        tracing::warn!("🔒 CORS: restrictive (production mode). Cross-origin requests will be denied.");
        CorsLayer::new()
    };

    let debugger =
        SharingDebugger::new(config.fetch_timeout).expect("Failed to build HTTP client");
    let app_state = AppState { debugger };

    info!("📂 Static directory: {}", config.static_dir.display());

    // Prometheus metrics layer
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = Router::new()
        // Health check + metrics
        .route("/health", get(handlers::health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
        // Result page and JSON API
        .route("/", get(handlers::page::index))
        .route("/api/debug", get(handlers::debug::debug_json))
        // Everything else is a static asset
        .fallback_service(ServeDir::new(&config.static_dir))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(prometheus_layer)
        .layer(cors)
        .with_state(app_state);

    let addr = config.server_addr();
    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
