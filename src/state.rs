use crate::debugger::SharingDebugger;

/// Shared application state passed to all handlers.
/// The debugger is built once at startup so every request reuses the same
/// HTTP connection pool; it carries no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub debugger: SharingDebugger,
}
