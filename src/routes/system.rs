use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// System Router Module
///
/// Operational endpoints that sit outside the role-administration surface.
pub fn system_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // Static service metadata banner (name, database, version, framework).
        .route("/", get(handlers::service_info))
        // GET /health
        // Liveness plus database connectivity. Returns 503 when the
        // persistence client cannot reach Postgres, so orchestrators can
        // distinguish a dead database from a dead process.
        .route("/health", get(handlers::health_check))
}
