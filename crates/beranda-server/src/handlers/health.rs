//! Liveness probe.

use axum::http::StatusCode;

/// Handle GET /healthz.
pub(crate) async fn healthz() -> StatusCode {
    StatusCode::OK
}
