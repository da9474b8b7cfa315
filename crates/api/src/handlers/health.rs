use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = String)),
    tag = "health"
))]
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
	pub status: String,
	pub backend_reachable: bool,
}

/// GET /ready - Readiness probe with a backend reachability check
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/ready",
    responses((status = 200, description = "Readiness response", body = ReadinessResponse)),
    tag = "health"
))]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let backend_reachable = state.backend.health_check().await;

	let status = if backend_reachable { "ready" } else { "degraded" };
	let code = if backend_reachable {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};

	(
		code,
		Json(ReadinessResponse {
			status: status.to_string(),
			backend_reachable,
		}),
	)
}
