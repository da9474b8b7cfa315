use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use tracing::info;

use crate::handlers::common::{calculation_error, error_response, ApiError};
use crate::state::AppState;
use perfee_types::{CalculationRequest, CalculationResponse, FeeCategory};

/// POST /v1/calculate/{category} - Delegate a fee calculation to the backend
///
/// The category path segment picks the pricing formula; the body is the
/// per-category form accumulated by the wizard. Amounts come back both raw
/// and Korean-formatted.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/v1/calculate/{category}",
    params(("category" = String, Path, description = "Pricing category", example = "karaoke")),
    responses(
        (status = 200, description = "Calculated fee", body = CalculationResponse),
        (status = 400, description = "Invalid form", body = crate::handlers::ErrorResponse),
        (status = 404, description = "Unknown category", body = crate::handlers::ErrorResponse),
        (status = 502, description = "Backend failure", body = crate::handlers::ErrorResponse)
    ),
    tag = "calculations"
))]
pub async fn post_calculate(
	State(state): State<AppState>,
	Path(category): Path<String>,
	Json(body): Json<serde_json::Value>,
) -> Result<Json<CalculationResponse>, ApiError> {
	let category: FeeCategory = category.parse().map_err(
		|e: perfee_types::ValidationError| {
			error_response(StatusCode::NOT_FOUND, "UNKNOWN_CATEGORY", e.to_string())
		},
	)?;

	let request = CalculationRequest::from_category_value(category, body).map_err(|e| {
		error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
	})?;

	info!(%category, "received calculation request");

	let outcome = state
		.calculation_service
		.calculate(request)
		.await
		.map_err(calculation_error)?;

	Ok(Json(CalculationResponse {
		category,
		result: outcome.result,
		view: outcome.view,
		meta: outcome.meta,
	}))
}
