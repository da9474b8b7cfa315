use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::{inquiry_error, ApiError};
use crate::state::AppState;
use perfee_types::{InquiryRequest, InquiryResponse};

/// POST /v1/inquiries - Submit a consultation inquiry
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/v1/inquiries",
    request_body = InquiryRequest,
    responses(
        (status = 201, description = "Inquiry created", body = InquiryResponse),
        (status = 400, description = "Invalid form", body = crate::handlers::ErrorResponse),
        (status = 502, description = "Backend failure", body = crate::handlers::ErrorResponse)
    ),
    tag = "inquiries"
))]
pub async fn post_inquiries(
	State(state): State<AppState>,
	Json(request): Json<InquiryRequest>,
) -> Result<(StatusCode, Json<InquiryResponse>), ApiError> {
	info!("received inquiry submission");

	let inquiry = state
		.inquiry_service
		.submit(request)
		.await
		.map_err(inquiry_error)?;

	Ok((StatusCode::CREATED, Json(InquiryResponse { inquiry })))
}
