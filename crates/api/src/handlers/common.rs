use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use perfee_service::{CalculationError, ContentError, InquiryError};

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, code: &str, message: String) -> ApiError {
	(
		status,
		Json(ErrorResponse {
			error: code.to_string(),
			message,
			timestamp: chrono::Utc::now().timestamp(),
		}),
	)
}

/// Map content read failures: 404 for missing resources, 502 for a broken
/// backend (the Korean message passes through for display).
pub fn content_error(err: ContentError) -> ApiError {
	match &err {
		ContentError::NotFound => {
			error_response(StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
		},
		ContentError::UnknownPage { .. } => {
			error_response(StatusCode::NOT_FOUND, "PAGE_NOT_FOUND", err.to_string())
		},
		ContentError::Backend(_) => {
			error_response(StatusCode::BAD_GATEWAY, "BACKEND_ERROR", err.to_string())
		},
	}
}

pub fn calculation_error(err: CalculationError) -> ApiError {
	match &err {
		CalculationError::Validation(_) => {
			error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
		},
		CalculationError::Backend(_) => {
			error_response(StatusCode::BAD_GATEWAY, "BACKEND_ERROR", err.to_string())
		},
	}
}

pub fn inquiry_error(err: InquiryError) -> ApiError {
	match &err {
		InquiryError::Validation(_) => {
			error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
		},
		InquiryError::Backend(_) => {
			error_response(StatusCode::BAD_GATEWAY, "BACKEND_ERROR", err.to_string())
		},
	}
}
