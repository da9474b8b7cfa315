//! Response envelope used by most backend endpoints
//!
//! The backend wraps enveloped responses as `{ success, data, error, meta }`.
//! A handful of endpoints (notices, press releases, popups) return bare
//! bodies and bypass this type.

use serde::{Deserialize, Serialize};

/// Generic fallback shown to users when the backend gives no message of its own.
pub const GENERIC_ERROR_MESSAGE: &str =
	"요청 처리 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Standard `{ success, data, error, meta }` wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
	pub success: bool,
	// No `default` here: it would put a `T: Default` bound on the
	// Deserialize impl, and a missing key is already `None`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<ApiErrorBody>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<serde_json::Value>,
}

/// Error payload inside a failed envelope. The backend sends Korean-language
/// messages intended for direct display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub code: Option<String>,
}

impl<T> ApiEnvelope<T> {
	/// User-facing message for a failed envelope, falling back to the generic one.
	pub fn error_message(&self) -> String {
		self.error
			.as_ref()
			.and_then(|e| e.message.clone())
			.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
	}
}
