//! Inquiry (상담 문의) models and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::errors::ValidationError;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Body of `POST /api/inquiries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
	pub name: String,
	pub phone: String,
	pub email: String,
	#[serde(default)]
	pub business_type: Option<String>,
	pub message: String,
	#[serde(default)]
	pub privacy_agreed: bool,
}

impl InquiryRequest {
	/// Field validation mirroring the site's form rules. The backend
	/// validates again; this keeps obviously broken submissions local.
	pub fn validate(&self) -> Result<(), ValidationError> {
		let name = self.name.trim();
		if name.is_empty() {
			return Err(ValidationError::MissingName);
		}
		if name.chars().count() > MAX_NAME_LEN {
			return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
		}

		if !is_plausible_phone(&self.phone) {
			return Err(ValidationError::InvalidPhone);
		}
		if !is_plausible_email(&self.email) {
			return Err(ValidationError::InvalidEmail);
		}

		let message = self.message.trim();
		if message.is_empty() {
			return Err(ValidationError::MissingMessage);
		}
		if message.chars().count() > MAX_MESSAGE_LEN {
			return Err(ValidationError::MessageTooLong {
				max: MAX_MESSAGE_LEN,
			});
		}

		if !self.privacy_agreed {
			return Err(ValidationError::PrivacyNotAgreed);
		}
		Ok(())
	}
}

/// Digits with optional dashes, 9 to 11 digits total (02-xxx to 010-xxxx-xxxx).
fn is_plausible_phone(phone: &str) -> bool {
	let trimmed = phone.trim();
	if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit() || c == '-') {
		return false;
	}
	let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
	(9..=11).contains(&digits)
}

fn is_plausible_email(email: &str) -> bool {
	let trimmed = email.trim();
	let Some((local, domain)) = trimmed.split_once('@') else {
		return false;
	};
	!local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Created inquiry, unwrapped from the backend envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
	pub id: u64,
	pub name: String,
	pub created_at: DateTime<Utc>,
}

/// Body of `POST /v1/inquiries` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
	pub inquiry: Inquiry,
}
