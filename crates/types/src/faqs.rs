//! FAQ models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::errors::ValidationError;

/// FAQ classification used by the `category` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
	General,
	Calculation,
	Payment,
	Refund,
}

impl FaqCategory {
	pub fn as_str(&self) -> &'static str {
		match self {
			FaqCategory::General => "general",
			FaqCategory::Calculation => "calculation",
			FaqCategory::Payment => "payment",
			FaqCategory::Refund => "refund",
		}
	}
}

impl fmt::Display for FaqCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FaqCategory {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"general" => Ok(FaqCategory::General),
			"calculation" => Ok(FaqCategory::Calculation),
			"payment" => Ok(FaqCategory::Payment),
			"refund" => Ok(FaqCategory::Refund),
			other => Err(ValidationError::UnknownCategory {
				category: other.to_string(),
			}),
		}
	}
}

/// FAQ entry as returned by `GET /api/faqs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Faq {
	pub id: u64,
	pub category: FaqCategory,
	pub question: String,
	pub answer: String,
	#[serde(default)]
	pub display_order: u32,
}

/// Body of `GET /v1/faqs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FaqsResponse {
	pub faqs: Vec<Faq>,
	pub total: usize,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<FaqCategory>,
}
