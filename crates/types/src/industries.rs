//! Industry group models
//!
//! An industry group is a classification bucket (hotel, karaoke room, golf
//! course, ...) with its own fee formula on the backend side.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Industry group as returned by `GET /api/industries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Industry {
	pub id: u64,
	/// Stable code, also the calculate path segment where one exists
	/// (e.g. `"karaoke"`).
	pub code: String,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	/// Lowest monthly fee in won for the "부터" display on the landing page.
	#[serde(default)]
	pub monthly_fee_from: Option<u64>,
	#[serde(default)]
	pub icon: Option<String>,
}

/// Body of `GET /v1/industries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IndustriesResponse {
	pub industries: Vec<Industry>,
	pub total: usize,
}
