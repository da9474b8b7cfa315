//! Site popup models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Popup banner as returned by `GET /api/popups/active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Popup {
	pub id: u64,
	pub title: String,
	pub image_url: String,
	#[serde(default)]
	pub link_url: Option<String>,
	pub starts_at: DateTime<Utc>,
	pub ends_at: DateTime<Utc>,
}

/// Body of `GET /api/popups/active` and of `GET /v1/popups/active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PopupsResponse {
	pub popups: Vec<Popup>,
}
