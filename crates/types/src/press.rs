//! Press release (보도자료) models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Press release as returned by `GET /api/press-releases/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PressRelease {
	pub id: u64,
	pub title: String,
	pub content: String,
	/// Publishing outlet, when the article ran externally.
	#[serde(default)]
	pub source: Option<String>,
	#[serde(default)]
	pub link: Option<String>,
	#[serde(default)]
	pub views: u64,
	pub published_at: DateTime<Utc>,
}

/// Body of `GET /api/press-releases`. The list is not paginated upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PressReleaseList {
	pub press_releases: Vec<PressRelease>,
}
