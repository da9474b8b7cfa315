//! Notice (공지사항) models
//!
//! The notices endpoints are the only paginated surface and return bare
//! bodies instead of the `{ success, data }` envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Notice as returned by `GET /api/notices/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Notice {
	pub id: u64,
	pub title: String,
	pub content: String,
	/// Pinned notices sort above the rest regardless of date.
	#[serde(default)]
	pub pinned: bool,
	#[serde(default)]
	pub views: u64,
	pub created_at: DateTime<Utc>,
	#[serde(default)]
	pub updated_at: Option<DateTime<Utc>>,
}

/// Upstream pagination block, echoed back to the site unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
	pub page: u32,
	pub limit: u32,
	pub total: u64,
	pub total_pages: u32,
}

/// Body of `GET /api/notices` and of `GET /v1/notices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NoticePage {
	pub notices: Vec<Notice>,
	pub pagination: Pagination,
}
