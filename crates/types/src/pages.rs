//! Informational page content models
//!
//! Static company pages (회사소개, 주요 서비스, ...) are served as structured
//! sections; rendering is the front-end's concern.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// One titled block of an informational page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageSection {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub heading: Option<String>,
	pub body: String,
}

/// Full informational page, addressed by slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
	pub slug: String,
	pub title: String,
	pub sections: Vec<PageSection>,
}

/// Slug and title only, for navigation menus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
	pub slug: String,
	pub title: String,
}

/// Body of `GET /v1/pages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PagesResponse {
	pub pages: Vec<PageSummary>,
	pub total: usize,
}
