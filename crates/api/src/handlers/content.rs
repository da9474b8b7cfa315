//! Read handlers for the site's display content

use axum::{
	extract::{Path, Query, State},
	response::Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::handlers::common::{content_error, error_response, ApiError};
use crate::pagination::PaginationQuery;
use crate::state::AppState;
use perfee_types::{
	FaqCategory, FaqsResponse, IndustriesResponse, Notice, NoticePage, PageContent, PagesResponse,
	PopupsResponse, PressRelease, PressReleaseList,
};

/// GET /v1/pages - Informational page index
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/pages",
    responses((status = 200, description = "Page index", body = PagesResponse)),
    tag = "pages"
))]
pub async fn get_pages(State(state): State<AppState>) -> Json<PagesResponse> {
	let pages = state.content_service.list_pages();
	let total = pages.len();
	Json(PagesResponse { pages, total })
}

/// GET /v1/pages/{slug} - One informational page
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/pages/{slug}",
    params(("slug" = String, Path, description = "Page slug", example = "fee-guide")),
    responses(
        (status = 200, description = "Page content", body = PageContent),
        (status = 404, description = "Unknown slug", body = crate::handlers::ErrorResponse)
    ),
    tag = "pages"
))]
pub async fn get_page(
	State(state): State<AppState>,
	Path(slug): Path<String>,
) -> Result<Json<PageContent>, ApiError> {
	let page = state.content_service.page(&slug).map_err(content_error)?;
	Ok(Json(page))
}

/// GET /v1/industries - Industry groups for the landing page and wizard
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/industries",
    responses((status = 200, description = "Industry list", body = IndustriesResponse)),
    tag = "industries"
))]
pub async fn get_industries(
	State(state): State<AppState>,
) -> Result<Json<IndustriesResponse>, ApiError> {
	let industries = state
		.content_service
		.industries()
		.await
		.map_err(content_error)?;
	let total = industries.len();
	Ok(Json(IndustriesResponse { industries, total }))
}

#[derive(Debug, Deserialize)]
pub struct FaqQuery {
	pub category: Option<String>,
}

/// GET /v1/faqs - FAQ list, optionally filtered by category
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/faqs",
    params(("category" = Option<String>, Query, description = "FAQ category filter", example = "payment")),
    responses(
        (status = 200, description = "FAQ list", body = FaqsResponse),
        (status = 400, description = "Unknown category", body = crate::handlers::ErrorResponse)
    ),
    tag = "faqs"
))]
pub async fn get_faqs(
	State(state): State<AppState>,
	Query(query): Query<FaqQuery>,
) -> Result<Json<FaqsResponse>, ApiError> {
	// `?category=` (empty) means no filter, like the original site.
	let category = match query.category.as_deref() {
		None | Some("") => None,
		Some(raw) => Some(raw.parse::<FaqCategory>().map_err(|e| {
			error_response(
				axum::http::StatusCode::BAD_REQUEST,
				"VALIDATION_ERROR",
				e.to_string(),
			)
		})?),
	};

	let faqs = state
		.content_service
		.faqs(category)
		.await
		.map_err(content_error)?;
	let total = faqs.len();
	Ok(Json(FaqsResponse {
		faqs,
		total,
		category,
	}))
}

/// GET /v1/notices - Paginated notice list
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/notices",
    params(
        ("page" = Option<u32>, Query, description = "Page number (1-based)", example = 1),
        ("limit" = Option<u32>, Query, description = "Items per page (1-50)", example = 10)
    ),
    responses((status = 200, description = "Notice page", body = NoticePage)),
    tag = "notices"
))]
pub async fn get_notices(
	State(state): State<AppState>,
	Query(pq): Query<PaginationQuery>,
) -> Result<Json<NoticePage>, ApiError> {
	let (page, limit) = pq.clamped();
	debug!(page, limit, "listing notices");
	let notice_page = state
		.content_service
		.notices(page, limit)
		.await
		.map_err(content_error)?;
	Ok(Json(notice_page))
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
	/// Skip the upstream view-count increment (crawler previews).
	pub preview: Option<bool>,
}

/// GET /v1/notices/{id} - Notice detail; increments views unless previewing
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/notices/{id}",
    params(
        ("id" = u64, Path, description = "Notice ID"),
        ("preview" = Option<bool>, Query, description = "Skip the view-count increment")
    ),
    responses(
        (status = 200, description = "Notice detail", body = Notice),
        (status = 404, description = "Not found", body = crate::handlers::ErrorResponse)
    ),
    tag = "notices"
))]
pub async fn get_notice(
	State(state): State<AppState>,
	Path(id): Path<u64>,
	Query(query): Query<DetailQuery>,
) -> Result<Json<Notice>, ApiError> {
	let increment_views = !query.preview.unwrap_or(false);
	let notice = state
		.content_service
		.notice(id, increment_views)
		.await
		.map_err(content_error)?;
	Ok(Json(notice))
}

/// GET /v1/press-releases - Press release list (unpaginated upstream)
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/press-releases",
    responses((status = 200, description = "Press releases", body = PressReleaseList)),
    tag = "press"
))]
pub async fn get_press(
	State(state): State<AppState>,
) -> Result<Json<PressReleaseList>, ApiError> {
	let press_releases = state
		.content_service
		.press_releases()
		.await
		.map_err(content_error)?;
	Ok(Json(PressReleaseList { press_releases }))
}

/// GET /v1/press-releases/{id} - Press release detail
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/press-releases/{id}",
    params(
        ("id" = u64, Path, description = "Press release ID"),
        ("preview" = Option<bool>, Query, description = "Skip the view-count increment")
    ),
    responses(
        (status = 200, description = "Press release detail", body = PressRelease),
        (status = 404, description = "Not found", body = crate::handlers::ErrorResponse)
    ),
    tag = "press"
))]
pub async fn get_press_release(
	State(state): State<AppState>,
	Path(id): Path<u64>,
	Query(query): Query<DetailQuery>,
) -> Result<Json<PressRelease>, ApiError> {
	let increment_views = !query.preview.unwrap_or(false);
	let press_release = state
		.content_service
		.press_release(id, increment_views)
		.await
		.map_err(content_error)?;
	Ok(Json(press_release))
}

/// GET /v1/popups/active - Popups currently scheduled for display
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/v1/popups/active",
    responses((status = 200, description = "Active popups", body = PopupsResponse)),
    tag = "popups"
))]
pub async fn get_popups(State(state): State<AppState>) -> Result<Json<PopupsResponse>, ApiError> {
	let popups = state
		.content_service
		.active_popups()
		.await
		.map_err(content_error)?;
	Ok(Json(PopupsResponse { popups }))
}
