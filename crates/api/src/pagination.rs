use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 50;

/// `page`/`limit` query parameters of the notices list.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationQuery {
	pub page: Option<u32>,
	pub limit: Option<u32>,
}

impl PaginationQuery {
	/// Effective (page, limit) after clamping: page floored at 1, limit
	/// clamped to 1..=MAX_PAGE_SIZE. Applied before the upstream call.
	pub fn clamped(&self) -> (u32, u32) {
		let page = self.page.unwrap_or(1).max(1);
		let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
		(page, limit)
	}
}
