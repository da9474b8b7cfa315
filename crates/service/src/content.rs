//! Content service
//!
//! Read paths for everything the site displays: static pages, industries,
//! FAQs, notices, press releases and popups. Upstream 404s are folded into
//! `ContentError::NotFound` so handlers map them uniformly.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use perfee_types::{
	BackendApi, ClientError, Faq, FaqCategory, Industry, Notice, NoticePage, PageContent,
	PageSummary, Popup, PressRelease,
};

use crate::pages;

#[derive(Error, Debug)]
pub enum ContentError {
	#[error("요청하신 게시물을 찾을 수 없습니다.")]
	NotFound,

	#[error("페이지를 찾을 수 없습니다: {slug}")]
	UnknownPage { slug: String },

	#[error(transparent)]
	Backend(ClientError),
}

impl From<ClientError> for ContentError {
	fn from(err: ClientError) -> Self {
		if err.is_not_found() {
			ContentError::NotFound
		} else {
			ContentError::Backend(err)
		}
	}
}

/// Read-side service over the backend plus the static page catalog.
pub struct ContentService {
	backend: Arc<dyn BackendApi>,
}

impl ContentService {
	pub fn new(backend: Arc<dyn BackendApi>) -> Self {
		Self { backend }
	}

	pub fn list_pages(&self) -> Vec<PageSummary> {
		pages::summaries()
	}

	pub fn page(&self, slug: &str) -> Result<PageContent, ContentError> {
		pages::find(slug).ok_or_else(|| ContentError::UnknownPage {
			slug: slug.to_string(),
		})
	}

	pub async fn industries(&self) -> Result<Vec<Industry>, ContentError> {
		Ok(self.backend.list_industries().await?)
	}

	pub async fn faqs(&self, category: Option<FaqCategory>) -> Result<Vec<Faq>, ContentError> {
		debug!(?category, "fetching faqs");
		Ok(self.backend.list_faqs(category).await?)
	}

	pub async fn notices(&self, page: u32, limit: u32) -> Result<NoticePage, ContentError> {
		Ok(self.backend.list_notices(page, limit).await?)
	}

	pub async fn notice(&self, id: u64, increment_views: bool) -> Result<Notice, ContentError> {
		Ok(self.backend.get_notice(id, increment_views).await?)
	}

	pub async fn press_releases(&self) -> Result<Vec<PressRelease>, ContentError> {
		Ok(self.backend.list_press_releases().await?)
	}

	pub async fn press_release(
		&self,
		id: u64,
		increment_views: bool,
	) -> Result<PressRelease, ContentError> {
		Ok(self.backend.get_press_release(id, increment_views).await?)
	}

	pub async fn active_popups(&self) -> Result<Vec<Popup>, ContentError> {
		Ok(self.backend.active_popups().await?)
	}
}
