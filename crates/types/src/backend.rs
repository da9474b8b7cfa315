//! Backend API trait and client errors
//!
//! `BackendApi` is the seam between this service and the external REST
//! backend that owns all pricing rules and persistence. The production
//! implementation lives in `perfee-client`; tests substitute a mock.

use async_trait::async_trait;
use thiserror::Error;

use crate::calculations::{CalculationMeta, CalculationRequest, CalculationResult};
use crate::envelope::GENERIC_ERROR_MESSAGE;
use crate::faqs::{Faq, FaqCategory};
use crate::industries::Industry;
use crate::inquiries::{Inquiry, InquiryRequest};
use crate::notices::{Notice, NoticePage};
use crate::popups::Popup;
use crate::press::PressRelease;

/// Errors raised by backend calls. `Backend` and `Http` carry Korean
/// messages ready for display: the server's own message when it sent one,
/// the generic fallback otherwise.
#[derive(Error, Debug)]
pub enum ClientError {
	/// Envelope arrived with `success: false`.
	#[error("{message}")]
	Backend { message: String },

	/// Non-2xx HTTP status.
	#[error("{message}")]
	Http { status: u16, message: String },

	#[error("백엔드 응답을 해석할 수 없습니다: {reason}")]
	InvalidResponse { reason: String },

	#[error("백엔드 요청 시간이 초과되었습니다. ({timeout_ms}ms)")]
	Timeout { timeout_ms: u64 },

	#[error("백엔드에 연결할 수 없습니다: {0}")]
	Network(#[from] reqwest::Error),

	#[error("백엔드 주소가 올바르지 않습니다: {url}")]
	InvalidBaseUrl { url: String },
}

impl ClientError {
	/// HTTP status of the upstream failure, when there was a response at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			ClientError::Http { status, .. } => Some(*status),
			_ => None,
		}
	}

	pub fn backend_with_fallback(message: Option<String>) -> Self {
		ClientError::Backend {
			message: message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
		}
	}

	/// True when the upstream reported the resource missing.
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}

pub type BackendResult<T> = Result<T, ClientError>;

/// Typed surface of the external backend REST API, one method per endpoint.
#[async_trait]
pub trait BackendApi: Send + Sync {
	/// `GET /api/industries`
	async fn list_industries(&self) -> BackendResult<Vec<Industry>>;

	/// `GET /api/faqs?category=`
	async fn list_faqs(&self, category: Option<FaqCategory>) -> BackendResult<Vec<Faq>>;

	/// `GET /api/notices?page=&limit=`
	async fn list_notices(&self, page: u32, limit: u32) -> BackendResult<NoticePage>;

	/// `GET /api/notices/:id?incrementViews=true`
	async fn get_notice(&self, id: u64, increment_views: bool) -> BackendResult<Notice>;

	/// `GET /api/press-releases`
	async fn list_press_releases(&self) -> BackendResult<Vec<PressRelease>>;

	/// `GET /api/press-releases/:id?incrementViews=true`
	async fn get_press_release(&self, id: u64, increment_views: bool)
		-> BackendResult<PressRelease>;

	/// `GET /api/popups/active`
	async fn active_popups(&self) -> BackendResult<Vec<Popup>>;

	/// `POST /api/inquiries`
	async fn submit_inquiry(&self, request: &InquiryRequest) -> BackendResult<Inquiry>;

	/// `POST /api/calculate/{category}`
	async fn calculate(
		&self,
		request: &CalculationRequest,
	) -> BackendResult<(CalculationResult, Option<CalculationMeta>)>;

	/// Readiness probe; any reachable backend counts as healthy.
	async fn health_check(&self) -> bool;
}
