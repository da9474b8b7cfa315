//! Stub backend shared by the service unit tests

use async_trait::async_trait;

use perfee_types::chrono::Utc;
use perfee_types::{
	BackendApi, BackendResult, CalculationMeta, CalculationRequest, CalculationResult, ClientError,
	Faq, FaqCategory, Industry, Inquiry, InquiryRequest, Notice, NoticePage, Pagination, Popup,
	PressRelease,
};

enum Mode {
	Ok,
	Failing(String),
	NotFound,
}

pub struct StubBackend {
	mode: Mode,
}

impl Default for StubBackend {
	fn default() -> Self {
		Self { mode: Mode::Ok }
	}
}

impl StubBackend {
	pub fn failing(message: &str) -> Self {
		Self {
			mode: Mode::Failing(message.to_string()),
		}
	}

	pub fn not_found() -> Self {
		Self {
			mode: Mode::NotFound,
		}
	}

	fn gate(&self) -> BackendResult<()> {
		match &self.mode {
			Mode::Ok => Ok(()),
			Mode::Failing(message) => Err(ClientError::Backend {
				message: message.clone(),
			}),
			Mode::NotFound => Err(ClientError::Http {
				status: 404,
				message: "찾을 수 없습니다.".to_string(),
			}),
		}
	}
}

#[async_trait]
impl BackendApi for StubBackend {
	async fn list_industries(&self) -> BackendResult<Vec<Industry>> {
		self.gate()?;
		Ok(vec![Industry {
			id: 1,
			code: "karaoke".to_string(),
			name: "노래연습장".to_string(),
			description: None,
			monthly_fee_from: Some(11_000),
			icon: None,
		}])
	}

	async fn list_faqs(&self, category: Option<FaqCategory>) -> BackendResult<Vec<Faq>> {
		self.gate()?;
		Ok(vec![Faq {
			id: 1,
			category: category.unwrap_or(FaqCategory::General),
			question: "공연권료란 무엇인가요?".to_string(),
			answer: "매장 음악 사용에 따른 사용료입니다.".to_string(),
			display_order: 1,
		}])
	}

	async fn list_notices(&self, page: u32, limit: u32) -> BackendResult<NoticePage> {
		self.gate()?;
		Ok(NoticePage {
			notices: Vec::new(),
			pagination: Pagination {
				page,
				limit,
				total: 0,
				total_pages: 0,
			},
		})
	}

	async fn get_notice(&self, id: u64, _increment_views: bool) -> BackendResult<Notice> {
		self.gate()?;
		Ok(Notice {
			id,
			title: "공지".to_string(),
			content: "내용".to_string(),
			pinned: false,
			views: 1,
			created_at: Utc::now(),
			updated_at: None,
		})
	}

	async fn list_press_releases(&self) -> BackendResult<Vec<PressRelease>> {
		self.gate()?;
		Ok(Vec::new())
	}

	async fn get_press_release(
		&self,
		id: u64,
		_increment_views: bool,
	) -> BackendResult<PressRelease> {
		self.gate()?;
		Ok(PressRelease {
			id,
			title: "보도자료".to_string(),
			content: "내용".to_string(),
			source: None,
			link: None,
			views: 1,
			published_at: Utc::now(),
		})
	}

	async fn active_popups(&self) -> BackendResult<Vec<Popup>> {
		self.gate()?;
		Ok(Vec::new())
	}

	async fn submit_inquiry(&self, request: &InquiryRequest) -> BackendResult<Inquiry> {
		self.gate()?;
		Ok(Inquiry {
			id: 42,
			name: request.name.clone(),
			created_at: Utc::now(),
		})
	}

	async fn calculate(
		&self,
		_request: &CalculationRequest,
	) -> BackendResult<(CalculationResult, Option<CalculationMeta>)> {
		self.gate()?;
		Ok((
			CalculationResult {
				monthly_fee: 28_000,
				yearly_fee: Some(336_000),
				koscap_share: 4_200,
				items: Vec::new(),
				tier: None,
			},
			None,
		))
	}

	async fn health_check(&self) -> bool {
		matches!(self.mode, Mode::Ok)
	}
}
