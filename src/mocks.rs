//! Mock backend for tests and demos
//!
//! Serves canned Korean fixtures through the `BackendApi` trait so the
//! full router can run without the real backend.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use perfee_types::{
	BackendApi, BackendResult, CalculationMeta, CalculationRequest, CalculationResult,
	ClientError, Faq, FaqCategory, FeeCategory, FeeLineItem, Industry, Inquiry, InquiryRequest,
	Notice, NoticePage, Pagination, Popup, PressRelease,
};

/// In-process stand-in for the backend REST API.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
	/// When set, every call fails with this Korean message.
	failure_message: Option<String>,
}

impl MockBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Mock whose every call fails, for error-path tests.
	pub fn failing(message: &str) -> Self {
		Self {
			failure_message: Some(message.to_string()),
		}
	}

	fn gate(&self) -> BackendResult<()> {
		match &self.failure_message {
			Some(message) => Err(ClientError::Backend {
				message: message.clone(),
			}),
			None => Ok(()),
		}
	}
}

pub fn mock_industries() -> Vec<Industry> {
	vec![
		Industry {
			id: 1,
			code: "karaoke".to_string(),
			name: "노래연습장".to_string(),
			description: Some("방 수 기준 정액제".to_string()),
			monthly_fee_from: Some(11_000),
			icon: Some("mic".to_string()),
		},
		Industry {
			id: 2,
			code: "hotel".to_string(),
			name: "호텔·콘도".to_string(),
			description: Some("객실 수 및 등급 기준".to_string()),
			monthly_fee_from: Some(80_000),
			icon: Some("bed".to_string()),
		},
		Industry {
			id: 3,
			code: "golf".to_string(),
			name: "골프장".to_string(),
			description: None,
			monthly_fee_from: Some(132_000),
			icon: None,
		},
	]
}

pub fn mock_faqs() -> Vec<Faq> {
	vec![
		Faq {
			id: 1,
			category: FaqCategory::General,
			question: "공연권료란 무엇인가요?".to_string(),
			answer: "매장에서 음악을 트는 행위에 대한 저작권 사용료입니다.".to_string(),
			display_order: 1,
		},
		Faq {
			id: 2,
			category: FaqCategory::Payment,
			question: "납부는 어떻게 하나요?".to_string(),
			answer: "통합 고지서의 가상계좌로 납부하실 수 있습니다.".to_string(),
			display_order: 1,
		},
		Faq {
			id: 3,
			category: FaqCategory::Calculation,
			question: "요금은 어떻게 계산되나요?".to_string(),
			answer: "업종별 기준(면적, 객실 수 등)에 따라 산정됩니다.".to_string(),
			display_order: 2,
		},
	]
}

pub fn mock_notices() -> Vec<Notice> {
	vec![
		Notice {
			id: 1,
			title: "공연권료 통합 징수 안내".to_string(),
			content: "2025년부터 통합 고지서가 발송됩니다.".to_string(),
			pinned: true,
			views: 1_204,
			created_at: Utc.with_ymd_and_hms(2025, 1, 2, 9, 0, 0).unwrap(),
			updated_at: None,
		},
		Notice {
			id: 2,
			title: "설 연휴 고객센터 휴무 안내".to_string(),
			content: "연휴 기간 상담 업무를 쉽니다.".to_string(),
			pinned: false,
			views: 310,
			created_at: Utc.with_ymd_and_hms(2025, 1, 20, 9, 0, 0).unwrap(),
			updated_at: None,
		},
		Notice {
			id: 3,
			title: "요금 계산기 개편 안내".to_string(),
			content: "업종 선택 화면이 개선되었습니다.".to_string(),
			pinned: false,
			views: 98,
			created_at: Utc.with_ymd_and_hms(2025, 2, 10, 9, 0, 0).unwrap(),
			updated_at: None,
		},
	]
}

pub fn mock_press_releases() -> Vec<PressRelease> {
	vec![
		PressRelease {
			id: 1,
			title: "공연권 통합 징수 5주년".to_string(),
			content: "징수액이 전년 대비 12% 증가했습니다.".to_string(),
			source: Some("연합뉴스".to_string()),
			link: Some("https://news.example.com/articles/1".to_string()),
			views: 521,
			published_at: Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap(),
		},
		PressRelease {
			id: 2,
			title: "소상공인 감면 제도 시행".to_string(),
			content: "일정 면적 이하 매장은 감면 대상입니다.".to_string(),
			source: None,
			link: None,
			views: 204,
			published_at: Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(),
		},
	]
}

pub fn mock_popups() -> Vec<Popup> {
	vec![Popup {
		id: 1,
		title: "신규 납부자 안내".to_string(),
		image_url: "/images/popup-guide.png".to_string(),
		link_url: Some("/pages/fee-guide".to_string()),
		starts_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
		ends_at: Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap(),
	}]
}

#[async_trait]
impl BackendApi for MockBackend {
	async fn list_industries(&self) -> BackendResult<Vec<Industry>> {
		self.gate()?;
		Ok(mock_industries())
	}

	async fn list_faqs(&self, category: Option<FaqCategory>) -> BackendResult<Vec<Faq>> {
		self.gate()?;
		let faqs = mock_faqs();
		Ok(match category {
			Some(category) => faqs.into_iter().filter(|f| f.category == category).collect(),
			None => faqs,
		})
	}

	async fn list_notices(&self, page: u32, limit: u32) -> BackendResult<NoticePage> {
		self.gate()?;
		let all = mock_notices();
		let total = all.len() as u64;
		// Callers normally clamp, but direct use must not panic.
		let page = page.max(1);
		let limit = limit.max(1);
		let start = ((page - 1) as usize).saturating_mul(limit as usize);
		let notices: Vec<Notice> = all.into_iter().skip(start).take(limit as usize).collect();
		let total_pages = ((total + limit as u64 - 1) / limit as u64) as u32;
		Ok(NoticePage {
			notices,
			pagination: Pagination {
				page,
				limit,
				total,
				total_pages,
			},
		})
	}

	async fn get_notice(&self, id: u64, increment_views: bool) -> BackendResult<Notice> {
		self.gate()?;
		let mut notice = mock_notices()
			.into_iter()
			.find(|n| n.id == id)
			.ok_or(ClientError::Http {
				status: 404,
				message: "공지사항을 찾을 수 없습니다.".to_string(),
			})?;
		if increment_views {
			notice.views += 1;
		}
		Ok(notice)
	}

	async fn list_press_releases(&self) -> BackendResult<Vec<PressRelease>> {
		self.gate()?;
		Ok(mock_press_releases())
	}

	async fn get_press_release(
		&self,
		id: u64,
		increment_views: bool,
	) -> BackendResult<PressRelease> {
		self.gate()?;
		let mut press = mock_press_releases()
			.into_iter()
			.find(|p| p.id == id)
			.ok_or(ClientError::Http {
				status: 404,
				message: "보도자료를 찾을 수 없습니다.".to_string(),
			})?;
		if increment_views {
			press.views += 1;
		}
		Ok(press)
	}

	async fn active_popups(&self) -> BackendResult<Vec<Popup>> {
		self.gate()?;
		Ok(mock_popups())
	}

	async fn submit_inquiry(&self, request: &InquiryRequest) -> BackendResult<Inquiry> {
		self.gate()?;
		Ok(Inquiry {
			id: 1001,
			name: request.name.clone(),
			created_at: Utc::now(),
		})
	}

	async fn calculate(
		&self,
		request: &CalculationRequest,
	) -> BackendResult<(CalculationResult, Option<CalculationMeta>)> {
		self.gate()?;

		// Flat canned amounts per category; the real arithmetic is the
		// backend's business.
		let monthly_fee: u64 = match request.category() {
			FeeCategory::Aircraft => 1_650_000,
			FeeCategory::Area => 14_300,
			FeeCategory::Gameroom => 22_000,
			FeeCategory::Golf => 132_000,
			FeeCategory::Hotel => 264_000,
			FeeCategory::Karaoke => 28_000,
			FeeCategory::Person => 45_000,
			FeeCategory::Revenue => 96_800,
		};
		let koscap_share = monthly_fee * 15 / 100;

		let result = CalculationResult {
			monthly_fee,
			yearly_fee: Some(monthly_fee * 12),
			koscap_share,
			items: vec![
				FeeLineItem {
					label: "공연권료".to_string(),
					amount: monthly_fee - koscap_share,
				},
				FeeLineItem {
					label: "KOSCAP 몫".to_string(),
					amount: koscap_share,
				},
			],
			tier: None,
		};
		let meta = CalculationMeta {
			calculated_at: Some(Utc::now()),
			basis: Some(format!("{} 기준", request.category().label())),
		};
		Ok((result, Some(meta)))
	}

	async fn health_check(&self) -> bool {
		self.failure_message.is_none()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn list_notices_tolerates_zero_page_and_limit() {
		let backend = MockBackend::new();

		let page = backend.list_notices(0, 0).await.unwrap();
		assert_eq!(page.pagination.page, 1);
		assert_eq!(page.pagination.limit, 1);
		assert_eq!(page.notices.len(), 1);

		let rest = backend.list_notices(2, 2).await.unwrap();
		assert_eq!(rest.notices.len(), 1);
		assert_eq!(rest.pagination.total_pages, 2);
	}
}
