//! Inquiry service

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use perfee_types::{BackendApi, ClientError, Inquiry, InquiryRequest, ValidationError};

#[derive(Error, Debug)]
pub enum InquiryError {
	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error(transparent)]
	Backend(#[from] ClientError),
}

pub struct InquiryService {
	backend: Arc<dyn BackendApi>,
}

impl InquiryService {
	pub fn new(backend: Arc<dyn BackendApi>) -> Self {
		Self { backend }
	}

	pub async fn submit(&self, request: InquiryRequest) -> Result<Inquiry, InquiryError> {
		request.validate()?;

		let inquiry = self.backend.submit_inquiry(&request).await?;
		info!(inquiry_id = inquiry.id, "inquiry submitted");
		Ok(inquiry)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::StubBackend;

	fn valid_request() -> InquiryRequest {
		InquiryRequest {
			name: "김철수".to_string(),
			phone: "010-1234-5678".to_string(),
			email: "chulsoo@example.com".to_string(),
			business_type: None,
			message: "납부 절차 문의드립니다.".to_string(),
			privacy_agreed: true,
		}
	}

	#[tokio::test]
	async fn submits_valid_inquiry() {
		let service = InquiryService::new(Arc::new(StubBackend::default()));
		let inquiry = service.submit(valid_request()).await.unwrap();
		assert_eq!(inquiry.name, "김철수");
	}

	#[tokio::test]
	async fn missing_consent_is_rejected_locally() {
		let service = InquiryService::new(Arc::new(StubBackend::failing("호출되면 안 됩니다")));
		let mut request = valid_request();
		request.privacy_agreed = false;

		let err = service.submit(request).await.unwrap_err();
		assert_eq!(err.to_string(), "개인정보 수집 및 이용에 동의해주세요.");
	}
}
