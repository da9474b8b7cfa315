use std::sync::Arc;

use perfee_service::{CalculationService, ContentService, InquiryService};
use perfee_types::BackendApi;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub content_service: Arc<ContentService>,
	pub calculation_service: Arc<CalculationService>,
	pub inquiry_service: Arc<InquiryService>,
	pub backend: Arc<dyn BackendApi>,
}

impl AppState {
	pub fn new(backend: Arc<dyn BackendApi>) -> Self {
		Self {
			content_service: Arc::new(ContentService::new(backend.clone())),
			calculation_service: Arc::new(CalculationService::new(backend.clone())),
			inquiry_service: Arc::new(InquiryService::new(backend.clone())),
			backend,
		}
	}
}
