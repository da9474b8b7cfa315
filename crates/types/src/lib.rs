//! Perfee Types
//!
//! Shared models for the performance-rights fee (공연권료) web service.
//! Everything here mirrors the JSON contracts of the external backend API;
//! these types carry no business logic beyond field validation and
//! display formatting.

pub mod backend;
pub mod calculations;
pub mod envelope;
pub mod errors;
pub mod faqs;
pub mod format;
pub mod industries;
pub mod inquiries;
pub mod notices;
pub mod pages;
pub mod popups;
pub mod press;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use backend::{BackendApi, BackendResult, ClientError};
pub use calculations::{
	AircraftForm, AreaForm, AreaUnit, CalculationMeta, CalculationRequest, CalculationResponse,
	CalculationResult, CalculationView, FeeCategory, FeeLineItem, FeeLineItemView, GameroomForm,
	GolfForm, HotelForm, HotelGrade, KaraokeForm, PersonForm, RevenueForm,
};
pub use envelope::{ApiEnvelope, ApiErrorBody, GENERIC_ERROR_MESSAGE};
pub use errors::ValidationError;
pub use faqs::{Faq, FaqCategory, FaqsResponse};
pub use format::format_won;
pub use industries::{IndustriesResponse, Industry};
pub use inquiries::{Inquiry, InquiryRequest, InquiryResponse};
pub use notices::{Notice, NoticePage, Pagination};
pub use pages::{PageContent, PageSection, PageSummary, PagesResponse};
pub use popups::{Popup, PopupsResponse};
pub use press::{PressRelease, PressReleaseList};
