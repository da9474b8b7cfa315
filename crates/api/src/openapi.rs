//! OpenAPI documentation, exposed at /swagger-ui when the `openapi`
//! feature is enabled.

use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
	paths(
		handlers::health::health,
		handlers::health::ready,
		handlers::content::get_pages,
		handlers::content::get_page,
		handlers::content::get_industries,
		handlers::content::get_faqs,
		handlers::content::get_notices,
		handlers::content::get_notice,
		handlers::content::get_press,
		handlers::content::get_press_release,
		handlers::content::get_popups,
		handlers::inquiries::post_inquiries,
		handlers::calculations::post_calculate,
	),
	components(schemas(
		handlers::common::ErrorResponse,
		handlers::health::ReadinessResponse,
		perfee_types::PageContent,
		perfee_types::PageSection,
		perfee_types::PageSummary,
		perfee_types::PagesResponse,
		perfee_types::Industry,
		perfee_types::IndustriesResponse,
		perfee_types::Faq,
		perfee_types::FaqCategory,
		perfee_types::FaqsResponse,
		perfee_types::Notice,
		perfee_types::NoticePage,
		perfee_types::Pagination,
		perfee_types::PressRelease,
		perfee_types::PressReleaseList,
		perfee_types::Popup,
		perfee_types::PopupsResponse,
		perfee_types::InquiryRequest,
		perfee_types::Inquiry,
		perfee_types::InquiryResponse,
		perfee_types::FeeCategory,
		perfee_types::CalculationResult,
		perfee_types::CalculationView,
		perfee_types::CalculationMeta,
		perfee_types::CalculationResponse,
		perfee_types::FeeLineItem,
		perfee_types::FeeLineItemView,
	)),
	tags(
		(name = "health", description = "Liveness and readiness probes"),
		(name = "pages", description = "Informational company pages"),
		(name = "industries", description = "Industry groups"),
		(name = "faqs", description = "Frequently asked questions"),
		(name = "notices", description = "Notice board"),
		(name = "press", description = "Press releases"),
		(name = "popups", description = "Site popups"),
		(name = "inquiries", description = "Consultation inquiries"),
		(name = "calculations", description = "Fee calculation wizard"),
	)
)]
pub struct ApiDoc;
