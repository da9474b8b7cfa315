//! HTTP handlers, one module per site surface

pub mod calculations;
pub mod common;
pub mod content;
pub mod health;
pub mod inquiries;

pub use calculations::post_calculate;
pub use common::ErrorResponse;
pub use content::{
	get_faqs, get_industries, get_notice, get_notices, get_page, get_pages, get_popups, get_press,
	get_press_release,
};
pub use health::{health, ready};
pub use inquiries::post_inquiries;
