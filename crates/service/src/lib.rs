//! Perfee Service
//!
//! Page-level orchestration between the HTTP surface and the backend
//! client: static informational content, calculation dispatch with
//! validation and display formatting, and inquiry submission.

pub mod calculation;
pub mod content;
pub mod inquiry;
pub mod pages;

pub use calculation::{CalculationError, CalculationOutcome, CalculationService};
pub use content::{ContentError, ContentService};
pub use inquiry::{InquiryError, InquiryService};

#[cfg(test)]
pub(crate) mod test_support;
