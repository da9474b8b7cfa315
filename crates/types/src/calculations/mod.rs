//! Fee calculation request and response models
//!
//! The arithmetic itself lives on the backend; these types shape the
//! request per pricing category and unwrap the calculated result.

pub mod category;
pub mod request;
pub mod response;

pub use category::FeeCategory;
pub use request::{
	AircraftForm, AreaForm, AreaUnit, CalculationRequest, GameroomForm, GolfForm, HotelForm,
	HotelGrade, KaraokeForm, PersonForm, RevenueForm,
};
pub use response::{
	CalculationMeta, CalculationResponse, CalculationResult, CalculationView, FeeLineItem,
	FeeLineItemView,
};
