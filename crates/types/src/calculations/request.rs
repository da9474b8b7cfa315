//! Per-category calculation request forms
//!
//! Each form mirrors the JSON body of the matching backend calculate
//! endpoint. Validation here covers only what the wizard UI also enforces;
//! the pricing rules stay on the backend.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::category::FeeCategory;
use crate::errors::ValidationError;

/// Aircraft: priced per annual passenger count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AircraftForm {
	pub passengers: u64,
}

/// Floor-area unit accepted by the area form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
	Sqm,
	Pyeong,
}

impl Default for AreaUnit {
	fn default() -> Self {
		AreaUnit::Sqm
	}
}

/// General venues: priced by floor area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AreaForm {
	pub area: f64,
	#[serde(default)]
	pub unit: AreaUnit,
}

/// Game rooms: priced per installed device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameroomForm {
	pub devices: u32,
}

/// Golf courses: priced by hole count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GolfForm {
	pub holes: u32,
}

/// Hotel grade tiers used by the hotel fee table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum HotelGrade {
	Special1,
	Special2,
	First,
	Second,
	Third,
}

/// Hotels and condos: priced by room count within a grade tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HotelForm {
	pub rooms: u32,
	pub grade: HotelGrade,
}

/// Karaoke rooms: priced per room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct KaraokeForm {
	pub rooms: u32,
}

/// Capacity-priced venues.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PersonForm {
	pub capacity: u32,
}

/// Revenue-percentage venues; amount in won per month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RevenueForm {
	pub monthly_revenue: u64,
}

/// A calculation request paired with its category, ready to dispatch.
#[derive(Debug, Clone)]
pub enum CalculationRequest {
	Aircraft(AircraftForm),
	Area(AreaForm),
	Gameroom(GameroomForm),
	Golf(GolfForm),
	Hotel(HotelForm),
	Karaoke(KaraokeForm),
	Person(PersonForm),
	Revenue(RevenueForm),
}

impl CalculationRequest {
	/// Build a request from the category path segment and a raw JSON body.
	pub fn from_category_value(
		category: FeeCategory,
		value: serde_json::Value,
	) -> Result<Self, ValidationError> {
		fn form<T: serde::de::DeserializeOwned>(
			value: serde_json::Value,
		) -> Result<T, ValidationError> {
			serde_json::from_value(value).map_err(|e| ValidationError::MalformedForm {
				reason: e.to_string(),
			})
		}

		Ok(match category {
			FeeCategory::Aircraft => CalculationRequest::Aircraft(form(value)?),
			FeeCategory::Area => CalculationRequest::Area(form(value)?),
			FeeCategory::Gameroom => CalculationRequest::Gameroom(form(value)?),
			FeeCategory::Golf => CalculationRequest::Golf(form(value)?),
			FeeCategory::Hotel => CalculationRequest::Hotel(form(value)?),
			FeeCategory::Karaoke => CalculationRequest::Karaoke(form(value)?),
			FeeCategory::Person => CalculationRequest::Person(form(value)?),
			FeeCategory::Revenue => CalculationRequest::Revenue(form(value)?),
		})
	}

	pub fn category(&self) -> FeeCategory {
		match self {
			CalculationRequest::Aircraft(_) => FeeCategory::Aircraft,
			CalculationRequest::Area(_) => FeeCategory::Area,
			CalculationRequest::Gameroom(_) => FeeCategory::Gameroom,
			CalculationRequest::Golf(_) => FeeCategory::Golf,
			CalculationRequest::Hotel(_) => FeeCategory::Hotel,
			CalculationRequest::Karaoke(_) => FeeCategory::Karaoke,
			CalculationRequest::Person(_) => FeeCategory::Person,
			CalculationRequest::Revenue(_) => FeeCategory::Revenue,
		}
	}

	/// JSON body for the backend call.
	pub fn to_body(&self) -> serde_json::Value {
		// Serialization of these plain forms cannot fail.
		match self {
			CalculationRequest::Aircraft(f) => serde_json::to_value(f),
			CalculationRequest::Area(f) => serde_json::to_value(f),
			CalculationRequest::Gameroom(f) => serde_json::to_value(f),
			CalculationRequest::Golf(f) => serde_json::to_value(f),
			CalculationRequest::Hotel(f) => serde_json::to_value(f),
			CalculationRequest::Karaoke(f) => serde_json::to_value(f),
			CalculationRequest::Person(f) => serde_json::to_value(f),
			CalculationRequest::Revenue(f) => serde_json::to_value(f),
		}
		.unwrap_or(serde_json::Value::Null)
	}

	/// Range checks matching the wizard's input constraints.
	pub fn validate(&self) -> Result<(), ValidationError> {
		match self {
			CalculationRequest::Aircraft(f) => {
				positive(f.passengers, "탑승객 수")?;
				bounded(f.passengers, 100_000_000, "탑승객 수")
			},
			CalculationRequest::Area(f) => {
				if !f.area.is_finite() || f.area <= 0.0 {
					return Err(ValidationError::NonPositive { field: "면적" });
				}
				if f.area > 1_000_000.0 {
					return Err(ValidationError::OutOfRange { field: "면적" });
				}
				Ok(())
			},
			CalculationRequest::Gameroom(f) => {
				positive(f.devices as u64, "기기 수")?;
				bounded(f.devices as u64, 10_000, "기기 수")
			},
			CalculationRequest::Golf(f) => {
				positive(f.holes as u64, "홀 수")?;
				bounded(f.holes as u64, 72, "홀 수")
			},
			CalculationRequest::Hotel(f) => {
				positive(f.rooms as u64, "객실 수")?;
				bounded(f.rooms as u64, 5_000, "객실 수")
			},
			CalculationRequest::Karaoke(f) => {
				positive(f.rooms as u64, "방 수")?;
				bounded(f.rooms as u64, 500, "방 수")
			},
			CalculationRequest::Person(f) => {
				positive(f.capacity as u64, "수용 인원")?;
				bounded(f.capacity as u64, 100_000, "수용 인원")
			},
			CalculationRequest::Revenue(f) => {
				positive(f.monthly_revenue, "월 매출액")?;
				bounded(f.monthly_revenue, 1_000_000_000_000, "월 매출액")
			},
		}
	}
}

fn positive(value: u64, field: &'static str) -> Result<(), ValidationError> {
	if value == 0 {
		return Err(ValidationError::NonPositive { field });
	}
	Ok(())
}

fn bounded(value: u64, max: u64, field: &'static str) -> Result<(), ValidationError> {
	if value > max {
		return Err(ValidationError::OutOfRange { field });
	}
	Ok(())
}
