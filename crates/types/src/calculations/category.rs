//! Pricing categories of the fee-calculation wizard

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::errors::ValidationError;

/// One backend calculate endpoint per category:
/// `POST /api/calculate/{category.as_path()}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum FeeCategory {
	/// In-flight music, priced per passenger
	Aircraft,
	/// General venues priced by floor area
	Area,
	/// Game rooms priced per installed device
	Gameroom,
	/// Golf courses priced per facility size
	Golf,
	/// Hotels and condos priced by room count and grade
	Hotel,
	/// Karaoke rooms priced per room
	Karaoke,
	/// Venues priced by admitted capacity
	Person,
	/// Venues priced as a percentage of revenue
	Revenue,
}

impl FeeCategory {
	pub const ALL: [FeeCategory; 8] = [
		FeeCategory::Aircraft,
		FeeCategory::Area,
		FeeCategory::Gameroom,
		FeeCategory::Golf,
		FeeCategory::Hotel,
		FeeCategory::Karaoke,
		FeeCategory::Person,
		FeeCategory::Revenue,
	];

	/// Path segment of the backend calculate endpoint.
	pub fn as_path(&self) -> &'static str {
		match self {
			FeeCategory::Aircraft => "aircraft",
			FeeCategory::Area => "area",
			FeeCategory::Gameroom => "gameroom",
			FeeCategory::Golf => "golf",
			FeeCategory::Hotel => "hotel",
			FeeCategory::Karaoke => "karaoke",
			FeeCategory::Person => "person",
			FeeCategory::Revenue => "revenue",
		}
	}

	/// Korean display name used by the wizard.
	pub fn label(&self) -> &'static str {
		match self {
			FeeCategory::Aircraft => "항공기",
			FeeCategory::Area => "일반매장",
			FeeCategory::Gameroom => "게임장",
			FeeCategory::Golf => "골프장",
			FeeCategory::Hotel => "호텔·콘도",
			FeeCategory::Karaoke => "노래연습장",
			FeeCategory::Person => "인원 기준 시설",
			FeeCategory::Revenue => "매출액 기준 시설",
		}
	}
}

impl fmt::Display for FeeCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_path())
	}
}

impl FromStr for FeeCategory {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"aircraft" => Ok(FeeCategory::Aircraft),
			"area" => Ok(FeeCategory::Area),
			"gameroom" => Ok(FeeCategory::Gameroom),
			"golf" => Ok(FeeCategory::Golf),
			"hotel" => Ok(FeeCategory::Hotel),
			"karaoke" => Ok(FeeCategory::Karaoke),
			"person" => Ok(FeeCategory::Person),
			"revenue" => Ok(FeeCategory::Revenue),
			other => Err(ValidationError::UnknownCategory {
				category: other.to_string(),
			}),
		}
	}
}
