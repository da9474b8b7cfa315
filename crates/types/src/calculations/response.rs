//! Calculation result models and display formatting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::category::FeeCategory;
use crate::format::format_won;

/// One itemized line of a calculated fee. The KOSCAP share arrives as its
/// own line in addition to the `koscap_share` rollup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeeLineItem {
	pub label: String,
	pub amount: u64,
}

/// Calculated fee, unwrapped from the backend envelope's `data` field.
/// All amounts are monthly won unless the field says otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
	pub monthly_fee: u64,
	#[serde(default)]
	pub yearly_fee: Option<u64>,
	/// Portion collected on behalf of KOSCAP, itemized separately.
	#[serde(default)]
	pub koscap_share: u64,
	#[serde(default)]
	pub items: Vec<FeeLineItem>,
	/// Backend tier name that matched (e.g. a room-count bracket).
	#[serde(default)]
	pub tier: Option<String>,
}

/// `meta` field of a calculate envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CalculationMeta {
	#[serde(default)]
	pub calculated_at: Option<DateTime<Utc>>,
	/// Human-readable formula description, when the backend provides one.
	#[serde(default)]
	pub basis: Option<String>,
}

/// Line item with the amount formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeeLineItemView {
	pub label: String,
	pub amount_display: String,
}

/// Korean-formatted rendition of a result, built locally for the wizard's
/// result step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CalculationView {
	pub monthly_fee_display: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub yearly_fee_display: Option<String>,
	pub koscap_share_display: String,
	pub items: Vec<FeeLineItemView>,
}

impl From<&CalculationResult> for CalculationView {
	fn from(result: &CalculationResult) -> Self {
		Self {
			monthly_fee_display: format_won(result.monthly_fee),
			yearly_fee_display: result.yearly_fee.map(format_won),
			koscap_share_display: format_won(result.koscap_share),
			items: result
				.items
				.iter()
				.map(|item| FeeLineItemView {
					label: item.label.clone(),
					amount_display: format_won(item.amount),
				})
				.collect(),
		}
	}
}

/// Body of `POST /v1/calculate/{category}` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
	pub category: FeeCategory,
	pub result: CalculationResult,
	pub view: CalculationView,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<CalculationMeta>,
}
