//! Calculation service
//!
//! Validates wizard input, delegates the arithmetic to the backend and
//! attaches a Korean-formatted view for the result step. No pricing rule
//! lives here.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use perfee_types::{
	BackendApi, CalculationMeta, CalculationRequest, CalculationResult, CalculationView,
	ClientError, ValidationError,
};

#[derive(Error, Debug)]
pub enum CalculationError {
	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error(transparent)]
	Backend(#[from] ClientError),
}

/// Calculated fee with both raw amounts and display strings.
#[derive(Debug, Clone)]
pub struct CalculationOutcome {
	pub result: CalculationResult,
	pub view: CalculationView,
	pub meta: Option<CalculationMeta>,
}

pub struct CalculationService {
	backend: Arc<dyn BackendApi>,
}

impl CalculationService {
	pub fn new(backend: Arc<dyn BackendApi>) -> Self {
		Self { backend }
	}

	pub async fn calculate(
		&self,
		request: CalculationRequest,
	) -> Result<CalculationOutcome, CalculationError> {
		request.validate()?;

		let (result, meta) = self.backend.calculate(&request).await?;
		let view = CalculationView::from(&result);

		info!(
			category = %request.category(),
			monthly_fee = result.monthly_fee,
			"calculation delegated to backend"
		);

		Ok(CalculationOutcome { result, view, meta })
	}
}
