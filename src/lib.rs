//! Perfee Web
//!
//! Web service for the public site of a performance-rights fee (공연권료)
//! collection company. Route handlers mirror the site's pages and actions;
//! every calculation and persistence operation is delegated to an external
//! backend API through the typed client.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

// Core domain types
pub use perfee_types::{
	BackendApi,
	BackendResult,
	CalculationRequest,
	CalculationResponse,
	CalculationResult,
	// Error types
	ClientError,
	Faq,
	FaqCategory,
	FeeCategory,
	Industry,
	Inquiry,
	InquiryRequest,
	Notice,
	NoticePage,
	PageContent,
	Popup,
	PressRelease,
	ValidationError,
};

// Service layer
pub use perfee_service::{
	CalculationError, CalculationService, ContentError, ContentService, InquiryError,
	InquiryService,
};

// Client
pub use perfee_client::HttpBackendClient;

// API layer
pub use perfee_api::{create_router, AppState};

// Config
pub use perfee_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

// Module aliases for qualified access
pub mod types {
	pub use perfee_types::*;
}

pub mod config {
	pub use perfee_config::*;
}

pub mod client {
	pub use perfee_client::*;
}

pub mod service {
	pub use perfee_service::*;
}

pub mod api {
	pub use perfee_api::*;
}

pub mod mocks;

/// Failures while bringing the service up.
#[derive(Error, Debug)]
pub enum BootError {
	#[error("configuration error: {0}")]
	Config(#[from] perfee_config::ConfigError),

	#[error(transparent)]
	Client(#[from] ClientError),

	#[error("server error: {0}")]
	Io(#[from] std::io::Error),
}

/// Builder wiring settings, backend client and router together.
///
/// ```no_run
/// # async fn run() -> Result<(), perfee_web::BootError> {
/// perfee_web::ServerBuilder::new().start_server().await
/// # }
/// ```
#[derive(Default)]
pub struct ServerBuilder {
	settings: Option<Settings>,
	backend: Option<Arc<dyn BackendApi>>,
}

impl ServerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Substitute the backend implementation (tests use `mocks::MockBackend`).
	pub fn with_backend(mut self, backend: Arc<dyn BackendApi>) -> Self {
		self.backend = Some(backend);
		self
	}

	fn resolve(self) -> Result<(Settings, Arc<dyn BackendApi>), BootError> {
		let settings = match self.settings {
			Some(settings) => settings,
			None => load_config()?,
		};

		let backend: Arc<dyn BackendApi> = match self.backend {
			Some(backend) => backend,
			None => Arc::new(HttpBackendClient::new(
				&settings.backend.base_url,
				settings.timeouts.request_ms,
				settings.timeouts.connect_ms,
			)?),
		};

		Ok((settings, backend))
	}

	/// Build the router and shared state without binding a listener.
	pub fn build(self) -> Result<(Router, AppState), BootError> {
		let (_settings, backend) = self.resolve()?;
		let state = AppState::new(backend);
		let router = create_router().with_state(state.clone());
		Ok((router, state))
	}

	/// Bind and serve until ctrl-c.
	pub async fn start_server(self) -> Result<(), BootError> {
		let (settings, backend) = self.resolve()?;
		log_service_info(&settings);

		let state = AppState::new(backend);
		let router = create_router().with_state(state);

		let bind_address = settings.bind_address();
		let listener = TcpListener::bind(&bind_address).await?;
		log_startup_complete(&bind_address);

		axum::serve(listener, router)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

async fn shutdown_signal() {
	// Errors installing the handler leave the server running without
	// graceful shutdown, which is the best remaining option.
	let _ = tokio::signal::ctrl_c().await;
}
