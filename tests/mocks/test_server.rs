//! Test server for integration tests
//!
//! Spawns the full router on an ephemeral port, backed by the in-process
//! mock backend instead of the real REST API.

use std::sync::Arc;

use perfee_web::mocks::MockBackend;
use perfee_web::{ServerBuilder, Settings};
use tokio::task::JoinHandle;

pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with the default mock backend
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_backend(MockBackend::new()).await
	}

	/// Spawn a test server whose backend fails every call
	#[allow(dead_code)]
	pub async fn spawn_failing(message: &str) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_backend(MockBackend::failing(message)).await
	}

	pub async fn spawn_with_backend(
		backend: MockBackend,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (router, _state) = ServerBuilder::new()
			.with_settings(Settings::default())
			.with_backend(Arc::new(backend))
			.build()?;

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;

		let handle = tokio::spawn(async move {
			axum::serve(listener, router)
				.await
				.expect("test server crashed");
		});

		Ok(Self {
			base_url: format!("http://{addr}"),
			handle,
		})
	}

	pub fn abort(&self) {
		self.handle.abort();
	}
}
