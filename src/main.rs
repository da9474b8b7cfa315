//! Perfee Web Server
//!
//! Main entry point for the web service

use perfee_web::{load_config, ServerBuilder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let settings = load_config()?;

	// RUST_LOG wins over the configured level.
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new(&settings.logging.level)),
		)
		.init();

	ServerBuilder::new()
		.with_settings(settings)
		.start_server()
		.await?;
	Ok(())
}
