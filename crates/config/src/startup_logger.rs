//! Service startup logging

use std::env;

use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info(settings: &Settings) {
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Perfee Web Service Starting ===");
	info!("🚀 Service: perfee-web v{}", service_version);
	info!("💻 Platform: {} / {}", env::consts::OS, env::consts::ARCH);
	info!("🌍 Profile: {:?}", settings.environment.profile);
	info!("🔗 Backend API: {}", settings.backend.base_url);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Filter: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion once the listener is bound
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Perfee Web Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Perfee Web Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}
