//! Configuration settings structures
//!
//! Every section has serde defaults so the service starts with no config
//! file at all; `config/config.toml` and environment variables override.

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub backend: BackendSettings,
	pub timeouts: TimeoutSettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// HTTP server bind configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

/// External backend API configuration. A single base URL for every call;
/// `BACKEND_API_URL` overrides it at load time.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BackendSettings {
	pub base_url: String,
}

impl Default for BackendSettings {
	fn default() -> Self {
		Self {
			base_url: "http://localhost:3001".to_string(),
		}
	}
}

/// HTTP client timeouts
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Whole-request timeout for backend calls
	pub request_ms: u64,
	/// TCP connect timeout
	pub connect_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			request_ms: 10_000,
			connect_ms: 3_000,
		}
	}
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
}

impl Default for EnvironmentSettings {
	fn default() -> Self {
		Self {
			profile: EnvironmentProfile::Development,
			debug: false,
		}
	}
}

/// Logging configuration consumed by the tracing-subscriber setup
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	/// Default env-filter directive when RUST_LOG is unset
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

impl Settings {
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_point_at_local_backend() {
		let settings = Settings::default();
		assert_eq!(settings.backend.base_url, "http://localhost:3001");
		assert_eq!(settings.bind_address(), "0.0.0.0:3000");
		assert!(!settings.is_production());
	}

	#[test]
	fn partial_toml_fills_in_defaults() {
		let settings: Settings =
			toml_like(r#"{"server":{"port":8000},"environment":{"profile":"production"}}"#);
		assert_eq!(settings.server.port, 8000);
		assert_eq!(settings.server.host, "0.0.0.0");
		assert!(settings.is_production());
		assert_eq!(settings.timeouts.request_ms, 10_000);
	}

	fn toml_like(raw: &str) -> Settings {
		serde_json::from_str(raw).unwrap()
	}
}
