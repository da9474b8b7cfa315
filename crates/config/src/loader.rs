//! Configuration loading utilities

use config::{Config, ConfigError, Environment, File};

use crate::Settings;

/// Load configuration from `config/config.toml` (optional) with
/// `PERFEE__`-prefixed environment overrides, e.g. `PERFEE__SERVER__PORT`.
/// `BACKEND_API_URL` wins over both for the backend base URL.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("PERFEE").separator("__"))
		.build()?;

	let mut settings: Settings = s.try_deserialize()?;

	if let Ok(url) = std::env::var("BACKEND_API_URL") {
		if !url.trim().is_empty() {
			settings.backend.base_url = url;
		}
	}

	Ok(settings)
}
