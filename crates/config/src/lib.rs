//! Perfee Configuration
//!
//! Settings structures, file/environment loading, and startup logging.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use config::ConfigError;
pub use loader::load_config;
pub use settings::{
	BackendSettings, EnvironmentProfile, EnvironmentSettings, LoggingSettings, ServerSettings,
	Settings, TimeoutSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
