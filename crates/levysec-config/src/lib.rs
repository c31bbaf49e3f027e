//! Configuration management for levysec
//!
//! Centralized configuration handling with support for:
//! - Default values
//! - Configuration files (TOML)
//! - Environment variables
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables (`LEVYSEC_` prefix)
//! 2. Configuration file
//! 3. Default values

mod app;

// Re-export main types
pub use app::{AppConfig, LogLevel};
pub use levysec_core::MultiScaleConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure containing all configuration categories
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application-wide settings
    pub app: AppConfig,

    /// Multi-scale extraction parameters
    pub engine: MultiScaleConfig,
}

impl Settings {
    /// Load configuration from multiple sources with proper precedence
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&Settings::default())?)
            // Add configuration file if it exists
            .add_source(
                config::File::with_name("levysec")
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            // Add environment variables with LEVYSEC_ prefix
            .add_source(
                config::Environment::with_prefix("LEVYSEC")
                    .prefix_separator("_")
                    .separator("_"),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration from a specific file path
    pub fn load_from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::from(path).format(config::FileFormat::Toml));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
