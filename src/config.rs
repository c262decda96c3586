//! Configuration management for the travel recommendation service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelRecError;
use crate::search::DEFAULT_RECOGNIZED_COUNTRIES;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelRecConfig {
    /// Catalog document configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Query engine configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Result rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub web: WebConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the catalog comes from and how it is cached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL (http/https) or local path of the catalog JSON document
    #[serde(default = "default_catalog_location")]
    pub location: String,
    /// Request timeout in seconds
    #[serde(default = "default_catalog_timeout")]
    pub timeout_seconds: u32,
    /// Keep fetched catalogs in the persistent cache
    #[serde(default)]
    pub cache_enabled: bool,
    /// Cache TTL in minutes
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_minutes: u32,
    /// Cache directory location
    #[serde(default = "default_cache_location")]
    pub cache_location: String,
}

/// How the country-name rule recognises countries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CountryMatchMode {
    /// Only the names in `recognized_countries`
    #[default]
    Listed,
    /// Any country present in the catalog
    Catalog,
}

/// Query engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub country_match: CountryMatchMode,
    /// Country names recognised in `listed` mode, checked in order
    #[serde(default = "default_recognized_countries")]
    pub recognized_countries: Vec<String>,
}

/// Result rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image shown when a place has no image or its image fails to load
    #[serde(default = "default_fallback_image_url")]
    pub fallback_image_url: String,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_web_host")]
    pub host: String,
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// Directory of static front-end files served outside `/api`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_catalog_location() -> String {
    "data/travel_recommendation_api.json".to_string()
}

fn default_catalog_timeout() -> u32 {
    10
}

fn default_cache_ttl() -> u32 {
    60
}

fn default_cache_location() -> String {
    dirs::cache_dir()
        .map(|dir| dir.join("travel-recommendation"))
        .unwrap_or_else(|| PathBuf::from(".cache/travel-recommendation"))
        .to_string_lossy()
        .into_owned()
}

fn default_recognized_countries() -> Vec<String> {
    DEFAULT_RECOGNIZED_COUNTRIES
        .iter()
        .map(|name| (*name).to_string())
        .collect()
}

fn default_fallback_image_url() -> String {
    "images/placeholder.jpg".to_string()
}

fn default_web_host() -> String {
    "0.0.0.0".to_string()
}

fn default_web_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "frontend/dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            location: default_catalog_location(),
            timeout_seconds: default_catalog_timeout(),
            cache_enabled: false,
            cache_ttl_minutes: default_cache_ttl(),
            cache_location: default_cache_location(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            country_match: CountryMatchMode::default(),
            recognized_countries: default_recognized_countries(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fallback_image_url: default_fallback_image_url(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for TravelRecConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            search: SearchConfig::default(),
            render: RenderConfig::default(),
            web: WebConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TravelRecConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRAVELREC_CATALOG__LOCATION overrides catalog.location
        builder = builder.add_source(
            Environment::with_prefix("TRAVELREC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelRecConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travel-recommendation").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.catalog.location.trim().is_empty() {
            self.catalog.location = default_catalog_location();
        }
        if self.catalog.timeout_seconds == 0 {
            self.catalog.timeout_seconds = default_catalog_timeout();
        }
        if self.catalog.cache_ttl_minutes == 0 {
            self.catalog.cache_ttl_minutes = default_cache_ttl();
        }
        if self.catalog.cache_location.is_empty() {
            self.catalog.cache_location = default_cache_location();
        }
        if self.search.country_match == CountryMatchMode::Listed
            && self.search.recognized_countries.is_empty()
        {
            self.search.recognized_countries = default_recognized_countries();
        }
        if self.render.fallback_image_url.is_empty() {
            self.render.fallback_image_url = default_fallback_image_url();
        }
        if self.web.host.is_empty() {
            self.web.host = default_web_host();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// True when the catalog location is an HTTP(S) URL
    #[must_use]
    pub fn catalog_is_remote(&self) -> bool {
        let location = self.catalog.location.trim();
        location.starts_with("http://") || location.starts_with("https://")
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.catalog.timeout_seconds > 300 {
            return Err(TravelRecError::config(
                "Catalog timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.catalog.cache_ttl_minutes > 10_080 {
            return Err(TravelRecError::config(
                "Cache TTL cannot exceed 10080 minutes (1 week)"
            ).into());
        }

        if self.web.port == 0 {
            return Err(TravelRecError::config("Web port cannot be 0").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelRecError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelRecError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if self.search.recognized_countries.iter().any(|name| name.trim().is_empty()) {
            return Err(TravelRecError::config(
                "Recognized country names cannot be blank"
            ).into());
        }

        Ok(())
    }
}
