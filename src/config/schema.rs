//! Configuration schema types
//!
//! This module defines the configuration structure for Cloak.

use crate::redaction::{PhoneRegion, PiiType, RedactionOptions, RedactionStyle};
use serde::{Deserialize, Serialize};

/// Main Cloak configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CloakConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Redaction settings
    #[serde(default)]
    pub redaction: RedactionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CloakConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.redaction.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Redaction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// PII types to detect
    #[serde(default = "default_enabled_types")]
    pub enabled_types: Vec<PiiType>,

    /// Redaction style (mask or label)
    #[serde(default)]
    pub style: RedactionStyle,

    /// Filler character used by the mask style
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// Default region assumed for phone numbers without a country code
    #[serde(default)]
    pub phone_region: PhoneRegion,
}

impl RedactionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled_types.is_empty() {
            return Err("redaction.enabled_types must not be empty".to_string());
        }
        Ok(())
    }

    /// Convert to engine options
    pub fn to_options(&self) -> RedactionOptions {
        RedactionOptions {
            enabled_types: self.enabled_types.clone(),
            style: self.style,
            mask_char: self.mask_char,
        }
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            enabled_types: default_enabled_types(),
            style: RedactionStyle::default(),
            mask_char: default_mask_char(),
            phone_region: PhoneRegion::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "cloak".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_enabled_types() -> Vec<PiiType> {
    PiiType::priority_order().to_vec()
}

fn default_mask_char() -> char {
    '█'
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
