//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CloakConfig;
use crate::domain::errors::CloakError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CloakConfig
/// 4. Applies environment variable overrides (CLOAK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<CloakConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CloakError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CloakError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: CloakConfig = toml::from_str(&contents)
        .map_err(|e| CloakError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config
        .validate()
        .map_err(|e| CloakError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Loads configuration from a TOML file, falling back to defaults when the
/// file does not exist.
///
/// The `redact` and `scan` commands work out of the box without a config
/// file; `validate-config` uses the strict [`load_config`] instead.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<CloakConfig> {
    let path = path.as_ref();

    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = CloakConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate().map_err(CloakError::Configuration)?;
        Ok(config)
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CloakError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the CLOAK_* prefix
///
/// Environment variables follow the pattern: CLOAK_<SECTION>_<KEY>
/// For example: CLOAK_REDACTION_STYLE, CLOAK_LOGGING_LOCAL_PATH
fn apply_env_overrides(config: &mut CloakConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("CLOAK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Redaction overrides
    if let Ok(val) = std::env::var("CLOAK_REDACTION_ENABLED_TYPES") {
        let types: std::result::Result<Vec<_>, _> =
            val.split(',').map(|s| s.trim().parse()).collect();
        config.redaction.enabled_types = types.map_err(CloakError::Configuration)?;
    }
    if let Ok(val) = std::env::var("CLOAK_REDACTION_STYLE") {
        config.redaction.style = val.parse().map_err(CloakError::Configuration)?;
    }
    if let Ok(val) = std::env::var("CLOAK_REDACTION_PHONE_REGION") {
        config.redaction.phone_region = val.parse().map_err(CloakError::Configuration)?;
    }
    if let Ok(val) = std::env::var("CLOAK_REDACTION_MASK_CHAR") {
        let mut chars = val.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.redaction.mask_char = c,
            _ => {
                return Err(CloakError::Configuration(format!(
                    "CLOAK_REDACTION_MASK_CHAR must be a single character, got: {val}"
                )))
            }
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CLOAK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CLOAK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("CLOAK_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("CLOAK_TEST_VAR", "test_value");
        let input = "name = \"${CLOAK_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "name = \"test_value\"\n");
        std::env::remove_var("CLOAK_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("CLOAK_MISSING_VAR");
        let input = "name = \"${CLOAK_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("CLOAK_COMMENTED_VAR");
        let input = "# name = \"${CLOAK_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent.toml").unwrap();
        assert_eq!(config.application.name, "cloak");
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
name = "cloak"
log_level = "debug"

[redaction]
enabled_types = ["EMAIL", "PHONE", "ADDRESS"]
style = "label"
phone_region = "GB"

[logging]
local_enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.redaction.enabled_types.len(), 3);
        assert_eq!(
            config.redaction.phone_region,
            crate::redaction::PhoneRegion::Gb
        );
    }

    #[test]
    fn test_load_config_invalid_style() {
        let toml_content = r#"
[redaction]
style = "blackout"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
