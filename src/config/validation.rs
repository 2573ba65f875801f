//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{AttendHubError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database_config(&settings.database)?;
    validate_certificate_config(&settings.certificates)?;
    validate_defaults_config(&settings.defaults)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(AttendHubError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(AttendHubError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(AttendHubError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate certificate configuration
fn validate_certificate_config(config: &super::CertificateConfig) -> Result<()> {
    if config.number_prefix.is_empty() {
        return Err(AttendHubError::Config(
            "Certificate number prefix is required".to_string()
        ));
    }

    if config.number_prefix.contains(char::is_whitespace) {
        return Err(AttendHubError::Config(
            "Certificate number prefix cannot contain whitespace".to_string()
        ));
    }

    Ok(())
}

/// Validate defaults configuration
fn validate_defaults_config(config: &super::DefaultsConfig) -> Result<()> {
    if config.organization.is_empty() {
        return Err(AttendHubError::Config(
            "Default organization is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AttendHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AttendHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_database_url() {
        let mut settings = Settings::default();
        settings.database.url = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_bad_connection_bounds() {
        let mut settings = Settings::default();
        settings.database.min_connections = 20;
        settings.database.max_connections = 5;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_blank_certificate_prefix() {
        let mut settings = Settings::default();
        settings.certificates.number_prefix = String::new();
        assert!(validate_settings(&settings).is_err());

        settings.certificates.number_prefix = "CERT 2025".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
