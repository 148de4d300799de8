//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{Result, TawzeeError};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_storage_config(&settings.storage)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(TawzeeError::Config(
            "Bot token is required (set TAWZEE_BOT__TOKEN or TELEGRAM_TOKEN)".to_string(),
        ));
    }

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.registrations_path.is_empty() {
        return Err(TawzeeError::Config(
            "Registrations path is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate session configuration
///
/// The idle timeout is later converted to a signed chrono duration, so it
/// is capped here as well as floored.
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.idle_timeout_minutes == 0 {
        return Err(TawzeeError::Config(
            "Session idle timeout must be greater than 0".to_string(),
        ));
    }

    if config.idle_timeout_minutes > 60 * 24 * 365 {
        return Err(TawzeeError::Config(
            "Session idle timeout cannot be greater than a year".to_string(),
        ));
    }

    if config.sweep_interval_seconds == 0 {
        return Err(TawzeeError::Config(
            "Session sweep interval must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TawzeeError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TawzeeError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    if config.directory.is_empty() {
        return Err(TawzeeError::Config("Log directory is required".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_need_only_a_token() {
        let mut settings = Settings::default();
        assert!(validate_settings(&settings).is_err());

        settings.bot.token = "123456:test-token".to_string();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_zero_intervals_are_rejected() {
        let mut settings = Settings::default();
        settings.bot.token = "123456:test-token".to_string();

        settings.session.sweep_interval_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_oversized_idle_timeout_is_rejected() {
        let mut settings = Settings::default();
        settings.bot.token = "123456:test-token".to_string();

        // Would wrap negative in the signed conversion and sweep everything
        settings.session.idle_timeout_minutes = u64::MAX;
        assert!(validate_settings(&settings).is_err());

        settings.session.idle_timeout_minutes = 60 * 24 * 365;
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut settings = Settings::default();
        settings.bot.token = "123456:test-token".to_string();

        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
