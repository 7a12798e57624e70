//! Configuration validation module.
//!
//! Collects every invalid value at load time instead of failing on the
//! first one, so a broken config file is fixed in a single pass.

use crate::AppConfig;
use pagehelper_core::LoggingConfig;
use thiserror::Error;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// A page size setting is zero.
    #[error("Page size '{name}' must be positive, got {value}")]
    NonPositivePageSize { name: String, value: usize },
    /// The default page size is larger than the maximum.
    #[error("Default page size ({default}) cannot exceed max page size ({max})")]
    DefaultExceedsMax { default: usize, max: usize },
    /// The navigation window has no width.
    #[error("Navigation width must be positive")]
    ZeroNavigatePages,
    /// The log filter is empty or names an unknown level.
    #[error("Invalid log level: '{value}' (valid: trace, debug, info, warn, error, off)")]
    InvalidLogLevel { value: String },
}

/// Result of configuration validation containing all errors found.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Adds an error to the result.
    fn add_error(&mut self, error: ConfigValidationError) {
        self.errors.push(error);
    }

    /// Converts to Result, returning Err with all errors if any exist.
    fn into_result(self) -> Result<(), Vec<ConfigValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Levels accepted in log filter directives.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error", "off"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut result = ValidationResult::default();

        Self::validate_pagination(&config.pagination, &mut result);
        Self::validate_logging(&config.logging, &mut result);

        result.into_result()
    }

    /// Validates pagination defaults.
    fn validate_pagination(config: &crate::PaginationConfig, result: &mut ValidationResult) {
        if config.default_page_size == 0 {
            result.add_error(ConfigValidationError::NonPositivePageSize {
                name: "pagination.default_page_size".to_string(),
                value: 0,
            });
        }
        if config.max_page_size == 0 {
            result.add_error(ConfigValidationError::NonPositivePageSize {
                name: "pagination.max_page_size".to_string(),
                value: 0,
            });
        }
        if config.max_page_size > 0 && config.default_page_size > config.max_page_size {
            result.add_error(ConfigValidationError::DefaultExceedsMax {
                default: config.default_page_size,
                max: config.max_page_size,
            });
        }
        if config.navigate_pages == 0 {
            result.add_error(ConfigValidationError::ZeroNavigatePages);
        }
    }

    /// Validates the log filter.
    fn validate_logging(config: &LoggingConfig, result: &mut ValidationResult) {
        let valid = !config.level.trim().is_empty()
            && config.level.split(',').all(Self::is_valid_directive);
        if !valid {
            result.add_error(ConfigValidationError::InvalidLogLevel {
                value: config.level.clone(),
            });
        }
    }

    /// Accepts `level` or `target=level` directives.
    fn is_valid_directive(directive: &str) -> bool {
        let directive = directive.trim();
        let level = directive.rsplit_once('=').map_or(directive, |(target, level)| {
            if target.trim().is_empty() {
                ""
            } else {
                level
            }
        });
        Self::VALID_LOG_LEVELS.contains(&level.trim().to_lowercase().as_str())
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
