//! Error types for the Rental Agreement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine distinguishes two failure families: [`ValidationError`] for bad
//! user input (recoverable, the caller can re-prompt) and [`ConfigError`] for
//! broken reference data (effectively fatal for the process, since the
//! catalog or calendar itself is wrong). [`EngineError`] wraps both so the
//! distinction survives every boundary.

use thiserror::Error;

/// Errors caused by invalid checkout inputs.
///
/// These are recoverable: the computation is aborted before any partial
/// agreement is built, and the caller can correct the input and retry.
///
/// # Example
///
/// ```
/// use rental_engine::error::ValidationError;
///
/// let error = ValidationError::UnknownToolCode {
///     code: "XXXX".to_string(),
/// };
/// assert_eq!(error.to_string(), "There is no tool with code: XXXX");
/// ```
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The tool code did not resolve to a tool in the catalog.
    #[error("There is no tool with code: {code}")]
    UnknownToolCode {
        /// The tool code that was not found.
        code: String,
    },

    /// The checkout date could not be parsed with the configured format.
    #[error("'{input}' is not a valid date for format '{format}'")]
    InvalidCheckoutDate {
        /// The raw date input.
        input: String,
        /// The configured date format it was parsed against.
        format: String,
    },

    /// The rental duration was below the minimum of one day.
    #[error("Rental period must be at least one day (got {days})")]
    InvalidRentalDuration {
        /// The rejected day count.
        days: i64,
    },

    /// The discount was not a whole percentage between 0 and 100.
    #[error("Discount must be a percentage between 0 and 100 (got {percent})")]
    InvalidDiscountPercent {
        /// The rejected percent value.
        percent: i64,
    },
}

/// Errors caused by missing or malformed reference data.
///
/// Any of these means the catalog, holiday, or settings configuration is
/// broken; callers should halt rather than re-prompt.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    Parse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tool references a tool type that is not defined.
    #[error("Tool '{tool_code}' references unknown tool type: {type_name}")]
    UnknownToolType {
        /// The tool carrying the dangling reference.
        tool_code: String,
        /// The type name that does not exist.
        type_name: String,
    },

    /// A holiday specification failed validation or resolution.
    #[error("Invalid holiday spec '{name}': {message}")]
    InvalidHolidaySpec {
        /// The holiday name from the configuration.
        name: String,
        /// What made the spec invalid.
        message: String,
    },

    /// A settings field held a value the engine cannot use.
    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting {
        /// The settings key that was invalid.
        key: String,
        /// What made the value invalid.
        message: String,
    },
}

/// The main error type for the Rental Agreement Engine.
///
/// Transparent wrapper over the two error families, so messages pass through
/// unchanged while the kind remains matchable.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Bad user input; the caller may correct it and retry.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Broken reference data; the caller should halt.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tool_code_displays_code() {
        let error = ValidationError::UnknownToolCode {
            code: "JAKX".to_string(),
        };
        assert_eq!(error.to_string(), "There is no tool with code: JAKX");
    }

    #[test]
    fn test_invalid_checkout_date_displays_input_and_format() {
        let error = ValidationError::InvalidCheckoutDate {
            input: "13/45/20".to_string(),
            format: "%m/%d/%y".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "'13/45/20' is not a valid date for format '%m/%d/%y'"
        );
    }

    #[test]
    fn test_invalid_rental_duration_displays_days() {
        let error = ValidationError::InvalidRentalDuration { days: 0 };
        assert_eq!(
            error.to_string(),
            "Rental period must be at least one day (got 0)"
        );
    }

    #[test]
    fn test_invalid_discount_percent_displays_percent() {
        let error = ValidationError::InvalidDiscountPercent { percent: 101 };
        assert_eq!(
            error.to_string(),
            "Discount must be a percentage between 0 and 100 (got 101)"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ConfigError::NotFound {
            path: "/missing/holidays.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/holidays.yaml"
        );
    }

    #[test]
    fn test_unknown_tool_type_displays_both_keys() {
        let error = ConfigError::UnknownToolType {
            tool_code: "CHNS".to_string(),
            type_name: "Chainzaw".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Tool 'CHNS' references unknown tool type: Chainzaw"
        );
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let error: EngineError = ValidationError::InvalidRentalDuration { days: -3 }.into();
        assert_eq!(
            error.to_string(),
            "Rental period must be at least one day (got -3)"
        );
    }

    #[test]
    fn test_engine_error_kinds_are_matchable() {
        let validation: EngineError = ValidationError::InvalidDiscountPercent { percent: 200 }.into();
        let config: EngineError = ConfigError::NotFound {
            path: "x".to_string(),
        }
        .into();

        assert!(matches!(validation, EngineError::Validation(_)));
        assert!(matches!(config, EngineError::Config(_)));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<ValidationError>();
        assert_error::<ConfigError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(ConfigError::NotFound {
                path: "/test".to_string(),
            }
            .into())
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
