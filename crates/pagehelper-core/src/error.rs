//! Unified error types for page transformation and configuration.

use crate::BoxError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for PageHelper.
///
/// Every operation reports failures synchronously through this enum; nothing
/// is retried and no partially transformed page is ever returned.
#[derive(Error, Debug)]
pub enum PageHelperError {
    // ============ Argument Errors ============
    /// A required argument was absent or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Transformation Errors ============
    /// The target record type could not be constructed
    #[error("Cannot construct {type_name}: {message}")]
    Construction {
        type_name: &'static str,
        message: String,
    },

    /// A caller-supplied mapping function failed
    #[error("Mapping error: {0}")]
    Mapping(#[source] BoxError),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageHelperError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Construction { .. } => "CONSTRUCTION_ERROR",
            Self::Mapping(_) => "MAPPING_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a construction error for the target type `R`.
    #[must_use]
    pub fn construction<R, T: ToString>(message: T) -> Self {
        Self::Construction {
            type_name: std::any::type_name::<R>(),
            message: message.to_string(),
        }
    }

    /// Wraps a mapper failure.
    #[must_use]
    pub fn mapping<E: Into<BoxError>>(source: E) -> Self {
        Self::Mapping(source.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error was caused by the caller's input rather than
    /// by a mapper, factory, or the environment.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::Validation(_))
    }
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}
