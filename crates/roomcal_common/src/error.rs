// --- File: crates/roomcal_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all roomcal errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate can extend this by implementing
/// From<SpecificError> for RoomcalError.
#[derive(Error, Debug)]
pub enum RoomcalError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for RoomcalError {
    fn status_code(&self) -> u16 {
        match self {
            RoomcalError::ParseError(_) => 400,
            RoomcalError::ConfigError(_) => 500,
            RoomcalError::ValidationError(_) => 400,
            RoomcalError::ExternalServiceError { .. } => 502,
            RoomcalError::InternalError(_) => 500,
        }
    }
}

// Common error conversions
impl From<serde_json::Error> for RoomcalError {
    fn from(err: serde_json::Error) -> Self {
        RoomcalError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for RoomcalError {
    fn from(err: std::io::Error) -> Self {
        RoomcalError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> RoomcalError {
    RoomcalError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> RoomcalError {
    RoomcalError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> RoomcalError {
    RoomcalError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> RoomcalError {
    RoomcalError::InternalError(message.to_string())
}
