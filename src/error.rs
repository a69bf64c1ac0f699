//! Error types for the HRIS.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only record creation and configuration loading can fail; every other
//! registry operation degrades to a sentinel value instead.

use thiserror::Error;

/// The main error type for the HRIS.
///
/// # Example
///
/// ```
/// use hris::error::HrisError;
///
/// let error = HrisError::InvalidArgument {
///     message: "Unknown employee type: intern".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid argument: Unknown employee type: intern");
/// ```
#[derive(Debug, Error)]
pub enum HrisError {
    /// An argument was outside the accepted set, such as an unknown employee type tag.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// A description of the rejected argument.
        message: String,
    },

    /// Role parameters were supplied for a different employee kind than requested.
    #[error("Parameter mismatch: '{kind}' employees cannot be created from {params} parameters")]
    ParameterMismatch {
        /// The employee kind named by the type tag.
        kind: String,
        /// The employee kind the supplied parameters belong to.
        params: String,
    },

    /// A roster entry omitted a field its employee kind requires.
    #[error("Missing parameter '{field}' for employee '{employee_id}'")]
    MissingParameter {
        /// The identifier of the incomplete roster entry.
        employee_id: String,
        /// The name of the missing field.
        field: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return HrisError.
pub type HrisResult<T> = Result<T, HrisError>;
