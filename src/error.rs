//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`AppError`] as the
//! error type.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`AppError`] as the error type.
pub type Result<T> = std::result::Result<T, AppError>;

/// The unified error type for all crate errors.
///
/// # Example
///
/// ```rust,no_run
/// use sentilog::error::AppError;
///
/// fn handle_error(e: AppError) {
///     match &e {
///         AppError::EmptyInput => {
///             // Blank input - warn the user, nothing was stored
///         }
///         AppError::Persistence(_) => {
///             // Log file unwritable - the prediction was NOT saved
///         }
///         AppError::Prediction(_) => {
///             // Classifier failed on this input
///         }
///         AppError::Download(_) => {
///             // Network issue - retry may help
///         }
///         AppError::Device(_) => {
///             // GPU unavailable - fall back to CPU
///         }
///         _ => {
///             // Future error variants
///         }
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Blank or whitespace-only input. No prediction or store access happens.
    #[error("input is empty")]
    EmptyInput,

    /// Prediction log could not be written. The record was not saved.
    #[error("{0}")]
    Persistence(String),

    /// The classifier failed. Surfaced as-is, no retry.
    #[error("{0}")]
    Prediction(String),

    /// Network or download failure. Retry may help.
    #[error("{0}")]
    Download(String),

    /// Tokenization failure. Check input text.
    #[error("{0}")]
    Tokenization(String),

    /// Device initialization failure. Fall back to CPU.
    #[error("{0}")]
    Device(String),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl From<hf_hub::api::sync::ApiError> for AppError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        AppError::Download(format!("HuggingFace API error: {}", value))
    }
}

impl From<candle_core::Error> for AppError {
    fn from(value: candle_core::Error) -> Self {
        AppError::Prediction(value.to_string())
    }
}
