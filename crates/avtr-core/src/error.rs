//! Validation errors raised by the enumerated setters.

use thiserror::Error;

/// Rejected value for one of the enumerated avatar options.
///
/// Numeric options never produce an error; they are normalized instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvtrError {
    #[error("invalid format '{0}': expected one of png, jpg, gif")]
    InvalidFormat(String),

    #[error("invalid shape '{0}': expected one of square, circle")]
    InvalidShape(String),

    #[error("invalid theme '{0}': expected one of material, flat")]
    InvalidTheme(String),

    #[error("invalid text case '{0}': expected one of lower, upper, title")]
    InvalidTextCase(String),

    #[error("invalid font '{0}': expected one of open-sans, source-sans-pro, roboto")]
    InvalidFont(String),
}

impl AvtrError {
    /// The input that was rejected.
    pub fn value(&self) -> &str {
        match self {
            AvtrError::InvalidFormat(v)
            | AvtrError::InvalidShape(v)
            | AvtrError::InvalidTheme(v)
            | AvtrError::InvalidTextCase(v)
            | AvtrError::InvalidFont(v) => v,
        }
    }
}
