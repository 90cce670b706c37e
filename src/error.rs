use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoboxError {
    /// The caller supplied an unusable combination of inputs, or a precision/depth outside its
    /// allowed range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A code could not be parsed.
    #[error("Invalid code {code:?}: {reason}")]
    InvalidCode {
        /// The rejected input, verbatim.
        code: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl GeoboxError {
    pub(crate) fn invalid_code(code: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoboxError>;
