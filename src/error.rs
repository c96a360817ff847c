//! Error types for the π pipeline

use thiserror::Error;

/// Result type alias using the crate's error
pub type Result<T> = std::result::Result<T, PiError>;

/// Errors that can occur while generating or accelerating partial products
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PiError {
    /// A caller-supplied parameter is out of range
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// More extrapolation rounds were requested than the window can feed
    #[error("cannot apply {rounds} extrapolation rounds to a window of {available} partial products")]
    WindowTooShort {
        /// Requested rounds
        rounds: usize,
        /// Values present in the window
        available: usize,
    },

    /// Negative square-root operand, zero divisor, or similar internal bug
    #[error("arithmetic invariant violated: {0}")]
    ArithmeticInvariantViolation(String),

    /// Malformed decimal or rounding literal
    #[error("cannot parse {0:?}")]
    Parse(String),

    /// Writing scan output failed
    #[error("output error: {0}")]
    Output(String),
}

impl PiError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True for every contract violation a caller can fix by changing its input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::WindowTooShort { .. })
    }
}

impl From<csv::Error> for PiError {
    fn from(e: csv::Error) -> Self {
        Self::Output(e.to_string())
    }
}

impl From<std::io::Error> for PiError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e.to_string())
    }
}
