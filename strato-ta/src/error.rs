//! Error types shared by the indicator functions.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaError>;

/// Errors raised by indicator computations.
///
/// Every failure is local to a single call: a function either returns a
/// complete series or one of these errors, never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaError {
    /// A parameter was outside its accepted domain (zero length, unknown
    /// strategy token).
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The input series is too short for the requested window.
    #[error("insufficient data: need {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A series was built from an index and a value vector of different sizes.
    #[error("length mismatch: {index} index keys for {values} values")]
    LengthMismatch { index: usize, values: usize },

    /// Two series were combined element-wise but their index keys differ.
    #[error("series index mismatch: {0}")]
    IndexMismatch(String),
}

impl TaError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        TaError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
