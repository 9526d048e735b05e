//! Error types for period generation.
//!
//! Every failure is raised synchronously and carries a human-readable message.
//! There is no partial success: a request either yields the complete sequence
//! of period records or one of these errors.

/// Result type for period generation.
pub type PeriodResult<T> = Result<T, PeriodError>;

/// Error type for period generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// The requested date range is malformed, empty or too long, or names an
    /// unknown timezone.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// The caller asked for something other than the supported request kind.
    #[error("Unsupported request: {0}")]
    UnsupportedRequest(String),

    /// Calendar arithmetic failed unexpectedly (e.g. a date left chrono's
    /// representable range). Indicates a bug rather than bad input.
    #[error("Internal computation error: {0}")]
    InternalComputation(String),
}

impl PeriodError {
    pub fn invalid_range(message: impl Into<String>) -> Self {
        PeriodError::InvalidRange(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        PeriodError::UnsupportedRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PeriodError::InternalComputation(message.into())
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PeriodError::InvalidRange(_) => "InvalidRangeError",
            PeriodError::UnsupportedRequest(_) => "UnsupportedRequestError",
            PeriodError::InternalComputation(_) => "InternalComputationError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = PeriodError::invalid_range("'abc' is not a date");
        assert_eq!(err.to_string(), "Invalid range: 'abc' is not a date");

        let err = PeriodError::unsupported("requestedType 'people'");
        assert!(err.to_string().starts_with("Unsupported request"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PeriodError::invalid_range("x").kind(), "InvalidRangeError");
        assert_eq!(PeriodError::unsupported("x").kind(), "UnsupportedRequestError");
        assert_eq!(PeriodError::internal("x").kind(), "InternalComputationError");
    }
}
