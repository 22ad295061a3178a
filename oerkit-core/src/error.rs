use thiserror::Error;

/// Main error type for OER/PER codec operations
///
/// Every codec call yields a `CodecResult`. `Ok` carries the exact number of
/// bytes (or bits) produced or consumed. `Starved` is the only recoverable
/// failure: the caller supplies more input and retries from the same offset.
/// All other variants are permanent for the call that produced them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Input starved: need {needed} bytes, have {available}")]
    Starved { needed: usize, available: usize },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("Integer overflow: {0}")]
    Overflow(String),

    /// Counted in bytes for byte sinks and in bits for bit sinks
    #[error("Buffer overflow: need {needed} more, only {available} free")]
    BufferOverflow { needed: usize, available: usize },

    #[error("Truncated bit data: need {needed} bits, have {available}")]
    Truncated { needed: usize, available: usize },
}

impl CodecError {
    /// Whether the call may succeed when retried with more input
    pub fn is_starved(&self) -> bool {
        matches!(self, CodecError::Starved { .. })
    }
}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starved_is_recoverable() {
        let err = CodecError::Starved { needed: 4, available: 1 };
        assert!(err.is_starved());
        assert_eq!(err.to_string(), "Input starved: need 4 bytes, have 1");
    }

    #[test]
    fn test_other_errors_are_permanent() {
        assert!(!CodecError::InvalidData("bad".to_string()).is_starved());
        assert!(!CodecError::Truncated { needed: 8, available: 3 }.is_starved());
    }
}
