//! Recoverable errors raised while creating sample buffers.
//!
//! Precondition violations (out-of-range accumulate, oscillator frequencies at
//! or above Nyquist) are not represented here: they panic.

/// Errors returned by [`SampleBuffer`](crate::SampleBuffer) construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A duration or sample rate outside its valid domain.
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The value that was passed.
        value: i64,
    },
    /// The requested sample count could not be allocated.
    Allocation {
        /// Number of samples requested.
        samples: u128,
    },
}

impl BufferError {
    pub(crate) fn invalid(name: &'static str, value: i64) -> Self {
        Self::InvalidArgument { name, value }
    }
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument { name, value } => {
                write!(f, "invalid argument: {name} = {value}")
            }
            Self::Allocation { samples } => {
                write!(f, "cannot allocate a buffer of {samples} samples")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BufferError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = BufferError::invalid("duration_millis", -5);
        assert_eq!(err.to_string(), "invalid argument: duration_millis = -5");
    }

    #[test]
    fn allocation_display() {
        let err = BufferError::Allocation { samples: 42 };
        assert_eq!(err.to_string(), "cannot allocate a buffer of 42 samples");
    }
}
