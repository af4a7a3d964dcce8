//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use emkit_core::ErrorKind;

/// Errors that can occur during segment operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Not enough free space left in the segment.
    CapacityExceeded {
        /// Number of bytes requested, block header included.
        requested: usize,
        /// Free bytes remaining in the segment.
        available: usize,
    },
    /// The segment configuration was rejected.
    InvalidConfig {
        /// What was wrong with it.
        reason: String,
    },
}

impl ArenaError {
    /// The sticky-context kind this error is reported as.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::AllocationFailure
    }
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "segment capacity exceeded: requested {requested} bytes, {available} bytes free"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid segment config: {reason}"),
        }
    }
}

impl Error for ArenaError {}
