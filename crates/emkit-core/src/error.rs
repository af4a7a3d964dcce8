//! Error kinds and recorded error entries.
//!
//! Every emkit operation reports failure by raising an [`ErrorKind`] on a
//! [`Context`](crate::Context). The context keeps the raised entries as
//! [`ErrorRecord`]s until its owner resets it.

use std::error::Error;
use std::fmt;
use std::panic::Location;

/// Failure categories shared by the arena, codec, and array layers.
///
/// Codes are stable and may be surfaced to hosts that only understand
/// integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A resize, copy, or create on an existing array asked for more
    /// elements than its storage holds.
    InsufficientCapacity,
    /// The arena has too little free space left for a first allocation.
    AllocationFailure,
    /// A decoded record's declared size disagrees with its contents, or
    /// the input ended early.
    CorruptData,
    /// An alignment request was zero or not a power of two.
    InvalidAlignment,
    /// Element access outside the logical length.
    OutOfRange,
    /// The byte cursor failed for a reason other than running out of input.
    Io,
}

impl ErrorKind {
    /// Stable numeric code for this kind.
    pub const fn code(self) -> u32 {
        match self {
            Self::InsufficientCapacity => 1,
            Self::AllocationFailure => 2,
            Self::CorruptData => 3,
            Self::InvalidAlignment => 4,
            Self::OutOfRange => 5,
            Self::Io => 6,
        }
    }

    /// Inverse of [`ErrorKind::code`].
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::InsufficientCapacity),
            2 => Some(Self::AllocationFailure),
            3 => Some(Self::CorruptData),
            4 => Some(Self::InvalidAlignment),
            5 => Some(Self::OutOfRange),
            6 => Some(Self::Io),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientCapacity => write!(f, "insufficient capacity"),
            Self::AllocationFailure => write!(f, "allocation failure"),
            Self::CorruptData => write!(f, "corrupt data"),
            Self::InvalidAlignment => write!(f, "invalid alignment"),
            Self::OutOfRange => write!(f, "index out of range"),
            Self::Io => write!(f, "I/O failure"),
        }
    }
}

/// One error raised on a [`Context`](crate::Context).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorRecord {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable detail supplied by the raising operation.
    pub message: String,
    /// Source location of the call that raised the error.
    pub location: &'static Location<'static>,
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (code {}) at {}:{}: {}",
            self.kind,
            self.kind.code(),
            self.location.file(),
            self.location.line(),
            self.message
        )
    }
}

impl Error for ErrorRecord {}
