//! Error types for the word codec.

use std::fmt;
use std::io;

use emkit_core::ErrorKind;

/// Errors that can occur while encoding or decoding words.
#[derive(Debug)]
pub enum CodecError {
    /// The sink or source failed.
    Io(io::Error),
    /// The source ran out before a full word could be read.
    Truncated,
}

impl CodecError {
    /// The sticky-context kind this error is reported as.
    ///
    /// Running out of input means the record was cut short, so it counts
    /// as corrupt data.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::Truncated => ErrorKind::CorruptData,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated => write!(f, "input truncated mid-record"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => Self::Truncated,
            _ => Self::Io(e),
        }
    }
}
