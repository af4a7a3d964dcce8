//! The sticky error context threaded through every emkit operation.
//!
//! A [`Context`] starts clean. The first failure inside any operation
//! raises an error on it; from then on every operation that receives the
//! context returns immediately with a default result. Callers can issue a
//! long chain of calls and inspect the context once at a checkpoint:
//!
//! ```
//! use emkit_core::{Context, ErrorKind};
//!
//! let mut ctx = Context::new();
//! ctx.raise(ErrorKind::AllocationFailure, "arena exhausted");
//! // Later operations see the error and do nothing.
//! assert!(ctx.is_in_error());
//! assert_eq!(ctx.error_kind(), Some(ErrorKind::AllocationFailure));
//!
//! // Only the owner clears it.
//! ctx.reset();
//! assert!(ctx.check().is_ok());
//! ```

use std::panic::Location;

use smallvec::SmallVec;

use crate::error::{ErrorKind, ErrorRecord};

/// Function invoked once for each raised error.
pub type ErrorHandler = fn(&ErrorRecord);

/// Sticky failure state for a chain of operations.
#[derive(Debug, Default)]
pub struct Context {
    errors: SmallVec<[ErrorRecord; 4]>,
    dropped: usize,
    handler: Option<ErrorHandler>,
}

impl Context {
    /// Maximum number of records kept on the error stack.
    pub const MAX_ERRORS: usize = 8;

    /// Create a clean context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an error has been raised since the last reset.
    pub fn is_in_error(&self) -> bool {
        !self.errors.is_empty() || self.dropped > 0
    }

    /// Raise an error.
    ///
    /// The record captures the caller's source location. Once the stack
    /// holds [`Context::MAX_ERRORS`] entries further errors are only
    /// counted. The installed handler, if any, sees every raised error.
    #[track_caller]
    pub fn raise(&mut self, kind: ErrorKind, message: impl Into<String>) {
        let record = ErrorRecord {
            kind,
            message: message.into(),
            location: Location::caller(),
        };
        if let Some(handler) = self.handler {
            handler(&record);
        }
        if self.errors.len() < Self::MAX_ERRORS {
            self.errors.push(record);
        } else {
            self.dropped += 1;
        }
    }

    /// The first error raised since the last reset.
    ///
    /// Later operations short-circuit, so the first error is almost
    /// always the root cause.
    pub fn first_error(&self) -> Option<&ErrorRecord> {
        self.errors.first()
    }

    /// The most recently stored error.
    pub fn last_error(&self) -> Option<&ErrorRecord> {
        self.errors.last()
    }

    /// Kind of the first error, if any.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.first_error().map(|e| e.kind)
    }

    /// All stored errors, oldest first.
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Errors raised after the stack was full.
    pub fn dropped_errors(&self) -> usize {
        self.dropped
    }

    /// Checkpoint: `Err` with the first error if the context is in error.
    pub fn check(&self) -> Result<(), ErrorRecord> {
        match self.first_error() {
            Some(record) => Err(record.clone()),
            None => Ok(()),
        }
    }

    /// Clear all errors. Only the context's owner should call this.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.dropped = 0;
    }

    /// Install a handler called for each raised error.
    pub fn set_error_handler(&mut self, handler: ErrorHandler) {
        self.handler = Some(handler);
    }

    /// Remove the error handler.
    pub fn clear_error_handler(&mut self) {
        self.handler = None;
    }
}
