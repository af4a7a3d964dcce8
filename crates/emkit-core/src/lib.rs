//! Core types for the emkit buffer library.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! sticky [`Context`] that every arena, codec, and array operation
//! consults first, and the [`ErrorKind`]s those operations raise on it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;

pub use context::{Context, ErrorHandler};
pub use error::{ErrorKind, ErrorRecord};
