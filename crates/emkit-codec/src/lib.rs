//! Fixed-width word codec for emkit binary records.
//!
//! Every persisted emkit record is a sequence of fixed-width words. This
//! crate provides the primitive writers and readers those records are
//! built from, over any `Write` sink or `Read` source.
//!
//! # Byte order
//!
//! All words are little-endian. A 32-bit value occupies two 16-bit words,
//! low word first, which is the same as its 4-byte little-endian form.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;

pub use codec::{
    read_i16, read_i16_into, read_u16, read_u32, write_i16, write_i16_slice, write_u16, write_u32,
};
pub use error::CodecError;

/// Encoded size of a 32-bit field in bytes.
pub const SIZEOF_U32: usize = 4;

/// Encoded size of a 16-bit field in bytes.
pub const SIZEOF_I16: usize = 2;
