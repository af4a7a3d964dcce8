//! Bump-allocated memory segments for emkit buffers.
//!
//! A [`MemSeg`] is a pre-allocated region that arrays carve their
//! storage from. Allocation only ever moves a cursor forward; nothing is
//! freed per block, and the owner reclaims the whole segment at once.
//!
//! # Layout
//!
//! ```text
//! MemSeg (Vec<i16>, fixed length)
//! ├── [hdr][payload 0     ]   hdr = 2 words: payload length (u32)
//! ├── [hdr][payload 1  ]
//! └── free ...
//! ```
//!
//! # Ownership
//!
//! A segment is either private to one consumer or a shared pool
//! (`MemSegConfig::shared`). Arrays drawn from a shared pool never record
//! it as their owner, so no single array can give pool memory back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod segment;

pub use config::MemSegConfig;
pub use error::ArenaError;
pub use handle::{Block, BlockId, BlockInfo};
pub use segment::{MemSeg, SharedMemSeg};

/// Bytes per storage word.
pub const WORD_BYTES: usize = 2;

/// Bytes of bookkeeping the segment charges per block.
///
/// Every block is preceded by a 32-bit header holding its payload length.
/// Callers sizing a segment up front must add this to each block.
pub const MEM_BLOCK_OVERHEAD_BYTES: usize = 4;
