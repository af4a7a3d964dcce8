//! Arena-backed fixed-width arrays for emkit.
//!
//! [`Int16Arr`] is the template every emkit array type follows: storage
//! carved from a [`MemSeg`](emkit_arena::MemSeg), a logical length that
//! moves within a fixed capacity, an explicit [`Ownership`] tag, and a
//! self-describing binary form.
//!
//! # Sticky errors
//!
//! Every operation takes the caller's [`Context`](emkit_core::Context)
//! and does nothing if it is already in error, so a chain of calls can
//! be checked once at the end:
//!
//! ```
//! use emkit_arena::{MemSeg, MemSegConfig};
//! use emkit_array::Int16Arr;
//! use emkit_core::{Context, ErrorKind};
//!
//! let seg = MemSeg::new(MemSegConfig::new(256)).unwrap().into_shared();
//! let mut ctx = Context::new();
//!
//! let mut a = Int16Arr::new();
//! a.create(&mut ctx, 4, &seg);
//! a.fill(&ctx, 7);
//! a.resize(&mut ctx, 10); // exceeds capacity: raises, later calls skip
//! a.fill(&ctx, 0);
//!
//! assert_eq!(ctx.error_kind(), Some(ErrorKind::InsufficientCapacity));
//! assert_eq!(a.to_vec(), vec![7, 7, 7, 7]);
//! ```
//!
//! # Binary form
//!
//! ```text
//! [totalSize u32] [elementCount u32] [element i16] × elementCount
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod align;
pub mod int16_arr;
pub mod io;
pub mod ownership;

pub use int16_arr::Int16Arr;
pub use ownership::Ownership;

/// Bytes per `Int16Arr` element.
pub const ELEMENT_BYTES: usize = std::mem::size_of::<i16>();
