//! emkit: arena-backed fixed-width arrays for memory-constrained pipelines.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! emkit sub-crates. For most users, adding `emkit` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use emkit::prelude::*;
//!
//! // One 1 KiB segment serves every array in this pipeline stage.
//! let seg = MemSeg::new(MemSegConfig::new(1024)).unwrap().into_shared();
//! let mut ctx = Context::new();
//!
//! let mut samples = Int16Arr::new();
//! samples.create(&mut ctx, 8, &seg);
//! samples.fill(&ctx, -3);
//! samples.set(&mut ctx, 0, 100);
//!
//! // Serialize, then read back into a fresh array.
//! let mut record = Vec::new();
//! let written = samples.mem_write(&mut ctx, &mut record);
//! let mut restored = Int16Arr::new();
//! let read = restored.mem_read(&mut ctx, &mut record.as_slice(), &seg);
//!
//! // Errors are sticky: one check covers the whole chain.
//! ctx.check().unwrap();
//! assert_eq!(written, read);
//! assert!(samples.equal(&restored));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`context`] | `emkit-core` | Sticky error context, error kinds and records |
//! | [`arena`] | `emkit-arena` | Bump-allocated memory segments and block handles |
//! | [`codec`] | `emkit-codec` | Little-endian word readers and writers |
//! | [`array`] | `emkit-array` | `Int16Arr` and its binary form |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Sticky error context (`emkit-core`).
///
/// Every emkit operation reports failure by raising on a
/// [`context::Context`] rather than returning a `Result`.
pub use emkit_core as context;

/// Memory segments (`emkit-arena`).
///
/// A [`arena::MemSeg`] is a fixed buffer carved front to back; arrays share
/// one through [`arena::SharedMemSeg`].
pub use emkit_arena as arena;

/// Word codec (`emkit-codec`).
pub use emkit_codec as codec;

/// Arena-backed arrays (`emkit-array`).
///
/// [`array::Int16Arr`] plus its [`array::Ownership`] tag.
pub use emkit_array as array;

/// Common imports for typical emkit usage.
///
/// ```rust
/// use emkit::prelude::*;
/// ```
pub mod prelude {
    // Errors
    pub use emkit_core::{Context, ErrorKind, ErrorRecord};

    // Storage
    pub use emkit_arena::{MemSeg, MemSegConfig, SharedMemSeg};

    // Arrays
    pub use emkit_array::{Int16Arr, Ownership};
}
