//! Test fixtures for emkit development.
//!
//! Segment constructors, array builders, and record helpers shared by the
//! integration tests and benchmarks. Everything here panics on setup
//! failure; none of it is meant for production paths.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use emkit_arena::{MemSeg, MemSegConfig, SharedMemSeg};
use emkit_array::Int16Arr;
use emkit_core::Context;

pub use fixtures::{misalign, EDGE_VALUES};

/// A private segment of `bytes` bytes.
pub fn arena(bytes: usize) -> SharedMemSeg {
    MemSeg::new(MemSegConfig::new(bytes))
        .expect("fixture segment config")
        .into_shared()
}

/// A shared-pool segment of `bytes` bytes.
pub fn shared_arena(bytes: usize) -> SharedMemSeg {
    MemSeg::new(MemSegConfig::new(bytes).with_shared(true))
        .expect("fixture segment config")
        .into_shared()
}

/// An array created in `seg` holding `values`.
///
/// Panics if the context ends up in error.
pub fn filled(ctx: &mut Context, seg: &SharedMemSeg, values: &[i16]) -> Int16Arr {
    let mut arr = Int16Arr::new();
    arr.create(ctx, values.len(), seg);
    assert!(ctx.check().is_ok(), "fixture allocation failed: {:?}", ctx.first_error());
    arr.with_slice_mut(|s| s.copy_from_slice(values));
    arr
}

/// `arr`'s record as bytes.
pub fn encode(arr: &Int16Arr) -> Vec<u8> {
    let mut ctx = Context::new();
    let mut buf = Vec::with_capacity(arr.mem_size());
    arr.mem_write(&mut ctx, &mut buf);
    assert!(ctx.check().is_ok(), "fixture encode failed: {:?}", ctx.first_error());
    buf
}

/// Decode one record from `bytes` into a fresh array in `seg`.
///
/// Returns the array and the byte count `mem_read` reported. Errors are
/// left on `ctx` for the caller to inspect.
pub fn decode(ctx: &mut Context, seg: &SharedMemSeg, bytes: &[u8]) -> (Int16Arr, usize) {
    let mut arr = Int16Arr::new();
    let mut input = bytes;
    let n = arr.mem_read(ctx, &mut input, seg);
    (arr, n)
}
