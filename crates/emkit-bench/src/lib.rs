//! Benchmark workloads for emkit.
//!
//! - [`SIZES`]: element counts every array benchmark runs at
//! - [`workload`]: a segment pre-sized for two arrays of a given length
//! - [`ramp`]: deterministic sample data spanning the `i16` range

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use emkit_arena::{MemSeg, MemSegConfig, SharedMemSeg};
use emkit_array::Int16Arr;
use emkit_core::Context;

/// Element counts for sized benchmark groups.
pub const SIZES: [usize; 4] = [16, 256, 4096, 32_768];

/// Deterministic samples: a sawtooth that visits both extremes.
pub fn ramp(n: usize) -> Vec<i16> {
    (0..n)
        .map(|i| (i.wrapping_mul(2749) % 65_536) as u16 as i16)
        .collect()
}

/// A segment with room for `arrays` arrays of `n` elements, and one
/// array already filled with [`ramp`] data.
///
/// Panics if setup fails.
pub fn workload(n: usize, arrays: usize) -> (SharedMemSeg, Int16Arr) {
    let bytes = Int16Arr::heap_size(n) * arrays;
    let seg = MemSeg::new(MemSegConfig::new(bytes))
        .expect("benchmark segment")
        .into_shared();
    let mut ctx = Context::new();
    let mut arr = Int16Arr::new();
    arr.create(&mut ctx, n, &seg);
    let data = ramp(n);
    arr.with_slice_mut(|s| s.copy_from_slice(&data));
    assert!(ctx.check().is_ok(), "benchmark setup failed");
    (seg, arr)
}
