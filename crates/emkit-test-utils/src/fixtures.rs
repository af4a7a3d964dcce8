//! Reusable inputs for array tests.

use emkit_arena::SharedMemSeg;
use emkit_core::Context;

/// Values at and around the `i16` boundaries.
pub const EDGE_VALUES: [i16; 7] = [0, 1, -1, i16::MAX, i16::MIN, i16::MAX - 1, i16::MIN + 1];

/// Burn `words` words of `seg` so the next block starts at a different
/// address.
///
/// Allocates one block of `words - 2` words; the 2-word block header
/// makes up the rest. `words` must be at least 2.
pub fn misalign(ctx: &mut Context, seg: &SharedMemSeg, words: usize) {
    assert!(words >= 2, "a block costs at least its header");
    let block = seg.borrow_mut().alloc(ctx, words - 2);
    assert!(block.is_some(), "misalign: segment exhausted");
}
