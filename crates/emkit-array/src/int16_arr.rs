//! The arena-backed `i16` array.

use std::fmt;
use std::rc::Rc;

use emkit_arena::{SharedMemSeg, MEM_BLOCK_OVERHEAD_BYTES};
use emkit_core::{Context, ErrorKind};

use crate::align::first_aligned_index;
use crate::ownership::Ownership;
use crate::ELEMENT_BYTES;

/// Growable-within-capacity array of `i16` backed by a memory segment.
///
/// An array starts empty with no storage. [`create`](Int16Arr::create)
/// carves its storage from a segment; after that the capacity is fixed
/// and only the logical length moves. Storage goes back to the segment
/// only through an explicit [`release`](Int16Arr::release); dropping an
/// array just forgets it, and the segment's owner reclaims the memory in
/// bulk.
///
/// Element access borrows the segment's `RefCell`. Closures passed to
/// [`with_slice`](Int16Arr::with_slice) and
/// [`with_slice_mut`](Int16Arr::with_slice_mut) must not call back into
/// arrays on the same segment.
#[derive(Default)]
pub struct Int16Arr {
    /// Segment holding the elements, whoever owns them.
    seg: Option<SharedMemSeg>,
    /// Word offset of element 0 within `seg`.
    offset: usize,
    len: usize,
    capacity: usize,
    ownership: Ownership,
}

impl Int16Arr {
    /// An empty array with no storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment bytes a first [`create`](Int16Arr::create) of `size`
    /// elements consumes, block header included.
    ///
    /// Exact for `size >= 1`. A fresh array created with `size == 0`
    /// allocates nothing, so for 0 this is only an upper bound.
    pub const fn heap_size(size: usize) -> usize {
        size * ELEMENT_BYTES + MEM_BLOCK_OVERHEAD_BYTES
    }

    /// Allocate storage for `size` elements, or change the logical length
    /// of an array that already has storage.
    ///
    /// Does nothing if the length is already `size`, even on an array
    /// with no storage. An array with storage is resized in place (see
    /// [`resize`](Int16Arr::resize)) and never reallocated. Otherwise a
    /// block is carved from `seg`; on success both length and capacity
    /// are `size`, and the array owns the block unless `seg` is a shared
    /// pool.
    ///
    /// Raises [`ErrorKind::AllocationFailure`] if `seg` is exhausted.
    #[track_caller]
    pub fn create(&mut self, ctx: &mut Context, size: usize, seg: &SharedMemSeg) {
        if ctx.is_in_error() || self.len == size {
            return;
        }
        if self.seg.is_some() {
            self.resize(ctx, size);
            return;
        }

        let ownership = {
            let mut s = seg.borrow_mut();
            let Some(block) = s.alloc(ctx, size) else {
                return;
            };
            self.offset = block.offset();
            if s.is_shared() {
                Ownership::Shared
            } else {
                Ownership::Owned(block)
            }
        };
        self.seg = Some(Rc::clone(seg));
        self.len = size;
        self.capacity = size;
        self.ownership = ownership;
    }

    /// Set the logical length without touching storage.
    ///
    /// Raises [`ErrorKind::InsufficientCapacity`] and leaves the array
    /// unchanged if `size` exceeds the capacity.
    #[track_caller]
    pub fn resize(&mut self, ctx: &mut Context, size: usize) {
        if ctx.is_in_error() {
            return;
        }
        if size > self.capacity {
            ctx.raise(
                ErrorKind::InsufficientCapacity,
                format!(
                    "Int16Arr::resize: requested {size} elements, capacity is {}",
                    self.capacity
                ),
            );
            return;
        }
        self.len = size;
    }

    /// Make this array an aligned view of `size` elements into `backing`.
    ///
    /// `backing` is created with `(align_bytes - 1) / 2` spare elements so
    /// that an element whose address is a multiple of `align_bytes` falls
    /// within reach. This array then borrows `size` elements starting
    /// there. Only `backing` owns memory and is the one to release; this
    /// view must not outlive it.
    ///
    /// Any storage this array held before is dropped without release.
    ///
    /// Raises [`ErrorKind::InvalidAlignment`] if `align_bytes` is not a
    /// power of two, and [`ErrorKind::InsufficientCapacity`] if an existing
    /// `backing` is too small to hold an aligned run of `size` elements.
    #[track_caller]
    pub fn create_aligned(
        &mut self,
        ctx: &mut Context,
        size: usize,
        seg: &SharedMemSeg,
        backing: &mut Int16Arr,
        align_bytes: usize,
    ) {
        if ctx.is_in_error() {
            return;
        }
        if !align_bytes.is_power_of_two() {
            ctx.raise(
                ErrorKind::InvalidAlignment,
                format!("Int16Arr::create_aligned: {align_bytes} is not a power of two"),
            );
            return;
        }

        let slack = (align_bytes - 1) / ELEMENT_BYTES;
        backing.create(ctx, size.saturating_add(slack), seg);
        if ctx.is_in_error() {
            return;
        }

        let Some(backing_seg) = backing.seg.as_ref() else {
            // Zero-sized view over a zero-sized backing array.
            *self = Self {
                ownership: Ownership::Borrowed,
                ..Self::default()
            };
            return;
        };
        let base = backing_seg.borrow().word_address(backing.offset);
        let reach = backing.len.saturating_sub(size);
        let Some(skip) = first_aligned_index(base, align_bytes, reach) else {
            ctx.raise(
                ErrorKind::InsufficientCapacity,
                format!(
                    "Int16Arr::create_aligned: backing array of {} elements cannot hold \
                     {size} elements aligned to {align_bytes} bytes",
                    backing.len
                ),
            );
            return;
        };

        self.seg = Some(Rc::clone(backing_seg));
        self.offset = backing.offset + skip;
        self.len = size;
        self.capacity = size;
        self.ownership = Ownership::Borrowed;
    }

    /// Return owned storage to its segment and reset to the empty state.
    ///
    /// Shared-pool and borrowed storage is not returned. Runs even when
    /// the context is in error, so teardown after a failed chain still
    /// leaves the array empty.
    pub fn release(&mut self, ctx: &Context) {
        if let (Some(block), Some(seg)) = (self.ownership.owned_block(), self.seg.as_ref()) {
            seg.borrow_mut().release(ctx, block);
        }
        *self = Self::new();
    }

    /// Set every element within the logical length to `value`.
    pub fn fill(&mut self, ctx: &Context, value: i16) {
        if ctx.is_in_error() {
            return;
        }
        self.with_slice_mut(|s| s.fill(value));
    }

    /// Element-wise equality of the logical contents.
    ///
    /// Arrays of different lengths are never equal; two empty arrays are.
    pub fn equal(&self, other: &Int16Arr) -> bool {
        if self.len != other.len {
            return false;
        }
        self.with_slice(|a| other.with_slice(|b| a == b))
    }

    /// Copy `src`'s elements into this array, setting its length to
    /// `src.len()`.
    ///
    /// Elements past `src.len()` keep their values. Raises
    /// [`ErrorKind::InsufficientCapacity`] and copies nothing if this
    /// array's capacity is smaller than `src.len()`.
    #[track_caller]
    pub fn copy(&mut self, ctx: &mut Context, src: &Int16Arr) {
        if ctx.is_in_error() {
            return;
        }
        if self.capacity < src.len {
            ctx.raise(
                ErrorKind::InsufficientCapacity,
                format!(
                    "Int16Arr::copy: source has {} elements, destination capacity is {}",
                    src.len, self.capacity
                ),
            );
            return;
        }
        self.len = src.len;

        let (Some(dst_seg), Some(src_seg)) = (self.seg.as_ref(), src.seg.as_ref()) else {
            return;
        };
        if Rc::ptr_eq(dst_seg, src_seg) {
            dst_seg
                .borrow_mut()
                .copy_within(src.offset, self.offset, src.len);
        } else {
            let from = src_seg.borrow();
            dst_seg
                .borrow_mut()
                .slice_mut(self.offset, src.len)
                .copy_from_slice(from.slice(src.offset, src.len));
        }
    }

    /// Element at `index`.
    ///
    /// Raises [`ErrorKind::OutOfRange`] and returns 0 if `index` is past
    /// the logical length.
    #[track_caller]
    pub fn get(&self, ctx: &mut Context, index: usize) -> i16 {
        if ctx.is_in_error() {
            return 0;
        }
        if index >= self.len {
            ctx.raise(
                ErrorKind::OutOfRange,
                format!("Int16Arr::get: index {index}, length {}", self.len),
            );
            return 0;
        }
        self.with_slice(|s| s[index])
    }

    /// Overwrite the element at `index`.
    ///
    /// Raises [`ErrorKind::OutOfRange`] if `index` is past the logical
    /// length.
    #[track_caller]
    pub fn set(&mut self, ctx: &mut Context, index: usize, value: i16) {
        if ctx.is_in_error() {
            return;
        }
        if index >= self.len {
            ctx.raise(
                ErrorKind::OutOfRange,
                format!("Int16Arr::set: index {index}, length {}", self.len),
            );
            return;
        }
        self.with_slice_mut(|s| s[index] = value);
    }

    /// Run `f` over the logical contents.
    pub fn with_slice<R>(&self, f: impl FnOnce(&[i16]) -> R) -> R {
        match &self.seg {
            Some(seg) => f(seg.borrow().slice(self.offset, self.len)),
            None => f(&[]),
        }
    }

    /// Run `f` over the logical contents, mutably.
    pub fn with_slice_mut<R>(&mut self, f: impl FnOnce(&mut [i16]) -> R) -> R {
        match &self.seg {
            Some(seg) => f(seg.borrow_mut().slice_mut(self.offset, self.len)),
            None => f(&mut []),
        }
    }

    /// Copy of the logical contents.
    pub fn to_vec(&self) -> Vec<i16> {
        self.with_slice(<[i16]>::to_vec)
    }

    /// Logical length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the logical length is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the storage holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ownership of the storage.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Whether releasing this array returns storage to a segment.
    pub fn is_owned(&self) -> bool {
        self.ownership.releases_storage()
    }

    /// Whether storage has been attached.
    pub fn has_storage(&self) -> bool {
        self.seg.is_some()
    }

    /// Segment holding the elements.
    pub fn segment(&self) -> Option<&SharedMemSeg> {
        self.seg.as_ref()
    }

    /// Machine address of element 0, if the array has storage.
    pub fn address(&self) -> Option<usize> {
        self.seg
            .as_ref()
            .map(|seg| seg.borrow().word_address(self.offset))
    }
}

impl PartialEq for Int16Arr {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Int16Arr {}

impl fmt::Debug for Int16Arr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Int16Arr")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("ownership", &self.ownership)
            .field("offset", &self.offset)
            .finish()
    }
}
