//! Contiguous memory segments with bump allocation.
//!
//! A [`MemSeg`] is a fixed-size `Vec<i16>` carved front to back. Each
//! block is preceded by a header recording its payload length. Blocks are
//! never freed one at a time; the owner reclaims the whole segment with
//! [`MemSeg::reset`].

use std::cell::RefCell;
use std::rc::Rc;

use emkit_core::Context;
use indexmap::IndexMap;

use crate::config::MemSegConfig;
use crate::error::ArenaError;
use crate::handle::{Block, BlockId, BlockInfo};
use crate::{MEM_BLOCK_OVERHEAD_BYTES, WORD_BYTES};

const HEADER_WORDS: usize = MEM_BLOCK_OVERHEAD_BYTES / WORD_BYTES;

/// Shared handle to a segment.
///
/// Arrays keep a clone so they can reach their storage. Single-threaded
/// by construction.
pub type SharedMemSeg = Rc<RefCell<MemSeg>>;

/// A single contiguous memory segment with bump allocation.
pub struct MemSeg {
    /// Backing storage. Allocated to full capacity at creation and never
    /// resized, so word addresses stay put for the segment's lifetime.
    data: Vec<i16>,
    /// Bump pointer: next free word.
    cursor: usize,
    shared: bool,
    zero_on_alloc: bool,
    /// Live blocks of the current generation, in allocation order.
    blocks: IndexMap<BlockId, BlockInfo>,
    next_id: u32,
    generation: u32,
}

impl MemSeg {
    /// Create a new segment.
    ///
    /// Returns `ArenaError::InvalidConfig` if `capacity_bytes` is odd.
    pub fn new(config: MemSegConfig) -> Result<Self, ArenaError> {
        if config.capacity_bytes % WORD_BYTES != 0 {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "capacity_bytes must be a multiple of {WORD_BYTES}, got {}",
                    config.capacity_bytes
                ),
            });
        }
        Ok(Self {
            data: vec![0; config.capacity_words()],
            cursor: 0,
            shared: config.shared,
            zero_on_alloc: config.zero_on_alloc,
            blocks: IndexMap::new(),
            next_id: 0,
            generation: 0,
        })
    }

    /// Wrap this segment in an `Rc<RefCell<_>>` for handing to arrays.
    pub fn into_shared(self) -> SharedMemSeg {
        Rc::new(RefCell::new(self))
    }

    /// Bump-allocate a block of `len` words.
    ///
    /// Consumes `len * 2 + MEM_BLOCK_OVERHEAD_BYTES` bytes of the segment.
    pub fn try_alloc(&mut self, len: usize) -> Result<Block, ArenaError> {
        let total = len.saturating_add(HEADER_WORDS);
        let fits = self
            .cursor
            .checked_add(total)
            .is_some_and(|end| end <= self.data.len());
        if !fits {
            return Err(ArenaError::CapacityExceeded {
                requested: total.saturating_mul(WORD_BYTES),
                available: self.free_bytes(),
            });
        }

        let header = self.cursor;
        let offset = header + HEADER_WORDS;
        let end = header + total;
        let words = len as u32;
        self.data[header] = (words & 0xFFFF) as u16 as i16;
        self.data[header + 1] = (words >> 16) as u16 as i16;
        if self.zero_on_alloc {
            self.data[offset..end].fill(0);
        }
        self.cursor = end;

        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.blocks.insert(id, BlockInfo { offset, len });
        Ok(Block::new(id, self.generation, offset, len))
    }

    /// Allocate `len` words, reporting failure on the context.
    ///
    /// Returns `None` without touching the segment if the context is
    /// already in error. On insufficient space raises
    /// [`ErrorKind::AllocationFailure`](emkit_core::ErrorKind::AllocationFailure)
    /// and returns `None`.
    #[track_caller]
    pub fn alloc(&mut self, ctx: &mut Context, len: usize) -> Option<Block> {
        if ctx.is_in_error() {
            return None;
        }
        match self.try_alloc(len) {
            Ok(block) => Some(block),
            Err(e) => {
                ctx.raise(e.kind(), e.to_string());
                None
            }
        }
    }

    /// Return a block to the segment.
    ///
    /// Segments are reclaimed wholesale by [`MemSeg::reset`], so this does
    /// no accounting: the block's space stays consumed until the owner
    /// resets.
    pub fn release(&mut self, _ctx: &Context, _block: Block) {}

    /// Reclaim every block at once and start a new generation.
    ///
    /// Arrays still pointing into this segment alias whatever the next
    /// generation allocates; the owner must release or forget them first.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.blocks.clear();
        self.next_id = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Payload length recorded in the block's header, in words.
    ///
    /// Returns `None` if the block belongs to another generation.
    pub fn block_header(&self, block: Block) -> Option<u32> {
        if block.generation != self.generation || block.offset < HEADER_WORDS {
            return None;
        }
        let lo = self.data[block.offset - 2] as u16 as u32;
        let hi = self.data[block.offset - 1] as u16 as u32;
        Some(lo | (hi << 16))
    }

    /// Bookkeeping for a live block.
    pub fn block_info(&self, id: BlockId) -> Option<BlockInfo> {
        self.blocks.get(&id).copied()
    }

    /// Live blocks in allocation order.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, BlockInfo)> + '_ {
        self.blocks.iter().map(|(&id, &info)| (id, info))
    }

    /// Number of live blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Whether this segment is a shared pool.
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    /// Current generation (incremented by each reset).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Total size in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.data.len() * WORD_BYTES
    }

    /// Bytes consumed by blocks and their headers.
    pub fn used_bytes(&self) -> usize {
        self.cursor * WORD_BYTES
    }

    /// Bytes still available.
    pub fn free_bytes(&self) -> usize {
        (self.data.len() - self.cursor) * WORD_BYTES
    }

    /// Shared slice of `len` words starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range runs past the end of the segment.
    pub fn slice(&self, offset: usize, len: usize) -> &[i16] {
        &self.data[offset..offset + len]
    }

    /// Mutable slice of `len` words starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range runs past the end of the segment.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [i16] {
        &mut self.data[offset..offset + len]
    }

    /// Copy `len` words from `src` to `dest` within this segment.
    ///
    /// The ranges may overlap.
    pub fn copy_within(&mut self, src: usize, dest: usize, len: usize) {
        self.data.copy_within(src..src + len, dest);
    }

    /// Machine address of the word at `offset`.
    pub fn word_address(&self, offset: usize) -> usize {
        self.data.as_ptr() as usize + offset * WORD_BYTES
    }
}

impl std::fmt::Debug for MemSeg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemSeg")
            .field("capacity_bytes", &self.capacity_bytes())
            .field("used_bytes", &self.used_bytes())
            .field("shared", &self.shared)
            .field("blocks", &self.blocks.len())
            .field("generation", &self.generation)
            .finish()
    }
}
