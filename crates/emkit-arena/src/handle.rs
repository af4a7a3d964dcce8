//! Block handles.
//!
//! A [`Block`] encodes where an allocation's payload lives inside a
//! [`MemSeg`](crate::MemSeg). Offsets and lengths are in 16-bit words; the
//! offset points past the block header, at the first payload word.

use std::fmt;

/// Identifier of a block, unique within one generation of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of an allocation within a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Block {
    pub(crate) id: BlockId,
    /// Segment generation when this block was carved.
    pub(crate) generation: u32,
    /// Word offset of the first payload word.
    pub(crate) offset: usize,
    /// Payload length in words.
    pub(crate) len: usize,
}

impl Block {
    pub(crate) fn new(id: BlockId, generation: u32, offset: usize, len: usize) -> Self {
        Self {
            id,
            generation,
            offset,
            len,
        }
    }

    /// Block identifier.
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Segment generation this block belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Word offset of the payload within the segment.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Payload length in words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block(id={}, gen={}, off={}, len={})",
            self.id, self.generation, self.offset, self.len
        )
    }
}

/// Bookkeeping the segment keeps per carved block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockInfo {
    /// Word offset of the payload.
    pub offset: usize,
    /// Payload length in words.
    pub len: usize,
}
