//! Who is responsible for an array's storage.

use emkit_arena::Block;

/// Ownership of an array's storage.
///
/// Only [`Ownership::Owned`] storage is ever handed back to a segment.
/// Shared-pool and borrowed storage is left alone on release, which rules
/// out giving a pool back through one of its arrays or releasing the same
/// block through both a backing array and its aligned view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ownership {
    /// No storage yet.
    #[default]
    Unallocated,
    /// Storage is a block this array carved from a private segment.
    Owned(Block),
    /// Storage came from a shared segment; the pool's owner reclaims it.
    Shared,
    /// Storage is a window into another array's block.
    Borrowed,
}

impl Ownership {
    /// The block to release, if this array owns one.
    pub fn owned_block(&self) -> Option<Block> {
        match self {
            Self::Owned(block) => Some(*block),
            _ => None,
        }
    }

    /// Whether releasing the array returns storage to its segment.
    pub fn releases_storage(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}
