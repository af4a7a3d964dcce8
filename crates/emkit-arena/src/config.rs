//! Memory segment configuration parameters.

/// Configuration for a [`MemSeg`](crate::MemSeg).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemSegConfig {
    /// Total size of the segment in bytes, block headers included.
    ///
    /// Default: 65_536 (64KB). Must be even, since storage is carved in
    /// 16-bit words.
    pub capacity_bytes: usize,

    /// Whether the segment is a pool shared by many independent consumers.
    ///
    /// Arrays allocated from a shared segment do not record it as their
    /// owner, so releasing one of them never touches the pool.
    pub shared: bool,

    /// Zero each block as it is carved.
    ///
    /// Default: `true`. After a [`reset`](crate::MemSeg::reset) the words
    /// still hold the previous generation's data; zeroing keeps that data
    /// from leaking into new blocks.
    pub zero_on_alloc: bool,
}

impl MemSegConfig {
    /// Default segment size: 64KB.
    pub const DEFAULT_CAPACITY_BYTES: usize = 65_536;

    /// Create a private (unshared) segment config of the given size.
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            capacity_bytes,
            shared: false,
            zero_on_alloc: true,
        }
    }

    /// Set the shared flag.
    pub fn with_shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    /// Set the zero-on-alloc flag.
    pub fn with_zero_on_alloc(mut self, zero: bool) -> Self {
        self.zero_on_alloc = zero;
        self
    }

    /// Segment capacity in 16-bit words.
    pub fn capacity_words(&self) -> usize {
        self.capacity_bytes / crate::WORD_BYTES
    }
}

impl Default for MemSegConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY_BYTES)
    }
}
