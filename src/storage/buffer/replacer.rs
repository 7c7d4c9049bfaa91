use crate::storage::error::StorageResult;
use std::fmt::Debug;

pub type FrameId = u32;

/// Default number of frame slots tracked by a replacer.
pub const DEFAULT_REPLACER_CAPACITY: usize = 64;

pub trait Replacer: Send + Sync + Debug {
    /// Select a frame to evict. Returns None if no frame can be evicted.
    fn victim(&mut self) -> Option<FrameId>;

    /// Mark a frame as pinned (not evictable). Unknown frames are ignored.
    fn pin(&mut self, frame_id: FrameId);

    /// Mark a frame as unpinned (evictable).
    ///
    /// Fails when the frame id is outside the replacer's range or when more
    /// distinct frames are unpinned than the replacer has slots for.
    fn unpin(&mut self, frame_id: FrameId) -> StorageResult<()>;

    /// Get the number of evictable frames.
    fn size(&self) -> usize;

    /// Get the number of frame slots the replacer tracks.
    fn capacity(&self) -> usize;
}

/// Replacer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacerConfig {
    /// Number of frame slots, normally the buffer pool's frame count.
    pub capacity: usize,
}

impl ReplacerConfig {
    pub fn new(capacity: usize) -> Self {
        ReplacerConfig { capacity }
    }
}

impl Default for ReplacerConfig {
    fn default() -> Self {
        ReplacerConfig {
            capacity: DEFAULT_REPLACER_CAPACITY,
        }
    }
}
