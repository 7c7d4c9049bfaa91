pub mod clock;
pub mod replacer;

use crate::storage::error::StorageResult;
use clock::ClockReplacer;
use parking_lot::Mutex;
use replacer::{FrameId, Replacer, ReplacerConfig};
use std::sync::Arc;

/// Replacer handle shared by buffer pool workers.
///
/// Every call takes the same exclusive lock for its whole duration, so a
/// victim sweep always sees a consistent evictable set. Nothing blocks
/// inside the replacer; when `victim` returns None the caller decides
/// whether to fail the request or wait for an unpin.
#[derive(Clone, Debug)]
pub struct SharedReplacer {
    inner: Arc<Mutex<Box<dyn Replacer>>>,
}

impl SharedReplacer {
    pub fn new(replacer: Box<dyn Replacer>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(replacer)),
        }
    }

    /// Builds a shared clock replacer from the given configuration.
    pub fn clock(config: &ReplacerConfig) -> StorageResult<Self> {
        let replacer = ClockReplacer::with_config(config)?;
        Ok(Self::new(Box::new(replacer)))
    }

    pub fn victim(&self) -> Option<FrameId> {
        self.inner.lock().victim()
    }

    pub fn pin(&self, frame_id: FrameId) {
        self.inner.lock().pin(frame_id);
    }

    pub fn unpin(&self, frame_id: FrameId) -> StorageResult<()> {
        self.inner.lock().unpin(frame_id)
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::error::StorageError;

    #[test]
    fn test_clock_handle() -> StorageResult<()> {
        let replacer = SharedReplacer::clock(&ReplacerConfig::new(4))?;
        assert_eq!(replacer.capacity(), 4);
        assert_eq!(replacer.size(), 0);

        replacer.unpin(0)?;
        replacer.unpin(1)?;
        replacer.pin(1);
        assert_eq!(replacer.size(), 1);

        assert_eq!(replacer.victim(), Some(0));
        assert_eq!(replacer.victim(), None);

        Ok(())
    }

    #[test]
    fn test_clones_share_state() -> StorageResult<()> {
        let replacer = SharedReplacer::clock(&ReplacerConfig::new(2))?;
        let other = replacer.clone();

        replacer.unpin(1)?;
        assert_eq!(other.size(), 1);
        assert_eq!(other.victim(), Some(1));
        assert_eq!(replacer.size(), 0);

        Ok(())
    }

    #[test]
    fn test_invalid_config() {
        let err = SharedReplacer::clock(&ReplacerConfig::new(0)).unwrap_err();
        assert_eq!(err, StorageError::InvalidCapacity(0));
    }

    #[test]
    fn test_unpin_error_propagates() -> StorageResult<()> {
        let replacer = SharedReplacer::new(Box::new(ClockReplacer::new(1)?));

        let err = replacer.unpin(1).unwrap_err();
        assert!(matches!(err, StorageError::FrameOutOfRange { .. }));
        assert_eq!(replacer.size(), 0);

        Ok(())
    }
}
