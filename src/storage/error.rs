//! Storage layer error types.

use thiserror::Error;

use crate::storage::buffer::replacer::FrameId;

/// Errors that can occur in the storage layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Invalid replacer capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    #[error("Frame {frame_id} is out of range (capacity: {capacity})")]
    FrameOutOfRange { frame_id: FrameId, capacity: usize },

    #[error("Replacer is full: no free slot for frame {frame_id} (capacity: {capacity})")]
    ReplacerFull { frame_id: FrameId, capacity: usize },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
