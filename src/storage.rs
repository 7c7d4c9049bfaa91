//! Storage layer building blocks.
//!
//! This crate currently provides the buffer pool's page replacement policy:
//!
//! - **Replacer**: trait the buffer pool uses to pick eviction victims
//! - **ClockReplacer**: second-chance clock policy over a fixed ring of slots
//! - **SharedReplacer**: lock-guarded handle shared across worker threads
//!
//! Frame allocation, page I/O and the page table live in the buffer pool
//! manager, which drives the replacer through `pin`, `unpin` and `victim`.

pub mod buffer;
pub mod error;

pub use buffer::clock::{ClockReplacer, SweepStats};
pub use buffer::replacer::{FrameId, Replacer, ReplacerConfig, DEFAULT_REPLACER_CAPACITY};
pub use buffer::SharedReplacer;
pub use error::{StorageError, StorageResult};
