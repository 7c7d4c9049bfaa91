//! Clock (second-chance) page replacement.
//!
//! Frames are parked in a fixed ring of slots when they are first unpinned.
//! Each slot carries a reference bit that is set on every unpin. The clock
//! hand sweeps the ring, clearing set bits and evicting the first evictable
//! frame whose bit is already clear. Pinning a frame only drops it from the
//! evictable set; it keeps its slot until it is evicted.

use super::replacer::{FrameId, Replacer, ReplacerConfig};
use crate::storage::error::{StorageError, StorageResult};
use log::{debug, error, trace};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    /// Frame parked in this slot, if any.
    frame_id: Option<FrameId>,
    /// Second-chance bit.
    referenced: bool,
}

/// Cost of the most recent successful victim sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Slots looked at by the clock hand, including the victim's.
    pub inspected: usize,
    /// Reference bits cleared along the way.
    pub cleared: usize,
}

#[derive(Debug)]
pub struct ClockReplacer {
    /// Ring of slots, one per frame the replacer can track.
    slots: Vec<Slot>,
    /// Frames that may be evicted right now.
    evictable: HashSet<FrameId>,
    /// Slot position of every parked frame.
    slot_index: HashMap<FrameId, usize>,
    /// Next slot the sweep inspects.
    clock_hand: usize,
    last_sweep: SweepStats,
}

impl ClockReplacer {
    pub fn new(capacity: usize) -> StorageResult<Self> {
        if capacity == 0 {
            return Err(StorageError::InvalidCapacity(capacity));
        }

        debug!("Creating clock replacer with {} slots", capacity);
        Ok(Self {
            slots: vec![Slot::default(); capacity],
            evictable: HashSet::with_capacity(capacity),
            slot_index: HashMap::with_capacity(capacity),
            clock_hand: 0,
            last_sweep: SweepStats::default(),
        })
    }

    pub fn with_config(config: &ReplacerConfig) -> StorageResult<Self> {
        Self::new(config.capacity)
    }

    /// Whether the frame is currently a candidate for eviction.
    pub fn is_evictable(&self, frame_id: FrameId) -> bool {
        self.evictable.contains(&frame_id)
    }

    /// Number of slots holding a frame, evictable or pinned.
    pub fn occupied_slots(&self) -> usize {
        self.slot_index.len()
    }

    /// Slot the next sweep starts from.
    pub fn clock_hand(&self) -> usize {
        self.clock_hand
    }

    /// Reference bit of a parked frame, or None if the frame has no slot.
    pub fn is_referenced(&self, frame_id: FrameId) -> Option<bool> {
        self.slot_index
            .get(&frame_id)
            .map(|&slot| self.slots[slot].referenced)
    }

    /// Cost of the latest sweep that produced a victim.
    pub fn last_sweep(&self) -> SweepStats {
        self.last_sweep
    }

    fn in_range(&self, frame_id: FrameId) -> bool {
        (frame_id as usize) < self.slots.len()
    }

    fn advance(&mut self) {
        self.clock_hand = (self.clock_hand + 1) % self.slots.len();
    }

    /// First empty slot at or after the clock hand, wrapping around.
    fn find_free_slot(&self) -> Option<usize> {
        let capacity = self.slots.len();
        (0..capacity)
            .map(|offset| (self.clock_hand + offset) % capacity)
            .find(|&slot| self.slots[slot].frame_id.is_none())
    }
}

impl Replacer for ClockReplacer {
    fn victim(&mut self) -> Option<FrameId> {
        if self.evictable.is_empty() {
            return None;
        }

        // One full turn clears every set bit, so the second turn must reach
        // an evictable frame with a clear bit.
        let max_steps = 2 * self.slots.len();
        let eligible = self.evictable.len();
        let mut stats = SweepStats::default();

        for _ in 0..max_steps {
            let hand = self.clock_hand;
            stats.inspected += 1;
            self.advance();

            let slot = &mut self.slots[hand];
            let Some(frame_id) = slot.frame_id else {
                continue;
            };
            if !self.evictable.contains(&frame_id) {
                continue;
            }

            if slot.referenced {
                slot.referenced = false;
                stats.cleared += 1;
                continue;
            }

            debug_assert!(stats.cleared <= eligible && stats.inspected <= max_steps);
            *slot = Slot::default();
            self.evictable.remove(&frame_id);
            self.slot_index.remove(&frame_id);
            self.last_sweep = stats;
            trace!(
                "Evicting frame {} from slot {} ({} inspected, {} cleared)",
                frame_id,
                hand,
                stats.inspected,
                stats.cleared
            );
            return Some(frame_id);
        }

        error!(
            "Clock sweep found no victim among {} evictable frames",
            eligible
        );
        debug_assert!(
            false,
            "clock sweep exhausted with {} evictable frames",
            eligible
        );
        None
    }

    fn pin(&mut self, frame_id: FrameId) {
        if !self.in_range(frame_id) {
            return;
        }
        self.evictable.remove(&frame_id);
    }

    fn unpin(&mut self, frame_id: FrameId) -> StorageResult<()> {
        let capacity = self.slots.len();
        if !self.in_range(frame_id) {
            error!(
                "Unpin of frame {} outside replacer range (capacity: {})",
                frame_id, capacity
            );
            return Err(StorageError::FrameOutOfRange { frame_id, capacity });
        }

        if let Some(&slot) = self.slot_index.get(&frame_id) {
            self.slots[slot].referenced = true;
            self.evictable.insert(frame_id);
            return Ok(());
        }

        // Unreachable while ids stay below capacity; guards a corrupted slot index.
        let Some(slot) = self.find_free_slot() else {
            error!("No free slot for frame {} (capacity: {})", frame_id, capacity);
            return Err(StorageError::ReplacerFull { frame_id, capacity });
        };

        self.slots[slot] = Slot {
            frame_id: Some(frame_id),
            referenced: true,
        };
        self.slot_index.insert(frame_id, slot);
        self.evictable.insert(frame_id);
        trace!("Parked frame {} in slot {}", frame_id, slot);
        Ok(())
    }

    fn size(&self) -> usize {
        self.evictable.len()
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}
