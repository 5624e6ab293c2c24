//! BodyArena - insertion-ordered storage with generational handles
//!
//! Two layers:
//! - `entries`: what a handle points at (generation + current slot)
//! - `slots`:   dense, insertion-ordered values; removal leaves a hole
//!
//! Iteration walks `slots`, so order is always insertion order no matter
//! which entries get recycled. Holes are compacted once they outnumber the
//! live values, which keeps removal O(1) amortized.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::handle::BodyHandle;

/// Holes tolerated before compaction is considered
const COMPACT_MIN_HOLES: usize = 16;

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    slot: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct BodyArena<T> {
    entries: Vec<Entry>,
    free: Vec<u32>,
    slots: Vec<Option<(u32, T)>>,
    holes: usize,
}

impl<T> BodyArena<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            slots: Vec::new(),
            holes: 0,
        }
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.slots.len() - self.holes
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a value after every live value.
    pub fn insert(&mut self, value: T) -> BodyHandle {
        let slot = self.slots.len() as u32;
        let index = match self.free.pop() {
            Some(index) => {
                self.entries[index as usize].slot = Some(slot);
                index
            }
            None => {
                self.entries.push(Entry { generation: 0, slot: Some(slot) });
                (self.entries.len() - 1) as u32
            }
        };
        self.slots.push(Some((index, value)));
        BodyHandle::new(index, self.entries[index as usize].generation)
    }

    fn slot_of(&self, handle: BodyHandle) -> Option<usize> {
        let entry = self.entries.get(handle.index() as usize)?;
        if entry.generation != handle.generation() {
            return None;
        }
        entry.slot.map(|s| s as usize)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.slot_of(handle).is_some()
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        let slot = self.slot_of(handle)?;
        self.slots[slot].as_ref().map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        let slot = self.slot_of(handle)?;
        self.slots[slot].as_mut().map(|(_, v)| v)
    }

    /// Remove by handle. Stale or foreign handles yield `None`.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        let slot = self.slot_of(handle)?;
        let (index, value) = self.slots[slot].take()?;

        let entry = &mut self.entries[index as usize];
        entry.generation = entry.generation.wrapping_add(1);
        entry.slot = None;
        self.free.push(index);
        self.holes += 1;

        if self.holes >= COMPACT_MIN_HOLES && self.holes * 2 > self.slots.len() {
            self.compact();
        }
        Some(value)
    }

    /// Drop holes, keeping order, and re-point entries at the new slots.
    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (slot, occupant) in self.slots.iter().enumerate() {
            if let Some((index, _)) = occupant {
                self.entries[*index as usize].slot = Some(slot as u32);
            }
        }
        self.holes = 0;
    }

    /// Remove everything. Outstanding handles become stale.
    pub fn clear(&mut self) {
        for (index, _) in self.slots.drain(..).flatten() {
            let entry = &mut self.entries[index as usize];
            entry.generation = entry.generation.wrapping_add(1);
            entry.slot = None;
            self.free.push(index);
        }
        self.holes = 0;
    }

    // === Slot-level access (for passes that walk the dense order) ===

    /// Number of slots including holes
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)?.as_ref().map(|(_, v)| v)
    }

    pub fn slot_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot)?.as_mut().map(|(_, v)| v)
    }

    /// Mutable access to two distinct live slots, in argument order.
    ///
    /// `None` when `a == b`, either slot is a hole, or out of range.
    pub fn slot_pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)> {
        if a == b {
            return None;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if hi >= self.slots.len() {
            return None;
        }
        let (head, tail) = self.slots.split_at_mut(hi);
        let low = head[lo].as_mut().map(|(_, v)| v)?;
        let high = tail[0].as_mut().map(|(_, v)| v)?;
        if a < b {
            Some((low, high))
        } else {
            Some((high, low))
        }
    }

    // === Iteration (insertion order) ===

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> + '_ {
        self.slots.iter().filter_map(move |occupant| {
            let (index, value) = occupant.as_ref()?;
            let generation = self.entries[*index as usize].generation;
            Some((BodyHandle::new(*index, generation), value))
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(|s| s.as_ref().map(|(_, v)| v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_mut().filter_map(|s| s.as_mut().map(|(_, v)| v))
    }

    #[cfg(feature = "parallel")]
    pub fn par_values_mut(&mut self) -> impl ParallelIterator<Item = &mut T> + '_
    where
        T: Send,
    {
        self.slots.par_iter_mut().filter_map(|s| s.as_mut().map(|(_, v)| v))
    }
}

impl<T> Default for BodyArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
