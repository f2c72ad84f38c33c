//! In-process engine: reference-counted slots with reuse.
//!
//! Mirrors the header-word refcount of a native runtime: each allocation
//! carries a count of native-side references, starting at zero because the
//! allocating wrapper is the host-side owner. Freed slots go on a free list
//! and are handed out again by later allocations.
//!
//! A handle packs `slot index + 1` into its low half and the slot's
//! generation into its high half. Freeing a slot bumps its generation, so a
//! handle kept from before the free never matches the slot's next tenant.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::engine::{NativeEngine, NativeHandle};

const INDEX_BITS: u32 = usize::BITS / 2;
const INDEX_MASK: usize = (1 << INDEX_BITS) - 1;
const GENERATION_MASK: usize = usize::MAX >> INDEX_BITS;

#[derive(Copy, Clone, Debug, Default)]
struct Slot {
    refcount: usize,
    generation: usize,
    live: bool,
}

#[derive(Debug, Default)]
struct Slots {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl Slots {
    fn get_mut(&mut self, handle: NativeHandle) -> Option<&mut Slot> {
        let (index, generation) = decode(handle)?;
        self.slots
            .get_mut(index)
            .filter(|slot| slot.live && slot.generation == generation)
    }
}

/// Slot allocator implementing [`NativeEngine`].
#[derive(Debug, Default)]
pub struct SlotArena {
    slots: Mutex<Slots>,
    deallocs: AtomicUsize,
    invalid_frees: AtomicUsize,
}

impl SlotArena {
    pub fn new() -> Self {
        SlotArena::default()
    }

    /// Allocate a slot with no native references.
    ///
    /// Returns `None` once every slot index a handle can encode is live.
    pub fn alloc(&self) -> Option<NativeHandle> {
        let mut guard = self.slots.lock();
        let index = match guard.free.pop() {
            Some(index) => index,
            None if guard.slots.len() < INDEX_MASK => {
                guard.slots.push(Slot::default());
                guard.slots.len() - 1
            }
            None => {
                tracing::warn!(live = guard.slots.len(), "arena exhausted");
                return None;
            }
        };
        let slot = &mut guard.slots[index];
        slot.refcount = 0;
        slot.live = true;
        let handle = encode(index, slot.generation)?;
        tracing::trace!(%handle, "arena alloc");
        Some(handle)
    }

    /// Add a native reference. Returns the new count, or `None` for a dead
    /// handle.
    pub fn incref(&self, handle: NativeHandle) -> Option<usize> {
        let mut guard = self.slots.lock();
        let slot = guard.get_mut(handle)?;
        slot.refcount += 1;
        Some(slot.refcount)
    }

    /// Drop a native reference. Returns the new count, or `None` for a dead
    /// handle or one with no references left.
    pub fn decref(&self, handle: NativeHandle) -> Option<usize> {
        let mut guard = self.slots.lock();
        let slot = guard.get_mut(handle)?;
        slot.refcount = slot.refcount.checked_sub(1)?;
        Some(slot.refcount)
    }

    pub fn is_live(&self, handle: NativeHandle) -> bool {
        self.slots.lock().get_mut(handle).is_some()
    }

    /// Number of live slots.
    pub fn live_count(&self) -> usize {
        let guard = self.slots.lock();
        guard.slots.len() - guard.free.len()
    }

    /// Successful deallocations so far.
    pub fn dealloc_count(&self) -> usize {
        self.deallocs.load(Ordering::Acquire)
    }

    /// Deallocations requested for handles that were not live, including
    /// stale handles to a slot that has since been reused.
    pub fn invalid_free_count(&self) -> usize {
        self.invalid_frees.load(Ordering::Acquire)
    }
}

impl NativeEngine for SlotArena {
    fn refcount(&self, handle: NativeHandle) -> usize {
        self.slots
            .lock()
            .get_mut(handle)
            .map_or(0, |slot| slot.refcount)
    }

    fn dealloc(&self, handle: NativeHandle) {
        let mut guard = self.slots.lock();
        let Some(slot) = guard.get_mut(handle) else {
            tracing::warn!(%handle, "dealloc of dead or stale handle");
            self.invalid_frees.fetch_add(1, Ordering::AcqRel);
            return;
        };
        *slot = Slot {
            refcount: 0,
            generation: slot.generation.wrapping_add(1) & GENERATION_MASK,
            live: false,
        };
        if let Some((index, _)) = decode(handle) {
            guard.free.push(index);
        }
        self.deallocs.fetch_add(1, Ordering::AcqRel);
        tracing::trace!(%handle, "arena dealloc");
    }
}

fn encode(index: usize, generation: usize) -> Option<NativeHandle> {
    NativeHandle::new((generation << INDEX_BITS) | (index + 1))
}

/// Split a handle into slot index and generation. `None` for a handle this
/// arena cannot have produced.
fn decode(handle: NativeHandle) -> Option<(usize, usize)> {
    let addr = handle.addr();
    let index = (addr & INDEX_MASK).checked_sub(1)?;
    Some((index, addr >> INDEX_BITS))
}
