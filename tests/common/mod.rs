#![allow(dead_code)]

use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

use dvec::{DVecError, Global, RawAlloc};

#[derive(Debug, Default)]
struct AllocStats {
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
    live_blocks: Cell<usize>,
    live_slots: Cell<usize>,
}

/// Test allocator wrapping `Global` with per-instance counters and an
/// optional one-shot failure trigger. Clones share the same counters, so a
/// cloned container reports into the allocator it inherited.
#[derive(Clone, Default)]
pub struct CountingAlloc {
    stats: Rc<AllocStats>,
    fail_next: Rc<Cell<bool>>,
}

impl CountingAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total successful allocate calls.
    pub fn allocations(&self) -> usize {
        self.stats.allocations.get()
    }

    /// Total deallocate calls.
    pub fn deallocations(&self) -> usize {
        self.stats.deallocations.get()
    }

    /// Blocks currently outstanding.
    pub fn live_blocks(&self) -> usize {
        self.stats.live_blocks.get()
    }

    /// Sum of the element extents of outstanding blocks.
    pub fn live_slots(&self) -> usize {
        self.stats.live_slots.get()
    }

    /// Makes the next allocate call fail with an out-of-memory error.
    pub fn fail_next_allocation(&self) {
        self.fail_next.set(true);
    }
}

impl RawAlloc for CountingAlloc {
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, DVecError> {
        if self.fail_next.replace(false) {
            return Err(DVecError::AllocationFailed { elements: count });
        }
        let ptr = Global.allocate::<T>(count)?;
        self.stats.allocations.set(self.stats.allocations.get() + 1);
        self.stats.live_blocks.set(self.stats.live_blocks.get() + 1);
        self.stats.live_slots.set(self.stats.live_slots.get() + count);
        Ok(ptr)
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize) {
        self.stats.deallocations.set(self.stats.deallocations.get() + 1);
        self.stats.live_blocks.set(self.stats.live_blocks.get() - 1);
        self.stats.live_slots.set(self.stats.live_slots.get() - count);
        Global.deallocate(ptr, count);
    }
}
