use std::mem;
use std::ptr::{self, NonNull};

use crate::alloc::RawAlloc;
use crate::error::DVecError;

/// Capacity installed by the first growth from an unallocated buffer.
pub(crate) const BASELINE_CAPACITY: usize = 10;

/// Selects which end of the buffer an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    Front,
    Back,
}

/// The raw circular storage behind [`DVec`](crate::DVec).
///
/// Owns a block of `capacity + 1` slots obtained from the allocator. The
/// extra sentinel slot lets `begin == end` always mean "empty", so the full
/// and empty states are never confused. The logical region `[begin, end)`
/// is interpreted circularly: when `begin > end` as raw addresses, the data
/// runs from `begin` to `storage_end` and continues from `storage_begin` to
/// `end`. Slots outside the logical region are uninitialized memory.
///
/// This layer is unchecked: `pop` and `element_at` state their preconditions
/// as `unsafe` contracts and do no validation. Emptiness and bounds checks
/// live one layer up, in the container.
#[derive(Debug)]
pub(crate) struct RingBuffer<T, A: RawAlloc> {
    pub(crate) storage_begin: *mut T,
    pub(crate) storage_end: *mut T,
    pub(crate) begin: *mut T,
    pub(crate) end: *mut T,
    capacity: usize,
    size: usize,
    alloc: A,
}

impl<T, A: RawAlloc> RingBuffer<T, A> {
    /// Creates an unallocated buffer. The first growing operation allocates.
    pub(crate) fn new_in(alloc: A) -> Self {
        Self {
            storage_begin: ptr::null_mut(),
            storage_end: ptr::null_mut(),
            begin: ptr::null_mut(),
            end: ptr::null_mut(),
            capacity: 0,
            size: 0,
            alloc,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.size
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Whether the logical region wraps around the physical end.
    fn is_wrapped(&self) -> bool {
        self.begin > self.end
    }

    /// Replaces the storage block with one of `n + 1` slots and relocates
    /// the logical region to the start of the new block, restoring linear
    /// order.
    ///
    /// Allocation happens before any state is touched, so a failed
    /// allocation leaves the buffer exactly as it was. Relocation itself is
    /// a bitwise move (`copy_nonoverlapping`); no element code runs.
    pub(crate) fn reallocate(&mut self, n: usize) -> Result<(), DVecError> {
        assert!(mem::size_of::<T>() != 0, "zero-sized element types are not supported");
        debug_assert!(n > self.capacity);

        let new_begin = self.alloc.allocate::<T>(n + 1)?.as_ptr();
        if !self.storage_begin.is_null() {
            // SAFETY: the logical region holds exactly `size` initialized
            // elements; the new block has room for them and cannot overlap
            // a live allocation.
            unsafe {
                if self.is_wrapped() {
                    let tail_len = self.storage_end.offset_from(self.begin) as usize;
                    ptr::copy_nonoverlapping(self.begin, new_begin, tail_len);
                    let head_len = self.end.offset_from(self.storage_begin) as usize;
                    ptr::copy_nonoverlapping(self.storage_begin, new_begin.add(tail_len), head_len);
                } else {
                    let len = self.end.offset_from(self.begin) as usize;
                    ptr::copy_nonoverlapping(self.begin, new_begin, len);
                }
                // Elements were moved out bitwise; free the old block
                // without running destructors.
                self.alloc.deallocate(
                    NonNull::new_unchecked(self.storage_begin),
                    self.capacity + 1,
                );
            }
        }
        self.storage_begin = new_begin;
        // SAFETY: the allocation spans `n + 1` slots; `size <= capacity < n`.
        unsafe {
            self.storage_end = new_begin.add(n + 1);
            self.begin = new_begin;
            self.end = new_begin.add(self.size);
        }
        self.capacity = n;
        Ok(())
    }

    /// Grows for one more element: baseline capacity from empty, doubling
    /// afterwards. No-op when a slot is free.
    fn grow_for_push(&mut self) -> Result<(), DVecError> {
        if self.size < self.capacity {
            return Ok(());
        }
        let target = if self.capacity == 0 {
            BASELINE_CAPACITY
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(DVecError::AllocationFailed { elements: usize::MAX })?
        };
        self.reallocate(target)
    }

    /// Writes `value` at the chosen end, reallocating first when full.
    ///
    /// On allocation failure nothing has changed (strong guarantee). Once a
    /// slot is available the write itself cannot fail.
    pub(crate) fn push(&mut self, value: T, at: End) -> Result<(), DVecError> {
        self.grow_for_push()?;
        // SAFETY: after `grow_for_push`, at least one slot outside the
        // logical region is free; the pointer steps below stay inside the
        // `capacity + 1`-slot block, wrapping at its bounds.
        unsafe {
            match at {
                End::Front => {
                    if self.begin == self.storage_begin {
                        self.begin = self.storage_end;
                    }
                    self.begin = self.begin.sub(1);
                    ptr::write(self.begin, value);
                }
                End::Back => {
                    if self.end == self.storage_end {
                        self.end = self.storage_begin;
                    }
                    ptr::write(self.end, value);
                    self.end = self.end.add(1);
                }
            }
        }
        self.size += 1;
        Ok(())
    }

    /// Reads the element out of the chosen end and retires its slot.
    ///
    /// # Safety
    ///
    /// The buffer must be non-empty. Calling this on an empty buffer reads
    /// uninitialized memory.
    pub(crate) unsafe fn pop(&mut self, at: End) -> T {
        debug_assert!(!self.is_empty());
        let value = match at {
            End::Front => {
                let value = ptr::read(self.begin);
                self.begin = self.begin.add(1);
                if self.begin == self.storage_end {
                    self.begin = self.storage_begin;
                }
                value
            }
            End::Back => {
                if self.end == self.storage_begin {
                    self.end = self.storage_end;
                }
                self.end = self.end.sub(1);
                ptr::read(self.end)
            }
        };
        self.size -= 1;
        value
    }

    /// Raw position of the `x`-th logical element, wrapping past the
    /// physical end when the region is circular.
    ///
    /// # Safety
    ///
    /// `x` must be less than `len()`. No bounds validation is performed;
    /// an out-of-bounds `x` yields a pointer into uninitialized memory.
    pub(crate) unsafe fn element_at(&self, x: usize) -> *mut T {
        if self.is_wrapped() {
            let until_edge = self.storage_end.offset_from(self.begin) as usize;
            if x >= until_edge {
                return self.storage_begin.add(x - until_edge);
            }
        }
        self.begin.add(x)
    }

    /// Destroys every element in the logical region and resets it to empty.
    /// The storage block is kept.
    pub(crate) fn clear(&mut self) {
        if self.storage_begin.is_null() {
            return;
        }
        // SAFETY: exactly the logical region holds initialized elements;
        // dropping it slot by slot as one or two slices matches that.
        unsafe {
            if self.is_wrapped() {
                let tail_len = self.storage_end.offset_from(self.begin) as usize;
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.begin, tail_len));
                let head_len = self.end.offset_from(self.storage_begin) as usize;
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.storage_begin, head_len));
            } else {
                let len = self.end.offset_from(self.begin) as usize;
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.begin, len));
            }
        }
        self.begin = self.storage_begin;
        self.end = self.storage_begin;
        self.size = 0;
    }
}

impl<T, A: RawAlloc> Drop for RingBuffer<T, A> {
    fn drop(&mut self) {
        if self.storage_begin.is_null() {
            return;
        }
        self.clear();
        // SAFETY: the block came from `allocate(capacity + 1)` on this
        // allocator and all elements were destroyed above.
        unsafe {
            self.alloc.deallocate(
                NonNull::new_unchecked(self.storage_begin),
                self.capacity + 1,
            );
        }
    }
}
