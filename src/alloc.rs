use std::ptr::NonNull;
use std::alloc::{alloc, dealloc, Layout};

use crate::error::DVecError;

/// Allocation capability used by [`DVec`](crate::DVec) for its storage block.
///
/// An implementation hands out uninitialized storage for a requested number
/// of elements and takes it back later. The container guarantees that every
/// successful `allocate` is matched by exactly one `deallocate` with the
/// same element count, so stateful implementations (arenas, instrumented
/// test allocators) can rely on balanced calls.
pub trait RawAlloc {
    /// Allocates uninitialized storage for `count` elements of type `T`.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::AllocationFailed` if the storage cannot be
    /// obtained. A failed call must not leave anything to deallocate.
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, DVecError>;

    /// Returns storage previously obtained from [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from a call to `allocate::<T>` on this same
    /// allocator, `count` must equal the count passed to that call, and the
    /// block must not be used afterwards.
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize);
}

/// The default allocator, backed by the global heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

impl RawAlloc for Global {
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, DVecError> {
        let layout = Layout::array::<T>(count)
            .map_err(|_| DVecError::AllocationFailed { elements: count })?;
        if layout.size() == 0 {
            return Err(DVecError::AllocationFailed { elements: count });
        }
        // SAFETY: the layout is non-empty, checked above.
        let raw = unsafe { alloc(layout) };
        NonNull::new(raw.cast::<T>()).ok_or(DVecError::AllocationFailed { elements: count })
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize) {
        // Layout::array succeeded for this count when the block was handed
        // out, so it cannot fail here.
        if let Ok(layout) = Layout::array::<T>(count) {
            dealloc(ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}
