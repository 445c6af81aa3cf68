use std::marker::PhantomData;

use crate::alloc::RawAlloc;
use crate::buffer::RingBuffer;
use crate::core::DVec;

/// Iterator over references to the elements of a [`DVec`], front to back.
///
/// Carries the storage bounds by value, so stepping wraps around the
/// physical end of the block without consulting the container. The borrow
/// on the container keeps it unmodified (and the cursors valid) for the
/// iterator's whole lifetime.
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct Iter<'a, T> {
    front: *const T,
    back: *const T,
    storage_begin: *const T,
    storage_end: *const T,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new<A: RawAlloc>(buf: &'a RingBuffer<T, A>) -> Self {
        Self {
            front: buf.begin,
            back: buf.end,
            storage_begin: buf.storage_begin,
            storage_end: buf.storage_end,
            remaining: buf.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `remaining > 0` places the cursor on an initialized slot;
        // the step below stays inside the storage block, wrapping at its
        // physical end.
        let item = unsafe { &*self.front };
        self.front = unsafe { self.front.add(1) };
        if self.front == self.storage_end {
            self.front = self.storage_begin;
        }
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.back == self.storage_begin {
            self.back = self.storage_end;
        }
        // SAFETY: as in `next`; the slot before the back cursor is
        // initialized while `remaining > 0`.
        self.back = unsafe { self.back.sub(1) };
        self.remaining -= 1;
        Some(unsafe { &*self.back })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over mutable references to the elements of a [`DVec`], front to
/// back.
pub struct IterMut<'a, T> {
    front: *mut T,
    back: *mut T,
    storage_begin: *mut T,
    storage_end: *mut T,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new<A: RawAlloc>(buf: &'a mut RingBuffer<T, A>) -> Self {
        Self {
            front: buf.begin,
            back: buf.end,
            storage_begin: buf.storage_begin,
            storage_end: buf.storage_end,
            remaining: buf.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: as in `Iter::next`; each slot is yielded at most once, so
        // the mutable borrows never alias.
        let item = unsafe { &mut *self.front };
        self.front = unsafe { self.front.add(1) };
        if self.front == self.storage_end {
            self.front = self.storage_begin;
        }
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.back == self.storage_begin {
            self.back = self.storage_end;
        }
        // SAFETY: as in `next`.
        self.back = unsafe { self.back.sub(1) };
        self.remaining -= 1;
        Some(unsafe { &mut *self.back })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a [`DVec`], front to back.
pub struct IntoIter<T, A: RawAlloc> {
    vec: DVec<T, A>,
}

impl<T, A: RawAlloc> IntoIter<T, A> {
    pub(crate) fn new(vec: DVec<T, A>) -> Self {
        Self { vec }
    }
}

impl<T, A: RawAlloc> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.vec.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.vec.len(), Some(self.vec.len()))
    }
}

impl<T, A: RawAlloc> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        self.vec.pop_back()
    }
}

impl<T, A: RawAlloc> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: RawAlloc> IntoIterator for DVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    /// Consumes the container; elements come out front to back.
    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter::new(self)
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a DVec<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a mut DVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
