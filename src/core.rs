use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::alloc::{Global, RawAlloc};
use crate::buffer::{End, RingBuffer, BASELINE_CAPACITY};
use crate::error::DVecError;
use crate::iter::{Iter, IterMut};

/// A double-ended vector: a deque over one contiguous, circularly
/// interpreted allocation.
///
/// `DVec` offers amortized O(1) insertion and removal at both ends and O(1)
/// random access, like `VecDeque`, while keeping the storage in a single
/// block of `capacity + 1` element slots obtained from a pluggable
/// allocator. Elements must be movable only; `Clone` is needed just for the
/// copying operations and `Default` just for `resize`.
///
/// Growth doubles the capacity (first growth installs a baseline of 10), so
/// a sequence of pushes costs amortized constant time per element.
///
/// ```
/// use dvec::DVec;
///
/// let mut v: DVec<i32> = DVec::new();
/// v.push_back(2)?;
/// v.push_front(1)?;
/// v.push_back(3)?;
///
/// assert_eq!(v.len(), 3);
/// assert_eq!(v[0], 1);
/// assert_eq!(v.pop_back(), Some(3));
/// # Ok::<(), dvec::DVecError>(())
/// ```
pub struct DVec<T, A: RawAlloc = Global> {
    buf: RingBuffer<T, A>,
}

impl<T> DVec<T> {
    /// Creates an empty `DVec`. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T, A: RawAlloc> DVec<T, A> {
    /// Creates an empty `DVec` using the given allocator. Does not allocate.
    pub fn new_in(alloc: A) -> Self {
        Self {
            buf: RingBuffer::new_in(alloc),
        }
    }

    /// Number of elements currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of elements that fit without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Reference to the allocator this container was built with.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::AllocationFailed` if the container was full and
    /// the allocator refused the grown block; the container is unchanged in
    /// that case.
    pub fn push_back(&mut self, value: T) -> Result<(), DVecError> {
        self.buf.push(value, End::Back)
    }

    /// Prepends an element at the front.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::AllocationFailed` if the container was full and
    /// the allocator refused the grown block; the container is unchanged in
    /// that case.
    pub fn push_front(&mut self, value: T) -> Result<(), DVecError> {
        self.buf.push(value, End::Front)
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.buf.is_empty() {
            return None;
        }
        // SAFETY: non-empty checked above.
        Some(unsafe { self.buf.pop(End::Back) })
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.buf.is_empty() {
            return None;
        }
        // SAFETY: non-empty checked above.
        Some(unsafe { self.buf.pop(End::Front) })
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::Empty` if the container holds no elements.
    pub fn try_pop_back(&mut self) -> Result<T, DVecError> {
        self.pop_back().ok_or(DVecError::Empty)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::Empty` if the container holds no elements.
    pub fn try_pop_front(&mut self) -> Result<T, DVecError> {
        self.pop_front().ok_or(DVecError::Empty)
    }

    /// First element, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Last element, or `None` if empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len().wrapping_sub(1))
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len().wrapping_sub(1))
    }

    /// First element.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::Empty` if the container holds no elements.
    pub fn try_front(&self) -> Result<&T, DVecError> {
        self.front().ok_or(DVecError::Empty)
    }

    /// Last element.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::Empty` if the container holds no elements.
    pub fn try_back(&self) -> Result<&T, DVecError> {
        self.back().ok_or(DVecError::Empty)
    }

    /// Element at `index`, counted from the front, or `None` if out of
    /// bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            // SAFETY: index is in bounds.
            Some(unsafe { &*self.buf.element_at(index) })
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            // SAFETY: index is in bounds.
            Some(unsafe { &mut *self.buf.element_at(index) })
        } else {
            None
        }
    }

    /// Element at `index` without any bounds validation.
    ///
    /// This is the unchecked fast path; prefer [`get`](Self::get) or
    /// indexing unless the check has provably been done already.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Anything else reads uninitialized
    /// memory and is undefined behavior.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        &*self.buf.element_at(index)
    }

    /// Mutable variant of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        &mut *self.buf.element_at(index)
    }

    /// Destroys all elements. Capacity is kept; no deallocation happens.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Grows the capacity to at least `n`. Never shrinks and never touches
    /// elements; a no-op when the capacity is already sufficient.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::AllocationFailed` if the allocator refused the
    /// block; the container is unchanged in that case.
    pub fn reserve(&mut self, n: usize) -> Result<(), DVecError> {
        if n > self.buf.capacity() {
            self.buf.reallocate(n)?;
        }
        Ok(())
    }

    /// Changes the length to `n`, appending values produced by `generator`
    /// at the back or popping from the back as needed.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::AllocationFailed` if growing the capacity to `n`
    /// failed; the container is unchanged in that case.
    pub fn resize_with<F>(&mut self, n: usize, mut generator: F) -> Result<(), DVecError>
    where
        F: FnMut() -> T,
    {
        self.reserve(n)?;
        while self.buf.len() < n {
            // Capacity is already n or more, so these pushes cannot fail.
            self.buf.push(generator(), End::Back)?;
        }
        while self.buf.len() > n {
            // SAFETY: len > n >= 0, so the buffer is non-empty.
            unsafe { self.buf.pop(End::Back) };
        }
        Ok(())
    }

    /// Changes the length to `n`, filling with `T::default()` at the back
    /// or popping from the back as needed.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::AllocationFailed` if growing the capacity to `n`
    /// failed; the container is unchanged in that case.
    pub fn resize(&mut self, n: usize) -> Result<(), DVecError>
    where
        T: Default,
    {
        self.resize_with(n, T::default)
    }

    /// Exchanges the contents of two containers in O(1). No element is
    /// moved, copied, or dropped.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Iterator over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf)
    }

    /// Mutable iterator over the elements from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.buf)
    }

    /// Element-wise copy into a fresh container using a clone of this
    /// container's allocator. Reserves the exact final size up front, so at
    /// most one allocation occurs.
    ///
    /// # Errors
    ///
    /// Returns `DVecError::AllocationFailed` if the single allocation was
    /// refused.
    pub fn try_clone(&self) -> Result<Self, DVecError>
    where
        T: Clone,
        A: Clone,
    {
        let mut copy = Self::new_in(self.buf.allocator().clone());
        copy.reserve(self.len())?;
        for item in self.iter() {
            copy.push_back(item.clone())?;
        }
        Ok(copy)
    }
}

impl<T, A: RawAlloc + Default> Default for DVec<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

/// Panics on allocation failure, like the std containers; use
/// [`try_clone`](DVec::try_clone) to observe the failure instead.
impl<T: Clone, A: RawAlloc + Clone> Clone for DVec<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("{err}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if let Err(err) = self.reserve(source.len()) {
            panic!("{err}");
        }
        for item in source.iter() {
            if let Err(err) = self.push_back(item.clone()) {
                panic!("{err}");
            }
        }
    }
}

impl<T, A: RawAlloc> Index<usize> for DVec<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "Index {} out of bounds for vector of length {}",
                index,
                self.len()
            ),
        }
    }
}

impl<T, A: RawAlloc> IndexMut<usize> for DVec<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("Index {index} out of bounds for vector of length {len}"),
        }
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for DVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A: RawAlloc, B: RawAlloc> PartialEq<DVec<T, B>> for DVec<T, A> {
    fn eq(&self, other: &DVec<T, B>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: RawAlloc> Eq for DVec<T, A> {}

impl<T: PartialEq, A: RawAlloc, const N: usize> PartialEq<[T; N]> for DVec<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.len() == N && self.iter().eq(other.iter())
    }
}

/// Reserves the exact final size, so exactly one allocation occurs.
///
/// # Panics
///
/// Panics on allocation failure, like the std containers.
impl<T, const N: usize> From<[T; N]> for DVec<T> {
    fn from(values: [T; N]) -> Self {
        let mut out = Self::new();
        if let Err(err) = out.reserve(N) {
            panic!("{err}");
        }
        for value in values {
            // A slot is reserved for every element.
            if let Err(err) = out.push_back(value) {
                panic!("{err}");
            }
        }
        out
    }
}

/// Reserves the baseline capacity up front and may reallocate while
/// consuming the iterator.
///
/// # Panics
///
/// Panics on allocation failure, like the std containers.
impl<T> FromIterator<T> for DVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        if let Err(err) = out.reserve(BASELINE_CAPACITY) {
            panic!("{err}");
        }
        out.extend(iter);
        out
    }
}

/// Appends every element at the back.
///
/// # Panics
///
/// Panics on allocation failure, like the std containers.
impl<T, A: RawAlloc> Extend<T> for DVec<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push_back(value) {
                panic!("{err}");
            }
        }
    }
}
