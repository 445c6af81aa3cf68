//! `DVec`: a double-ended vector over a growable ring buffer.
//!
//! `DVec` provides the interface of a deque (amortized constant-time
//! insertion and removal at both ends, constant-time indexing) on top of a
//! single contiguous allocation interpreted circularly. Compared to a
//! chunked deque this keeps the memory footprint compact, at the price of
//! reallocating when full: any growth invalidates outstanding borrows, so
//! there are no stable references across pushes.
//!
//! Storage is obtained from a pluggable allocator (the [`RawAlloc`] trait;
//! [`Global`] by default) as a block of `capacity + 1` element slots. The
//! spare sentinel slot keeps the empty and full states distinguishable
//! without extra bookkeeping. Growth doubles the capacity, starting from a
//! baseline of 10, which amortizes reallocation to O(1) per push.
//!
//! ```
//! use dvec::DVec;
//!
//! let mut v: DVec<i32> = DVec::new();
//! v.push_back(2)?;
//! v.push_front(1)?;
//! v.push_back(3)?;
//! v.push_front(0)?;
//!
//! assert_eq!(v, [0, 1, 2, 3]);
//! assert_eq!(v.pop_front(), Some(0));
//! assert_eq!(v.pop_back(), Some(3));
//!
//! let rest: Vec<i32> = v.into_iter().collect();
//! assert_eq!(rest, vec![1, 2]);
//! # Ok::<(), dvec::DVecError>(())
//! ```
//!
//! # Error Handling
//!
//! Operations that may need new storage (`push_back`, `push_front`,
//! `reserve`, `resize`) return a `Result`: an allocation failure is
//! surfaced as [`DVecError::AllocationFailed`] and leaves the container
//! exactly as it was. Checked removal and access have `try_` variants that
//! report [`DVecError::Empty`] instead of panicking. The raw unchecked
//! fast path survives as `unsafe` methods (`get_unchecked`) whose misuse is
//! undefined behavior by contract, not defended against.
//!
//! # Concurrency
//!
//! `DVec` is a single-threaded container. It holds raw pointers and is
//! intentionally neither `Send` nor `Sync`; serialization of access is the
//! caller's concern.

mod alloc;
mod buffer;
mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::alloc::{Global, RawAlloc};
pub use crate::core::DVec;
pub use crate::error::DVecError;
pub use crate::iter::{IntoIter, Iter, IterMut};
