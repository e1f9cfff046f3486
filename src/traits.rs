//! Ordering and error types shared by the heap
//!
//! This module provides the seam between [`MinHeap`](crate::min_heap::MinHeap)
//! and the caller's notion of "smaller":
//!
//! - [`Comparator`]: single-method ordering interface, implemented for any
//!   `Fn(&K, &K) -> Ordering` closure
//! - [`NaturalOrder`] / [`ReverseOrder`]: zero-sized comparators backed by [`Ord`]
//! - [`HeapError`]: the error returned when querying an empty heap

use std::cmp::Ordering;
use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `min` or `extract_min` was called on an empty heap
    #[error("heap underflow: the heap is empty")]
    Underflow,
}

/// A total preorder over `K`
///
/// The heap holds one comparator for its whole lifetime and consults it for
/// every sift step. The comparator must be consistent and transitive; if it
/// is not, the order of extracted elements is unspecified, but every heap
/// operation still terminates and stays memory safe.
///
/// Any closure `Fn(&K, &K) -> Ordering` is a comparator:
///
/// ```rust
/// use comparator_heap::min_heap::MinHeap;
///
/// // Order strings by length, shortest first
/// let mut heap: MinHeap<&str, _> = MinHeap::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// heap.insert("three");
/// heap.insert("a");
/// heap.insert("to");
///
/// assert_eq!(heap.extract_min(), Ok("a"));
/// ```
pub trait Comparator<K> {
    /// Compares `a` with `b`; `Ordering::Less` means `a` is extracted first
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their [`Ord`] implementation, smallest first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation, largest first
///
/// Turns [`MinHeap`](crate::min_heap::MinHeap) into a max-heap, the way
/// `std::cmp::Reverse` does for `BinaryHeap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<K: Ord> Comparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}
