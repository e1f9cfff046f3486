//! Standard library compatibility layer
//!
//! Gives [`MinHeap`] the method names and collection traits of
//! `std::collections::BinaryHeap`, so it can stand in where a `BinaryHeap`
//! was used.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: `MinHeap` pops the smallest key. Use
//!   [`ReverseOrder`](crate::traits::ReverseOrder) to get max-heap behavior.
//! - **Ordering**: comes from the heap's comparator, not from `K: Ord`.
//! - **Iteration**: `into_iter` yields keys in ascending order, not in
//!   storage order.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::min_heap::MinHeap;
//! use comparator_heap::NaturalOrder;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: MinHeap<i32, NaturalOrder> = MinHeap::default();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::min_heap::{IntoSorted, MinHeap};
use crate::traits::Comparator;
use std::fmt;

impl<K, C: Comparator<K>> MinHeap<K, C> {
    /// Pushes a key onto the heap
    ///
    /// This is equivalent to [`MinHeap::insert`].
    pub fn push(&mut self, key: K) {
        self.insert(key)
    }

    /// Returns a reference to the smallest key, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&K> {
        self.min().ok()
    }

    /// Removes and returns the smallest key, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<K> {
        self.extract_min().ok()
    }
}

impl<K, C: Comparator<K> + Default> Default for MinHeap<K, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<K, C: Comparator<K>> Extend<K> for MinHeap<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K, C: Comparator<K> + Default> FromIterator<K> for MinHeap<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(C::default(), iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<K, C: Comparator<K>> IntoIterator for MinHeap<K, C> {
    type Item = K;
    type IntoIter = IntoSorted<K, C>;

    /// Consumes the heap, yielding its keys in ascending order
    fn into_iter(self) -> Self::IntoIter {
        self.into_sorted()
    }
}

impl<K: fmt::Debug, C> fmt::Debug for MinHeap<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.as_slice().len())
            .field("storage", &self.as_slice())
            .finish()
    }
}
