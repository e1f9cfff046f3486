//! Binary min-heap ordered by a comparator
//!
//! An array-backed binary heap that stores bare keys and asks a caller-supplied
//! [`Comparator`] which of two keys comes first.
//!
//! Positions are 1-based: the root is position 1, the children of `k` are
//! `2k` and `2k + 1`, and its parent is `k / 2`. Position `k` lives in slot
//! `k - 1` of the backing vector.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity         |
//! |---------------|--------------------|
//! | `insert`      | O(log n) amortized |
//! | `extract_min` | O(log n) amortized |
//! | `min`         | O(1)               |
//! | `clone`       | O(n)               |
//! | `iter_sorted` | O(n) + O(log n) per item |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::min_heap::MinHeap;
//! use comparator_heap::HeapError;
//!
//! let mut heap = MinHeap::new(|a: &i32, b: &i32| a.cmp(b));
//! heap.insert(5);
//! heap.insert(2);
//! heap.insert(3);
//!
//! assert_eq!(heap.iter_sorted().collect::<Vec<_>>(), vec![2, 3, 5]);
//! assert_eq!(heap.len(), 3);
//!
//! assert_eq!(heap.extract_min(), Ok(2));
//! assert_eq!(heap.extract_min(), Ok(3));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
//! ```

use crate::traits::{Comparator, HeapError};
use std::cmp::Ordering;
use std::iter::FusedIterator;

const MIN_CAPACITY: usize = 1;

/// Largest buffer allocated up front; beyond this the `Vec` grows as keys arrive
const MAX_PREALLOC: usize = 1 << 16;

/// A binary min-heap of `K`, ordered by `C`
///
/// The backing buffer doubles when an insert finds it full and halves when an
/// extraction leaves it at most a quarter full, so both operations are
/// O(log n) amortized and wasted space stays within a constant factor.
pub struct MinHeap<K, C> {
    /// Heap-ordered keys; position `k` is stored at index `k - 1`
    storage: Vec<K>,
    /// Logical buffer size driving the grow/shrink policy, always >= 1
    capacity: usize,
    comparator: C,
}

impl<K, C: Comparator<K>> MinHeap<K, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn new(comparator: C) -> Self {
        Self::with_capacity(comparator, MIN_CAPACITY)
    }

    /// Creates an empty heap with room for `capacity` keys before it grows
    ///
    /// The capacity is only a starting point; a request of zero is treated as one,
    /// and at most 65536 slots are allocated up front.
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            storage: Vec::with_capacity(capacity.min(MAX_PREALLOC)),
            capacity,
            comparator,
        }
    }

    /// Returns true if the heap holds no keys
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns the comparator that orders this heap
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the smallest key without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty.
    pub fn min(&self) -> Result<&K, HeapError> {
        self.storage.first().ok_or(HeapError::Underflow)
    }

    /// Inserts a key
    pub fn insert(&mut self, key: K) {
        if self.storage.len() == self.capacity {
            self.resize(self.capacity * 2);
        }
        self.storage.push(key);
        self.swim(self.storage.len());
    }

    /// Removes and returns the smallest key
    ///
    /// # Errors
    /// Returns [`HeapError::Underflow`] if the heap is empty; the heap is left untouched.
    pub fn extract_min(&mut self) -> Result<K, HeapError> {
        if self.storage.is_empty() {
            return Err(HeapError::Underflow);
        }

        let min = self.storage.swap_remove(0);
        self.sink(1);

        let count = self.storage.len();
        if count > 0 && count <= self.capacity / 4 {
            self.resize(self.capacity / 2);
        }

        Ok(min)
    }

    /// Returns the keys in ascending order without modifying the heap
    ///
    /// Each call works on its own copy, so traversals are independent of each
    /// other and of later changes to `self`. The iterator yields exactly
    /// `self.len()` keys, as counted when it was created.
    ///
    /// ```rust
    /// use comparator_heap::min_heap::MinHeap;
    /// use comparator_heap::NaturalOrder;
    ///
    /// let mut heap = MinHeap::new(NaturalOrder);
    /// heap.extend([4, 1, 3]);
    ///
    /// let first: Vec<_> = heap.iter_sorted().collect();
    /// let second: Vec<_> = heap.iter_sorted().collect();
    /// assert_eq!(first, vec![1, 3, 4]);
    /// assert_eq!(first, second);
    /// assert_eq!(heap.len(), 3);
    /// ```
    pub fn iter_sorted(&self) -> IntoSorted<K, C>
    where
        K: Clone,
        C: Clone,
    {
        self.clone().into_sorted()
    }

    /// Consumes the heap, yielding its keys in ascending order
    pub fn into_sorted(self) -> IntoSorted<K, C> {
        IntoSorted { heap: self }
    }

    /// Consumes the heap, returning its keys in ascending order
    pub fn into_sorted_vec(self) -> Vec<K> {
        self.into_sorted().collect()
    }

    /// Checks that every parent compares less than or equal to its children
    pub fn verify_heap_property(&self) -> bool {
        let len = self.storage.len();
        (2..=len).all(|child| !self.greater(child / 2, child))
    }

    /// True if the key at position `a` compares greater than the one at `b`
    #[inline]
    fn greater(&self, a: usize, b: usize) -> bool {
        self.comparator
            .compare(&self.storage[a - 1], &self.storage[b - 1])
            == Ordering::Greater
    }

    /// Move the key at position `k` up while its parent compares greater
    fn swim(&mut self, mut k: usize) {
        while k > 1 {
            let parent = k / 2;
            if !self.greater(parent, k) {
                break;
            }
            self.storage.swap(parent - 1, k - 1);
            k = parent;
        }
    }

    /// Move the key at position `k` down while its smaller child compares less
    fn sink(&mut self, mut k: usize) {
        let len = self.storage.len();
        while 2 * k <= len {
            let mut child = 2 * k;
            if child < len && self.greater(child, child + 1) {
                child += 1;
            }
            if !self.greater(k, child) {
                break;
            }
            self.storage.swap(k - 1, child - 1);
            k = child;
        }
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.storage.len() && capacity >= MIN_CAPACITY);
        // Growth only happens on a full buffer, so the reservation matches what is held
        if capacity > self.capacity {
            self.storage.reserve_exact(capacity - self.storage.len());
        } else {
            self.storage.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, C> MinHeap<K, C> {
    /// Returns the keys in storage (heap) order
    ///
    /// Position `k` of the heap is element `k - 1` of the slice.
    pub fn as_slice(&self) -> &[K] {
        &self.storage
    }
}

impl<K: Clone, C: Clone> Clone for MinHeap<K, C> {
    /// Copies the heap into an independent buffer, preserving element positions
    fn clone(&self) -> Self {
        let reserve = self.capacity.min(MAX_PREALLOC).max(self.storage.len());
        let mut storage = Vec::with_capacity(reserve);
        storage.extend_from_slice(&self.storage);
        Self {
            storage,
            capacity: self.capacity,
            comparator: self.comparator.clone(),
        }
    }
}

/// Iterator yielding the keys of a [`MinHeap`] in ascending order
///
/// Created by [`MinHeap::iter_sorted`], [`MinHeap::into_sorted`] or
/// `MinHeap::into_iter`. It owns the heap it drains.
pub struct IntoSorted<K, C> {
    heap: MinHeap<K, C>,
}

impl<K, C: Comparator<K>> Iterator for IntoSorted<K, C> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<K, C: Comparator<K>> ExactSizeIterator for IntoSorted<K, C> {}

impl<K, C: Comparator<K>> FusedIterator for IntoSorted<K, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{NaturalOrder, ReverseOrder};

    #[test]
    fn test_basic_operations() {
        let mut heap = MinHeap::new(NaturalOrder);

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(5);
        heap.insert(2);
        heap.insert(3);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.min(), Ok(&2));

        assert_eq!(heap.iter_sorted().collect::<Vec<_>>(), vec![2, 3, 5]);
        assert_eq!(heap.len(), 3);

        assert_eq!(heap.extract_min(), Ok(2));
        assert_eq!(heap.extract_min(), Ok(3));
        assert_eq!(heap.extract_min(), Ok(5));
        assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
    }

    #[test]
    fn test_underflow_leaves_heap_untouched() {
        let mut heap: MinHeap<i32, _> = MinHeap::with_capacity(NaturalOrder, 8);

        assert_eq!(heap.min(), Err(HeapError::Underflow));
        assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.capacity(), 8);
    }

    #[test]
    fn test_extract_moves_last_into_root() {
        let mut heap = MinHeap::new(NaturalOrder);
        heap.extend([1, 2, 3]);
        assert_eq!(heap.as_slice(), &[1, 2, 3]);

        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.as_slice(), &[2, 3]);
        assert_eq!(heap.extract_min(), Ok(2));
        assert_eq!(heap.as_slice(), &[3]);
        assert_eq!(heap.extract_min(), Ok(3));
        assert!(heap.as_slice().is_empty());
    }

    #[test]
    fn test_duplicate_keys() {
        let mut heap = MinHeap::new(NaturalOrder);

        heap.insert(1);
        heap.insert(1);
        heap.insert(1);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(1));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = MinHeap::new(NaturalOrder);
        let input: Vec<i32> = (1..=10).rev().collect();

        for &x in &input {
            heap.insert(x);
            assert!(heap.verify_heap_property());
        }

        let mut output = Vec::new();
        while let Ok(x) = heap.extract_min() {
            output.push(x);
            assert!(heap.verify_heap_property());
        }

        let mut reversed = input.clone();
        reversed.reverse();
        assert_eq!(output, reversed);
    }

    #[test]
    fn test_reverse_comparator() {
        let mut heap = MinHeap::new(ReverseOrder);

        for i in 0..20 {
            heap.insert(i);
        }

        for i in (0..20).rev() {
            assert_eq!(heap.extract_min(), Ok(i));
        }
    }

    #[test]
    fn test_capacity_doubles_when_full() {
        let mut heap = MinHeap::new(NaturalOrder);
        assert_eq!(heap.capacity(), 1);

        heap.insert(1);
        assert_eq!(heap.capacity(), 1);
        heap.insert(2);
        assert_eq!(heap.capacity(), 2);
        heap.insert(3);
        assert_eq!(heap.capacity(), 4);
        heap.insert(4);
        assert_eq!(heap.capacity(), 4);
        heap.insert(5);
        assert_eq!(heap.capacity(), 8);
    }

    #[test]
    fn test_capacity_halves_at_quarter() {
        let mut heap = MinHeap::new(NaturalOrder);
        for i in 0..16 {
            heap.insert(i);
        }
        assert_eq!(heap.capacity(), 16);

        // 16 -> 5 elements: still above a quarter
        for _ in 0..11 {
            heap.extract_min().unwrap();
        }
        assert_eq!(heap.capacity(), 16);

        // 4 elements is exactly a quarter of 16
        heap.extract_min().unwrap();
        assert_eq!(heap.capacity(), 8);

        // 2 of 8
        heap.extract_min().unwrap();
        heap.extract_min().unwrap();
        assert_eq!(heap.capacity(), 4);

        // 1 of 4
        heap.extract_min().unwrap();
        assert_eq!(heap.capacity(), 2);

        // Emptying the heap never shrinks to zero
        heap.extract_min().unwrap();
        assert_eq!(heap.capacity(), 2);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_huge_capacity_request_is_advisory() {
        let huge = usize::MAX / 2;
        let mut heap = MinHeap::with_capacity(NaturalOrder, huge);
        assert_eq!(heap.capacity(), huge);

        heap.insert(3u64);
        heap.insert(1);
        let copy = heap.clone();
        assert_eq!(copy.capacity(), huge);

        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.capacity(), huge / 2);
        assert_eq!(heap.extract_min(), Ok(3));
        assert_eq!(copy.into_sorted_vec(), vec![1, 3]);
    }

    #[test]
    fn test_with_zero_capacity() {
        let mut heap = MinHeap::with_capacity(NaturalOrder, 0);
        assert_eq!(heap.capacity(), 1);

        heap.insert(7);
        heap.insert(6);
        assert_eq!(heap.extract_min(), Ok(6));
        assert_eq!(heap.extract_min(), Ok(7));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = MinHeap::new(NaturalOrder);
        for x in [9, 4, 7, 1] {
            a.insert(x);
        }

        let mut b = a.clone();
        assert_eq!(b.capacity(), a.capacity());

        a.insert(0);
        assert_eq!(b.len(), 4);
        assert_eq!(b.min(), Ok(&1));

        b.extract_min().unwrap();
        b.extract_min().unwrap();
        assert_eq!(a.len(), 5);
        assert_eq!(a.iter_sorted().collect::<Vec<_>>(), vec![0, 1, 4, 7, 9]);
        assert_eq!(b.into_sorted_vec(), vec![7, 9]);
    }

    #[test]
    fn test_iter_sorted_size_hint() {
        let mut heap = MinHeap::new(NaturalOrder);
        heap.insert(3);
        heap.insert(1);

        let mut iter = heap.iter_sorted();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_inconsistent_comparator_terminates() {
        // Claims every pair is out of order; ordering is meaningless but
        // every operation must still finish.
        let mut heap = MinHeap::new(|_: &u8, _: &u8| Ordering::Greater);
        for x in 0..32 {
            heap.insert(x);
        }
        let mut drained = heap.into_sorted_vec();
        drained.sort_unstable();
        assert_eq!(drained, (0..32).collect::<Vec<_>>());
    }
}
