//! Comparator-ordered binary min-heap
//!
//! This crate provides [`MinHeap`], an array-backed binary min-heap whose
//! ordering comes from a caller-supplied [`Comparator`] rather than from
//! `K: Ord`. Any `Fn(&K, &K) -> Ordering` closure is a comparator.
//!
//! # Features
//!
//! - **insert / extract_min**: O(log n) amortized; the buffer doubles when full
//!   and halves when a quarter full
//! - **min**: O(1), returns [`HeapError::Underflow`] on an empty heap
//! - **Clone**: O(n) structural copy with an independent buffer
//! - **iter_sorted**: ascending traversal over a snapshot, leaving the heap intact
//! - **BinaryHeap-style API**: `push`/`peek`/`pop`, `FromIterator`, `Extend`
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::new(|a: &f64, b: &f64| a.total_cmp(b));
//! heap.insert(2.5);
//! heap.insert(-1.0);
//! heap.insert(0.5);
//!
//! assert_eq!(heap.min(), Ok(&-1.0));
//! assert_eq!(heap.iter_sorted().collect::<Vec<_>>(), vec![-1.0, 0.5, 2.5]);
//! assert_eq!(heap.extract_min(), Ok(-1.0));
//! assert_eq!(heap.len(), 2);
//!
//! let mut empty: MinHeap<f64, _> = MinHeap::new(f64::total_cmp);
//! assert_eq!(empty.extract_min(), Err(HeapError::Underflow));
//! ```

pub mod min_heap;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use min_heap::{IntoSorted, MinHeap};
pub use traits::{Comparator, HeapError, NaturalOrder, ReverseOrder};
