//! Builds a small heap and prints its keys in ascending order
//!
//! ## Running
//!
//! ```bash
//! cargo run --example ascending
//! ```

use comparator_heap::MinHeap;

fn main() {
    let mut heap = MinHeap::new(|a: &i32, b: &i32| a.cmp(b));
    for x in [5, 2, 3, 8, 1] {
        heap.insert(x);
    }

    for x in heap.iter_sorted() {
        println!("{}", x);
    }
}
