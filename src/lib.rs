//! Comparator-ordered Binary Heap for Rust
//!
//! This crate provides [`PriorityQueue`], a growable array-backed binary
//! min-heap whose ordering rule is a value chosen at construction, and which
//! can remove arbitrary elements, not only the root, while keeping the heap
//! property intact.
//!
//! # Features
//!
//! - **Pluggable order**: natural `Ord`, reversed, float total order, or any
//!   `Fn(&T, &T) -> Ordering` closure (see [`compare`])
//! - **Arbitrary removal**: `remove_at`, `remove`, `remove_all`, `retain_all`
//!   repair the heap in whichever direction the displaced element must move
//! - **Bulk construction**: O(n) bottom-up heapify from a vector
//! - **Failing and non-failing accessors**: `element`/`extract_min` return
//!   [`HeapError::EmptyCollection`], `peek`/`pop` return `None`
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::{HeapError, PriorityQueue};
//!
//! let mut heap = PriorityQueue::new();
//! heap.push(5).unwrap();
//! heap.push(2).unwrap();
//! heap.push(8).unwrap();
//! assert!(heap.offer(1));
//!
//! assert_eq!(heap.element(), Ok(&1));
//! assert_eq!(heap.remove(&2), Ok(true));
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.extract_min(), Err(HeapError::EmptyCollection));
//! ```

pub mod compare;
pub mod priority_queue;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{Comparator, FloatOrder, Natural, Reversed};
pub use priority_queue::PriorityQueue;
pub use traits::{Heap, HeapError};
