//! Common traits for heap data structures
//!
//! This module provides:
//!
//! - [`HeapError`]: the error type returned by every fallible queue operation
//! - [`Heap`]: the minimal priority-queue surface shared by heap implementations
//!
//! The [`Heap`] trait mirrors the API of Rust's `BinaryHeap` (`push`, `pop`,
//! `peek`), except that heaps in this crate are min-heaps over their
//! comparator and `push` may refuse a value.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A value or parameter was refused before any mutation took place
    ///
    /// Raised for a zero initial capacity and for values the comparator does
    /// not admit (for example NaN under [`FloatOrder`](crate::compare::FloatOrder)).
    InvalidArgument(&'static str),
    /// A failing accessor (`element`, `extract_min`) was called on an empty heap
    EmptyCollection,
    /// An index-based operation addressed a slot outside `0..len`
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The number of live elements at the time of the call
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            HeapError::EmptyCollection => write!(f, "heap is empty"),
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for heap of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// "Minimum" is decided by the heap's comparator; supply a reversed
/// comparator to get max-first behavior.
///
/// # Example
///
/// ```rust
/// use comparator_heap::Heap;
/// use comparator_heap::PriorityQueue;
///
/// let mut heap: PriorityQueue<i32> = Heap::new();
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the heap refuses the value.
    ///
    /// # Time Complexity
    /// O(log n), O(1) amortized for the buffer growth.
    fn push(&mut self, item: T) -> Result<(), HeapError>;

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
