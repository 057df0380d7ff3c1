//! Standard library compatibility layer
//!
//! Implements the std collection traits for [`PriorityQueue`] and conversions
//! to and from `std::collections::BinaryHeap`.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: [`PriorityQueue`] is a min-heap, while
//!   `BinaryHeap` is a max-heap. The conversions go through
//!   `BinaryHeap<Reverse<T>>`, which pops in the same order.
//! - **Refused values**: `Extend` skips values the comparator does not admit,
//!   since the trait cannot report an error. Use
//!   [`PriorityQueue::push_all`] to get an error instead.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Reverse;
//! use std::collections::BinaryHeap;
//! use comparator_heap::PriorityQueue;
//!
//! let mut heap: PriorityQueue<i32> = [5, 3, 7].into_iter().collect();
//! assert_eq!(heap.peek(), Some(&3));
//!
//! let mut std_heap: BinaryHeap<Reverse<i32>> = heap.into();
//! assert_eq!(std_heap.pop(), Some(Reverse(3)));
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::slice;
use std::vec;

use log::debug;

use crate::compare::{Comparator, Natural};
use crate::priority_queue::PriorityQueue;

impl<T: Clone, C: Clone> Clone for PriorityQueue<T, C> {
    /// Duplicates the buffer, keeping its capacity, and clones the comparator
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.capacity());
        data.extend_from_slice(&self.data);
        Self {
            data,
            cmp: self.cmp.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.cmp.clone_from(&source.cmp);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C: Comparator<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T, Natural> {
    /// Heapifies the vector in place in O(n)
    fn from(vec: Vec<T>) -> Self {
        PriorityQueue::from_vec(vec)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for PriorityQueue<T, Natural> {
    fn from(arr: [T; N]) -> Self {
        PriorityQueue::from_vec(Vec::from(arr))
    }
}

impl<T: Ord> From<BinaryHeap<Reverse<T>>> for PriorityQueue<T, Natural> {
    fn from(heap: BinaryHeap<Reverse<T>>) -> Self {
        let data = heap.into_vec().into_iter().map(|Reverse(value)| value).collect();
        PriorityQueue::from_vec(data)
    }
}

impl<T: Ord, C> From<PriorityQueue<T, C>> for BinaryHeap<Reverse<T>> {
    /// Keeps the elements only; `BinaryHeap` always uses natural order
    fn from(heap: PriorityQueue<T, C>) -> Self {
        heap.into_vec().into_iter().map(Reverse).collect()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut refused = 0usize;
        let admitted: Vec<T> = iter
            .into_iter()
            .filter(|value| {
                let ok = self.cmp.admits(value);
                if !ok {
                    refused += 1;
                }
                ok
            })
            .collect();
        if refused > 0 {
            debug!("extend skipped {} values refused by the comparator", refused);
        }
        self.extend_admitted(admitted);
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Moves the elements out in heap storage order
    fn into_iter(self) -> vec::IntoIter<T> {
        self.into_vec().into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}
