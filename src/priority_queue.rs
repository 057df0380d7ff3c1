//! Growable binary min-heap with a pluggable comparator
//!
//! [`PriorityQueue`] stores its elements in a contiguous buffer laid out as an
//! implicit binary tree: the children of slot `i` live at `2i + 1` and
//! `2i + 2`. Every parent compares less than or equal to its children under
//! the queue's [`Comparator`], so the root is always the minimum.
//!
//! Unlike `std::collections::BinaryHeap`, any element can be removed, not only
//! the root, and the ordering rule is a value fixed at construction rather
//! than the element type's `Ord`.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity          |
//! |----------------------|---------------------|
//! | `push`               | O(log n), O(1) amortized growth |
//! | `pop`/`extract_min`  | O(log n)            |
//! | `peek`/`element`     | O(1)                |
//! | `remove_at`          | O(log n)            |
//! | `remove`/`contains`  | O(n)                |
//! | `from_vec`           | O(n)                |
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::PriorityQueue;
//!
//! let mut heap = PriorityQueue::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! // Any element can be removed, the heap repairs itself in both directions.
//! assert_eq!(heap.remove(&4), Ok(true));
//!
//! let drained: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
//! assert_eq!(drained, [1, 1, 2, 3, 5, 6, 9]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::slice;
use std::vec;

use log::{debug, trace};

use crate::compare::{Comparator, Natural};
use crate::traits::{Heap, HeapError};

/// Capacity of a queue created without an explicit capacity
pub const DEFAULT_CAPACITY: usize = 11;

/// Below this many slots the buffer doubles when full, above it grows by half
pub const SMALL_BUFFER_THRESHOLD: usize = 64;

/// Computes the capacity a full buffer grows to
///
/// Doubles while `current` is below [`SMALL_BUFFER_THRESHOLD`], otherwise grows
/// by 50%. The result is never less than `required`.
///
/// ```rust
/// use comparator_heap::priority_queue::grown_capacity;
///
/// assert_eq!(grown_capacity(11, 12), 22);
/// assert_eq!(grown_capacity(64, 65), 96);
/// assert_eq!(grown_capacity(4, 100), 100);
/// ```
pub fn grown_capacity(current: usize, required: usize) -> usize {
    let grown = if current < SMALL_BUFFER_THRESHOLD {
        current.saturating_mul(2)
    } else {
        current.saturating_add(current / 2)
    };
    grown.max(required)
}

const REFUSED_VALUE: &str = "value is not admitted by the comparator";
const ZERO_CAPACITY: &str = "initial capacity must be at least 1";
const CAPACITY_TOO_LARGE: &str = "initial capacity too large";

/// A binary min-heap ordered by a [`Comparator`]
///
/// The default comparator, [`Natural`], orders elements by their `Ord`
/// implementation, smallest first. Use
/// [`Reversed`](crate::compare::Reversed) or a closure for other orders.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element changes while it is in the heap.
pub struct PriorityQueue<T, C = Natural> {
    /// Heap storage; `data.len()` is the element count and
    /// `data.capacity()` the buffer size
    pub(crate) data: Vec<T>,
    pub(crate) cmp: C,
}

impl<T: Ord> PriorityQueue<T, Natural> {
    /// Creates an empty queue in natural order with the default capacity
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty queue in natural order able to hold `capacity`
    /// elements before growing
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `capacity` is zero or the
    /// buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        Self::with_capacity_and_comparator(capacity, Natural)
    }

    /// Builds a queue in natural order from an unordered vector
    ///
    /// Runs a bottom-up heapify in O(n).
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data, cmp: Natural };
        heap.heapify();
        heap
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `cmp` with the default capacity
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            cmp,
        }
    }

    /// Creates an empty queue ordered by `cmp` able to hold `capacity`
    /// elements before growing
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `capacity` is zero or the
    /// buffer cannot be allocated.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidArgument(ZERO_CAPACITY));
        }
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| HeapError::InvalidArgument(CAPACITY_TOO_LARGE))?;
        Ok(Self { data, cmp })
    }

    /// Builds a queue ordered by `cmp` from an unordered vector
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `cmp` refuses any element.
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: C) -> Result<Self, HeapError> {
        if !data.iter().all(|value| cmp.admits(value)) {
            return Err(HeapError::InvalidArgument(REFUSED_VALUE));
        }
        let mut heap = Self { data, cmp };
        heap.heapify();
        Ok(heap)
    }

    /// Returns the comparator ordering this queue
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts a value
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the comparator refuses the
    /// value; the queue is left unchanged.
    pub fn push(&mut self, value: T) -> Result<(), HeapError> {
        self.check_admitted(&value)?;
        self.ensure_capacity(self.data.len() + 1);
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Inserts a value, returning false instead of an error if it is refused
    pub fn offer(&mut self, value: T) -> bool {
        self.push(value).is_ok()
    }

    /// Inserts every value of `values`
    ///
    /// All values are checked before any is inserted, so on error the queue
    /// is unchanged.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if any value is refused.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<(), HeapError> {
        let values: Vec<T> = values.into_iter().collect();
        if !values.iter().all(|value| self.cmp.admits(value)) {
            return Err(HeapError::InvalidArgument(REFUSED_VALUE));
        }
        self.extend_admitted(values);
        Ok(())
    }

    /// Returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the queue is empty.
    pub fn element(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::EmptyCollection)
    }

    /// Returns the minimum element, or `None` if the queue is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the queue is empty.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::EmptyCollection)
    }

    /// Removes and returns the minimum element, or `None` if the queue is
    /// empty
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Removes and returns the element stored at `index`
    ///
    /// `index` addresses heap storage order, as exposed by
    /// [`as_slice`](Self::as_slice). The last element takes the vacated slot
    /// and is moved down or up until the heap property holds again.
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, HeapError> {
        self.check_index(index)?;
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.repair(index);
        }
        Ok(removed)
    }

    /// Replaces the element stored at `index` with `value`, returning the old
    /// element
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= len()`, or
    /// [`HeapError::InvalidArgument`] if the comparator refuses `value`.
    pub fn replace_at(&mut self, index: usize, value: T) -> Result<T, HeapError> {
        self.check_index(index)?;
        self.check_admitted(&value)?;
        let old = mem::replace(&mut self.data[index], value);
        self.repair(index);
        Ok(old)
    }

    /// Moves all elements of `other` into `self`, leaving `other` empty
    ///
    /// Elements this queue's comparator refuses stay behind in `other`.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        let (admitted, refused): (Vec<T>, Vec<T>) = mem::take(&mut other.data)
            .into_iter()
            .partition(|value| self.cmp.admits(value));
        if !refused.is_empty() {
            other.data = refused;
            other.heapify();
        }
        self.extend_admitted(admitted);
    }

    /// Keeps only the elements for which `keep` returns true, returning how
    /// many were removed
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) -> usize {
        let before = self.data.len();
        self.data.retain(keep);
        let removed = before - self.data.len();
        if removed > 0 {
            debug!("retain removed {} of {} elements, rebuilding", removed, before);
            self.heapify();
        }
        removed
    }

    /// Consumes the queue and returns its elements sorted by the comparator
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        // The in-place sort leaves a min-heap in descending order
        self.data.reverse();
        self.data
    }

    /// Returns an iterator that removes elements in priority order
    ///
    /// Elements not consumed are dropped with the iterator.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { inner: self }
    }

    /// Checks the heap property over every live slot
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            self.cmp.compare(&self.data[(i - 1) / 2], &self.data[i]) != Ordering::Greater
        })
    }

    fn check_admitted(&self, value: &T) -> Result<(), HeapError> {
        if self.cmp.admits(value) {
            Ok(())
        } else {
            Err(HeapError::InvalidArgument(REFUSED_VALUE))
        }
    }

    fn check_index(&self, index: usize) -> Result<(), HeapError> {
        let len = self.data.len();
        if index < len {
            Ok(())
        } else {
            Err(HeapError::IndexOutOfRange { index, len })
        }
    }

    /// Grows the buffer so it holds at least `required` elements
    fn ensure_capacity(&mut self, required: usize) {
        let current = self.data.capacity();
        if required <= current {
            return;
        }
        let target = grown_capacity(current, required);
        trace!("growing heap buffer from {} to {} slots", current, target);
        self.data.reserve_exact(target - self.data.len());
    }

    /// Inserts values already checked against the comparator
    pub(crate) fn extend_admitted(&mut self, values: Vec<T>) {
        if values.is_empty() {
            return;
        }
        let len = self.data.len();
        let extra = values.len();
        self.ensure_capacity(len + extra);
        self.data.extend(values);
        if better_to_rebuild(len, extra) {
            debug!("bulk insert of {} into {} elements, rebuilding", extra, len);
            self.heapify();
        } else {
            for index in len..self.data.len() {
                self.sift_up(index);
            }
        }
    }

    /// Restores the heap property after the element at `index` changed
    fn repair(&mut self, index: usize) {
        if self.sift_down(index) == index {
            self.sift_up(index);
        }
    }

    /// Move element at index up to maintain heap property
    ///
    /// Returns the element's final index.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.compare(&self.data[index], &self.data[parent]) == Ordering::Less {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property
    ///
    /// Returns the element's final index.
    fn sift_down(&mut self, index: usize) -> usize {
        let len = self.data.len();
        self.sift_down_range(index, len)
    }

    fn sift_down_range(&mut self, mut index: usize, end: usize) -> usize {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < end && self.less(left, smallest) {
                smallest = left;
            }
            if right < end && self.less(right, smallest) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                return index;
            }
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    /// Bottom-up heapify: sift down every internal node, last one first
    pub(crate) fn heapify(&mut self) {
        let len = self.data.len();
        trace!("heapifying {} elements", len);
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: PartialEq, C: Comparator<T>> PriorityQueue<T, C> {
    /// Returns whether an element equal to `value` is stored
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the comparator refuses
    /// `value`.
    pub fn contains(&self, value: &T) -> Result<bool, HeapError> {
        self.check_admitted(value)?;
        Ok(self.data.contains(value))
    }

    /// Returns whether every element of `values` is stored
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the comparator refuses any
    /// element of `values`.
    pub fn contains_all(&self, values: &[T]) -> Result<bool, HeapError> {
        self.check_all_admitted(values)?;
        Ok(values.iter().all(|value| self.data.contains(value)))
    }

    /// Removes the first stored element equal to `value`
    ///
    /// Returns whether an element was removed.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the comparator refuses
    /// `value`.
    pub fn remove(&mut self, value: &T) -> Result<bool, HeapError> {
        self.check_admitted(value)?;
        match self.data.iter().position(|stored| stored == value) {
            Some(index) => {
                self.remove_at(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every stored occurrence of every element of `values`,
    /// returning how many elements were removed
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the comparator refuses any
    /// element of `values`; nothing is removed in that case.
    pub fn remove_all(&mut self, values: &[T]) -> Result<usize, HeapError> {
        self.check_all_admitted(values)?;
        let mut removed = 0;
        for value in values {
            while self.remove(value)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Keeps only the stored elements equal to some element of `values`,
    /// returning how many elements were removed
    ///
    /// The heap is rebuilt afterwards; storage order is not preserved.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the comparator refuses any
    /// element of `values`; nothing is removed in that case.
    pub fn retain_all(&mut self, values: &[T]) -> Result<usize, HeapError> {
        self.check_all_admitted(values)?;
        Ok(self.retain(|stored| values.contains(stored)))
    }

    fn check_all_admitted(&self, values: &[T]) -> Result<(), HeapError> {
        values
            .iter()
            .try_for_each(|value| self.check_admitted(value))
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the queue can hold without growing
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drops all elements, keeping the buffer
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the elements in heap storage order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap storage order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes all elements in heap storage order
    pub fn drain(&mut self) -> vec::Drain<'_, T> {
        self.data.drain(..)
    }

    /// Consumes the queue and returns its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Copies the elements, in heap storage order, into a new vector
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Copies the elements, in heap storage order, into `dest` when it is
    /// long enough
    ///
    /// Slot `i` of `dest` receives `Some` of the `i`-th stored element. If
    /// `dest` is longer than the queue, the slot right after the last element
    /// is set to `None` and later slots are left untouched. If `dest` is too
    /// short it is discarded and a new vector of exactly `len()` slots is
    /// returned instead.
    ///
    /// ```rust
    /// use comparator_heap::PriorityQueue;
    ///
    /// let heap = PriorityQueue::from_vec(vec![2, 1]);
    /// let dest = heap.to_vec_in(vec![Some(7); 4]);
    /// assert_eq!(dest, [Some(1), Some(2), None, Some(7)]);
    ///
    /// let fresh = heap.to_vec_in(Vec::new());
    /// assert_eq!(fresh, [Some(1), Some(2)]);
    /// ```
    pub fn to_vec_in(&self, mut dest: Vec<Option<T>>) -> Vec<Option<T>>
    where
        T: Clone,
    {
        if dest.len() < self.data.len() {
            return self.data.iter().cloned().map(Some).collect();
        }
        for (slot, value) in dest.iter_mut().zip(&self.data) {
            *slot = Some(value.clone());
        }
        if let Some(slot) = dest.get_mut(self.data.len()) {
            *slot = None;
        }
        dest
    }
}

impl<T, C: Comparator<T> + Default> Heap<T> for PriorityQueue<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) -> Result<(), HeapError> {
        PriorityQueue::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        PriorityQueue::pop(self)
    }

    fn merge(&mut self, mut other: Self) {
        self.append(&mut other);
        if !other.is_empty() {
            debug!("merge dropped {} values refused by the comparator", other.len());
        }
    }
}

/// Rebuilding costs about `2 * (len + extra)` comparisons, sifting each new
/// element up about `extra * log2(len)`.
fn better_to_rebuild(len: usize, extra: usize) -> bool {
    if len == 0 {
        return true;
    }
    let log2 = (usize::BITS - 1 - len.leading_zeros()) as usize;
    2 * (len + extra) < extra * log2
}

/// Draining iterator returned by [`PriorityQueue::drain_sorted`]
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    inner: &'a mut PriorityQueue<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> FusedIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> Drop for DrainSorted<'_, T, C> {
    fn drop(&mut self) {
        self.inner.clear();
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for DrainSorted<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DrainSorted").field(&self.inner.as_slice()).finish()
    }
}
