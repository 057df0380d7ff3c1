//! Ordering rules for heaps
//!
//! A [`Comparator`] decides which of two elements has priority. Heaps in this
//! crate are min-heaps over their comparator: the element that compares
//! `Less` than every other comes out first.
//!
//! Provided rules:
//!
//! - [`Natural`]: the type's own `Ord` (ascending, smallest first). Default.
//! - [`Reversed`]: flips another comparator (largest first).
//! - [`FloatOrder`]: total order over `f32`/`f64` that refuses NaN.
//! - Any `Fn(&T, &T) -> Ordering` closure or function.
//!
//! # Example
//!
//! ```rust
//! use comparator_heap::compare::{by_key, Reversed, Natural};
//! use comparator_heap::PriorityQueue;
//!
//! let mut max_first: PriorityQueue<i32, _> = PriorityQueue::with_comparator(Reversed(Natural));
//! max_first.extend([3, 9, 4]);
//! assert_eq!(max_first.pop(), Some(9));
//!
//! let mut by_len = PriorityQueue::with_comparator(by_key(|s: &&str| s.len()));
//! by_len.extend(["ccc", "a", "bb"]);
//! assert_eq!(by_len.pop(), Some("a"));
//! ```

use std::cmp::Ordering;

/// A total preorder over `T` used for every structural decision of a heap
///
/// Implementations must stay consistent for the whole lifetime of the heap
/// they are installed in. A comparator that changes its answers while
/// elements are stored leaves the heap in an unspecified (but memory-safe)
/// order.
pub trait Comparator<T: ?Sized> {
    /// Compares two elements; `Less` means `a` has priority over `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns false for values that have no place in this order
    ///
    /// Heaps refuse such values with
    /// [`HeapError::InvalidArgument`](crate::HeapError::InvalidArgument).
    /// The default admits everything.
    fn admits(&self, _value: &T) -> bool {
        true
    }
}

/// Natural ascending order of an `Ord` type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the wrapped comparator, turning a min-heap into a max-heap
///
/// Admission is delegated unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }

    #[inline]
    fn admits(&self, value: &T) -> bool {
        self.0.admits(value)
    }
}

/// Ascending order for floating point values
///
/// NaN is refused. Among admitted values the order is IEEE 754 `totalOrder`,
/// so `-0.0` sorts before `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FloatOrder;

impl Comparator<f64> for FloatOrder {
    #[inline]
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }

    #[inline]
    fn admits(&self, value: &f64) -> bool {
        !value.is_nan()
    }
}

impl Comparator<f32> for FloatOrder {
    #[inline]
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }

    #[inline]
    fn admits(&self, value: &f32) -> bool {
        !value.is_nan()
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Builds a comparator ordering elements by an extracted key
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering + Clone
where
    K: Ord,
    F: Fn(&T) -> K + Clone,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
        assert!(Comparator::<i32>::admits(&Natural, &i32::MIN));
    }

    #[test]
    fn test_reversed() {
        let cmp = Reversed(Natural);
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_float_order_refuses_nan() {
        assert!(!FloatOrder.admits(&f64::NAN));
        assert!(!FloatOrder.admits(&f32::NAN));
        assert!(FloatOrder.admits(&f64::INFINITY));
        assert!(!Reversed(FloatOrder).admits(&f64::NAN));
        assert_eq!(FloatOrder.compare(&-0.0f64, &0.0), Ordering::Less);
        assert_eq!(FloatOrder.compare(&1.5f64, &-3.0), Ordering::Greater);
    }

    #[test]
    fn test_closure() {
        let cmp = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert!(cmp.admits(&0));
    }

    #[test]
    fn test_by_key() {
        let cmp = by_key(|pair: &(u32, &str)| pair.0);
        assert_eq!(cmp.compare(&(1, "z"), &(2, "a")), Ordering::Less);
        assert_eq!(cmp.compare(&(2, "z"), &(2, "a")), Ordering::Equal);
    }
}
