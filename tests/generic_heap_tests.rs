//! Generic tests for the Heap trait surface
//!
//! These helpers only use the [`Heap`] trait, so they exercise the queue the
//! way generic callers see it.

use comparator_heap::{Heap, PriorityQueue};

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<String>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<&'static str>>() {
    let mut heap = H::new();

    heap.push("five").unwrap();
    heap.push("one").unwrap();
    heap.push("ten").unwrap();
    heap.push("three").unwrap();

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&"five"));

    assert_eq!(heap.pop(), Some("five"));
    assert_eq!(heap.pop(), Some("one"));
    assert_eq!(heap.pop(), Some("ten"));
    assert_eq!(heap.pop(), Some("three"));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test merge operations
fn test_merge_operations<H: Heap<i32>>() {
    let mut heap1 = H::new();
    heap1.push(5).unwrap();
    heap1.push(1).unwrap();

    let mut heap2 = H::new();
    heap2.push(10).unwrap();
    heap2.push(3).unwrap();

    heap1.merge(heap2);

    assert_eq!(heap1.len(), 4);
    assert_eq!(heap1.peek(), Some(&1));
    assert_eq!(heap1.pop(), Some(1));
    assert_eq!(heap1.pop(), Some(3));
    assert_eq!(heap1.pop(), Some(5));
    assert_eq!(heap1.pop(), Some(10));
}

/// Test merge with empty heap
fn test_merge_empty<H: Heap<i32>>() {
    let mut heap1 = H::new();
    heap1.push(5).unwrap();
    heap1.push(1).unwrap();

    let len_before = heap1.len();
    heap1.merge(H::new());
    assert_eq!(heap1.len(), len_before);

    // Merge non-empty into empty
    let mut heap3 = H::new();
    let mut heap4 = H::new();
    heap4.push(3).unwrap();

    heap3.merge(heap4);
    assert_eq!(heap3.len(), 1);
    assert_eq!(heap3.peek(), Some(&3));
}

/// Test with duplicate values
fn test_duplicates<H: Heap<i32>>() {
    let mut heap = H::new();
    for value in [5, 5, 5, 1, 5] {
        heap.push(value).unwrap();
    }

    assert_eq!(heap.pop(), Some(1));
    for _ in 0..4 {
        assert_eq!(heap.pop(), Some(5));
    }
    assert!(heap.is_empty());
}

/// Test that peek doesn't modify heap
fn test_peek_idempotent<H: Heap<i32>>() {
    let mut heap = H::new();
    heap.push(5).unwrap();
    heap.push(1).unwrap();

    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop(), Some(1));
}

/// Test merge then operations
fn test_merge_then_operations<H: Heap<i32>>() {
    let mut heap1 = H::new();
    for i in 0..10 {
        heap1.push(i * 10).unwrap();
    }

    let mut heap2 = H::new();
    for i in (10..20).rev() {
        heap2.push(i * 10).unwrap();
    }

    heap1.merge(heap2);

    let mut count = 0;
    let mut last = i32::MIN;
    while let Some(value) = heap1.pop() {
        assert!(value >= last); // Should be non-decreasing
        last = value;
        count += 1;
    }
    assert_eq!(count, 20);
}

/// Test rapid insert and pop
fn test_rapid_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..50 {
        heap.push(i).unwrap();
        if i % 3 == 0 {
            heap.pop();
        }
    }

    // 50 pushes, 17 pops
    assert_eq!(heap.len(), 33);
    let mut count = 0;
    while heap.pop().is_some() {
        count += 1;
    }
    assert_eq!(count, 33);
}

/// Test ascending insertion
fn test_ascending_insertion<H: Heap<i32>>() {
    let mut heap = H::new();
    for i in 0..100 {
        heap.push(i).unwrap();
    }
    for i in 0..100 {
        assert_eq!(heap.pop(), Some(i));
    }
}

/// Test descending insertion
fn test_descending_insertion<H: Heap<i32>>() {
    let mut heap = H::new();
    for i in (0..100).rev() {
        heap.push(i).unwrap();
    }
    for i in 0..100 {
        assert_eq!(heap.pop(), Some(i));
    }
}

/// Test negative values
fn test_negative_values<H: Heap<i64>>() {
    let mut heap = H::new();
    heap.push(1_000_000_000).unwrap();
    heap.push(-2_000_000_000).unwrap();
    heap.push(0).unwrap();

    assert_eq!(heap.pop(), Some(-2_000_000_000));
    assert_eq!(heap.pop(), Some(0));
    assert_eq!(heap.pop(), Some(1_000_000_000));
}

/// Test with owned string items
fn test_string_items<H: Heap<String>>() {
    let mut heap = H::new();
    for word in ["pear", "apple", "fig"] {
        heap.push(word.to_string()).unwrap();
    }
    assert_eq!(heap.pop().as_deref(), Some("apple"));
    assert_eq!(heap.pop().as_deref(), Some("fig"));
    assert_eq!(heap.pop().as_deref(), Some("pear"));
}

/// Test with tuple items (lexicographic order)
fn test_tuple_items<H: Heap<(u8, char)>>() {
    let mut heap = H::new();
    heap.push((2, 'a')).unwrap();
    heap.push((1, 'z')).unwrap();
    heap.push((1, 'b')).unwrap();
    assert_eq!(heap.pop(), Some((1, 'b')));
    assert_eq!(heap.pop(), Some((1, 'z')));
    assert_eq!(heap.pop(), Some((2, 'a')));
}

macro_rules! heap_test {
    ($name:ident, $heap:ty, $func:ident) => {
        #[test]
        fn $name() {
            $func::<$heap>();
        }
    };
}

heap_test!(test_priority_queue_empty, PriorityQueue<String>, test_empty_heap);
heap_test!(test_priority_queue_basic, PriorityQueue<&'static str>, test_basic_operations);
heap_test!(test_priority_queue_merge, PriorityQueue<i32>, test_merge_operations);
heap_test!(test_priority_queue_merge_empty, PriorityQueue<i32>, test_merge_empty);
heap_test!(test_priority_queue_duplicates, PriorityQueue<i32>, test_duplicates);
heap_test!(test_priority_queue_peek_idempotent, PriorityQueue<i32>, test_peek_idempotent);
heap_test!(test_priority_queue_merge_then_operations, PriorityQueue<i32>, test_merge_then_operations);
heap_test!(test_priority_queue_rapid_operations, PriorityQueue<i32>, test_rapid_operations);
heap_test!(test_priority_queue_ascending_insertion, PriorityQueue<i32>, test_ascending_insertion);
heap_test!(test_priority_queue_descending_insertion, PriorityQueue<i32>, test_descending_insertion);
heap_test!(test_priority_queue_negative_values, PriorityQueue<i64>, test_negative_values);
heap_test!(test_priority_queue_string_items, PriorityQueue<String>, test_string_items);
heap_test!(test_priority_queue_tuple_items, PriorityQueue<(u8, char)>, test_tuple_items);
