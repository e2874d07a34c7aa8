use seqlist::{Circular, CircularDoublyLinkedList, CircularSinglyLinkedList, Sequence};

fn contents<S: Sequence<i32>>(ring: &S) -> Vec<i32> {
    ring.iter().copied().collect()
}

/// Rotating a ring of n elements n times brings every record back to where it started.
fn full_turn_restores_order<S: Circular<i32> + Default>() {
    for n in 0..8 {
        let mut ring = S::default();
        for i in 0..n {
            ring.push_back(i);
        }
        let before = contents(&ring);

        for step in 0..n {
            ring.rotate();
            // After k rotations the ring starts at element k
            let expected: Vec<i32> = (0..n).map(|i| (i + step + 1) % n).collect();
            assert_eq!(contents(&ring), expected);
        }
        assert_eq!(contents(&ring), before);
        assert_eq!(ring.len(), n as usize);
    }
}

fn singleton_ring_is_visited_once<S: Circular<i32> + Default>() {
    let mut ring = S::default();
    ring.push_front(5);

    assert_eq!(ring.iter().count(), 1);
    assert!(ring.contains(&5));
    assert!(!ring.contains(&6));

    ring.rotate();
    assert_eq!(contents(&ring), vec![5]);
    assert_eq!(ring.pop_back(), Ok(5));
    assert!(ring.is_empty());
}

fn rotate_then_end_operations<S: Circular<i32> + Default>() {
    let mut ring = S::default();
    for i in 1..=4 {
        ring.push_back(i);
    }

    ring.rotate();
    ring.push_back(5);
    ring.push_front(0);

    assert_eq!(contents(&ring), vec![0, 2, 3, 4, 1, 5]);
    assert_eq!(ring.pop_back(), Ok(5));
    assert_eq!(ring.pop_back(), Ok(1));
    assert_eq!(ring.pop_front(), Ok(0));
    assert_eq!(contents(&ring), vec![2, 3, 4]);
    assert_eq!(ring.get(2), Ok(&4));
}

fn iteration_never_wraps<S: Circular<i32> + Default>() {
    let mut ring = S::default();
    for i in 0..3 {
        ring.push_back(i);
    }

    let mut iter = ring.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

macro_rules! circular_tests {
    ($module:ident, $ring:ty) => {
        mod $module {
            use super::*;

            #[test]
            fn full_turn_restores_order() {
                super::full_turn_restores_order::<$ring>();
            }

            #[test]
            fn singleton_ring_is_visited_once() {
                super::singleton_ring_is_visited_once::<$ring>();
            }

            #[test]
            fn rotate_then_end_operations() {
                super::rotate_then_end_operations::<$ring>();
            }

            #[test]
            fn iteration_never_wraps() {
                super::iteration_never_wraps::<$ring>();
            }
        }
    };
}

circular_tests!(circular_singly, CircularSinglyLinkedList<i32>);
circular_tests!(circular_doubly, CircularDoublyLinkedList<i32>);

#[test]
fn doubly_ring_iterates_backward() {
    let ring: CircularDoublyLinkedList<_> = (1..=4).collect();

    let reversed: Vec<_> = ring.iter().rev().copied().collect();
    assert_eq!(reversed, vec![4, 3, 2, 1]);

    // Meeting in the middle yields each element once
    let mut iter = ring.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}
