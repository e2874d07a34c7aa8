use std::collections::VecDeque;

use quickcheck_macros::quickcheck;
use seqlist::{
    CircularDoublyLinkedList, CircularSinglyLinkedList, DoublyLinkedList, Error, Sequence,
    SinglyLinkedList, StaticSimpleList,
};

/// Apply one operation to both the list and a `VecDeque` model and check they agree.
fn apply<S: Sequence<i32>>(list: &mut S, model: &mut VecDeque<i32>, op: u8, value: i32) {
    match op % 7 {
        0 => {
            list.push_front(value);
            model.push_front(value);
        }
        1 | 2 => {
            list.push_back(value);
            model.push_back(value);
        }
        3 => {
            assert_eq!(list.pop_front().ok(), model.pop_front());
        }
        4 => {
            assert_eq!(list.pop_back().ok(), model.pop_back());
        }
        5 => {
            let index = value.unsigned_abs() as usize % (model.len() + 1);
            match model.get(index) {
                Some(expected) => assert_eq!(list.get(index), Ok(expected)),
                None => assert_eq!(
                    list.get(index).err(),
                    Some(Error::IndexOutOfRange {
                        index,
                        len: model.len()
                    })
                ),
            }
        }
        _ => {
            assert_eq!(list.contains(&value), model.contains(&value));
        }
    }
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert_eq!(list.iter().count(), list.len());
    assert!(list.iter().eq(model.iter()));
}

fn random_interleavings<S: Sequence<i32> + Default>(seed: u64) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut list = S::default();
    let mut model = VecDeque::new();

    for round in 0..2_000 {
        // Bias toward growth early, toward shrinking late
        let op = if round < 1_000 {
            rng.u8(0..7)
        } else {
            [1, 3, 4, 4, 5, 6][rng.usize(0..6)]
        };
        apply(&mut list, &mut model, op, rng.i32(-50..50));
        if rng.u16(0..500) == 0 {
            list.clear();
            model.clear();
        }
    }
    while !model.is_empty() {
        apply(&mut list, &mut model, 3, 0);
    }
    assert_eq!(list.pop_front(), Err(Error::Empty));
}

fn replay<S: Sequence<i32> + Default>(ops: &[(u8, i32)]) -> bool {
    let mut list = S::default();
    let mut model = VecDeque::new();
    for &(op, value) in ops {
        apply(&mut list, &mut model, op, value);
    }
    list.iter().eq(model.iter())
}

#[test]
fn singly_matches_model() {
    for seed in 0..8 {
        random_interleavings::<SinglyLinkedList<i32>>(seed);
    }
}

#[test]
fn doubly_matches_model() {
    for seed in 0..8 {
        random_interleavings::<DoublyLinkedList<i32>>(seed);
    }
}

#[test]
fn circular_singly_matches_model() {
    for seed in 0..8 {
        random_interleavings::<CircularSinglyLinkedList<i32>>(seed);
    }
}

#[test]
fn circular_doubly_matches_model() {
    for seed in 0..8 {
        random_interleavings::<CircularDoublyLinkedList<i32>>(seed);
    }
}

#[test]
fn static_simple_matches_model() {
    for seed in 0..8 {
        random_interleavings::<StaticSimpleList<i32>>(seed);
    }
}

#[quickcheck]
fn every_list_agrees_with_vecdeque(ops: Vec<(u8, i32)>) -> bool {
    replay::<SinglyLinkedList<i32>>(&ops)
        && replay::<DoublyLinkedList<i32>>(&ops)
        && replay::<CircularSinglyLinkedList<i32>>(&ops)
        && replay::<CircularDoublyLinkedList<i32>>(&ops)
        && replay::<StaticSimpleList<i32>>(&ops)
}

#[quickcheck]
fn size_matches_iteration_after_collect(values: Vec<i32>) -> bool {
    let singly: SinglyLinkedList<_> = values.iter().copied().collect();
    let ring: CircularDoublyLinkedList<_> = values.iter().copied().collect();
    let array: StaticSimpleList<_> = values.iter().copied().collect();
    singly.iter().count() == values.len()
        && ring.iter().rev().count() == values.len()
        && array.iter().eq(values.iter())
}
