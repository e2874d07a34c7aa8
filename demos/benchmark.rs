use std::time::Instant;

use rand::seq::SliceRandom;
use seqlist::{
    CircularDoublyLinkedList, CircularSinglyLinkedList, DoublyLinkedList, Sequence,
    SinglyLinkedList, StaticSimpleList,
};

const ELEMENTS: usize = 10_000;
const LOOKUPS: usize = 1_000;

fn bench<S: Sequence<usize> + Default>(name: &str, keys: &[usize]) {
    println!("{}", name);

    let mut list = S::default();

    // Benchmark push_back
    let start = Instant::now();
    for &key in keys {
        list.push_back(key);
    }
    let push_time = start.elapsed();
    println!(
        "  push_back: {:?} total, {:?} per operation",
        push_time,
        push_time / ELEMENTS as u32
    );

    // Benchmark get at random positions
    let start = Instant::now();
    let mut sum = 0;
    for _ in 0..LOOKUPS {
        let index = fastrand::usize(0..list.len());
        if let Ok(value) = list.get(index) {
            sum += *value;
        }
    }
    let get_time = start.elapsed();
    println!(
        "  get: {:?} total, {:?} per operation (sum: {})",
        get_time,
        get_time / LOOKUPS as u32,
        sum
    );

    // Benchmark iteration
    let start = Instant::now();
    let mut sum = 0;
    for _ in 0..100 {
        for value in list.iter() {
            sum += *value;
        }
    }
    let iter_time = start.elapsed();
    println!(
        "  iteration: {:?} per full iteration (sum: {})",
        iter_time / 100,
        sum
    );

    // Benchmark draining from the back, where singly linked variants pay a walk
    let start = Instant::now();
    while list.pop_back().is_ok() {}
    let pop_time = start.elapsed();
    println!(
        "  pop_back: {:?} total, {:?} per operation",
        pop_time,
        pop_time / ELEMENTS as u32
    );
}

fn main() {
    let mut keys: Vec<usize> = (0..ELEMENTS).collect();
    keys.shuffle(&mut rand::rng());

    println!("Benchmarking sequence containers with {} elements", ELEMENTS);
    println!("------------------------------------------");

    bench::<SinglyLinkedList<usize>>("SinglyLinkedList", &keys);
    bench::<DoublyLinkedList<usize>>("DoublyLinkedList", &keys);
    bench::<CircularSinglyLinkedList<usize>>("CircularSinglyLinkedList", &keys);
    bench::<CircularDoublyLinkedList<usize>>("CircularDoublyLinkedList", &keys);
    bench::<StaticSimpleList<usize>>("StaticSimpleList", &keys);
}
