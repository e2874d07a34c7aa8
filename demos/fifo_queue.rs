use seqlist::CircularSinglyLinkedList;

/// A simple FIFO (First-In-First-Out) queue implementation
/// using a tail-only ring as the underlying storage.
struct FifoQueue<T> {
    ring: CircularSinglyLinkedList<T>,
}

impl<T> FifoQueue<T> {
    /// Creates a new, empty queue
    fn new() -> Self {
        Self {
            ring: CircularSinglyLinkedList::new(),
        }
    }

    /// Adds an item at the back of the queue
    fn enqueue(&mut self, item: T) {
        self.ring.push_back(item);
    }

    /// Removes and returns the oldest item from the queue
    fn dequeue(&mut self) -> Result<T, seqlist::Error> {
        self.ring.pop_front()
    }

    /// Returns the number of items in the queue
    fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Clears all items from the queue
    fn clear(&mut self) {
        self.ring.clear();
    }
}

/// Round-robin scheduling over a ring, the other classic use of a circular list.
fn round_robin<S: seqlist::Circular<&'static str>>(tasks: &mut S, turns: usize) {
    for turn in 0..turns {
        if let Ok(task) = tasks.get(0) {
            println!("Turn {}: running {}", turn, task);
        }
        tasks.rotate();
    }
}

fn main() {
    let mut queue = FifoQueue::new();

    for i in 1..=5 {
        println!("Enqueuing: {}", i);
        queue.enqueue(i);
    }

    println!("Queue length: {}", queue.len());

    while let Ok(item) = queue.dequeue() {
        println!("Dequeued: {}", item);
    }

    // Dequeuing from an empty queue is an error, not a panic
    if let Err(e) = queue.dequeue() {
        println!("As expected, can't dequeue from an empty queue: {}", e);
    }

    println!("Queue is now empty: {}", queue.is_empty());

    println!("Reusing queue...");
    for i in 10..=12 {
        queue.enqueue(i);
    }
    println!("Queue length: {}", queue.len());

    queue.clear();
    println!("After clear, queue is empty: {}", queue.is_empty());

    let mut tasks: CircularSinglyLinkedList<_> = ["fetch", "parse", "store"].into_iter().collect();
    round_robin(&mut tasks, 5);
}
