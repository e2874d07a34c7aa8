use crate::macros::impl_sequence;
use crate::pool::Pool;
use crate::{Circular, Error, Slot, NUL};

/// A ring of records linked in both directions.
///
/// The tail's forward link is the head and the head's backward link is the
/// tail, so head and tail are always adjacent and every end operation is a
/// constant-time splice. Backward links are kept in `vec_prev`, parallel to
/// the pool.
#[derive(Clone)]
pub struct CircularDoublyLinkedList<D> {
    pool: Pool<D>,
    vec_prev: Vec<Slot>,
    head: Slot,
    tail: Slot,
    len: usize,
}

impl<D> CircularDoublyLinkedList<D> {
    /// Create a new empty ring.
    pub const fn new() -> Self {
        Self {
            pool: Pool::new(),
            vec_prev: Vec::new(),
            head: NUL,
            tail: NUL,
            len: 0,
        }
    }

    /// Create a new empty ring with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
            vec_prev: Vec::with_capacity(capacity),
            head: NUL,
            tail: NUL,
            len: 0,
        }
    }

    /// Return the length of the ring.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the ring is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn prev(&self, slot: Slot) -> Slot {
        self.vec_prev[slot as usize]
    }

    #[inline]
    fn set_prev(&mut self, slot: Slot, prev: Slot) {
        if slot as usize == self.vec_prev.len() {
            self.vec_prev.push(prev);
        } else {
            self.vec_prev[slot as usize] = prev;
        }
    }

    /// Splice a new record between the tail and the head and return its slot.
    /// The caller decides whether it becomes the head or the tail.
    fn splice(&mut self, value: D) -> Slot {
        let slot = self.pool.alloc(value);
        if self.head == NUL {
            self.pool.set_next(slot, slot);
            self.set_prev(slot, slot);
            self.head = slot;
            self.tail = slot;
        } else {
            self.pool.set_next(slot, self.head);
            self.set_prev(slot, self.tail);
            self.set_prev(self.head, slot);
            self.pool.set_next(self.tail, slot);
        }
        debug_assert_eq!(self.vec_prev.len(), self.pool.slots());
        self.len += 1;
        slot
    }

    /// Drop a record from the ring. The caller has already moved `head` and
    /// `tail` off it.
    fn unsplice(&mut self, slot: Slot) -> D {
        let prev = self.prev(slot);
        let next = self.pool.next(slot);
        self.pool.set_next(prev, next);
        self.set_prev(next, prev);
        self.vec_prev[slot as usize] = NUL;
        debug_assert!(self.len > 0);
        self.len -= 1;
        self.pool.release(slot)
    }

    /// Prepend an element to the beginning of the ring.
    pub fn push_front(&mut self, value: D) {
        self.head = self.splice(value);
    }

    /// Append an element to the end of the ring.
    pub fn push_back(&mut self, value: D) {
        self.tail = self.splice(value);
    }

    /// Remove and return the head element of the ring.
    pub fn pop_front(&mut self) -> Result<D, Error> {
        let slot = self.head;
        if slot == NUL {
            return Err(Error::Empty);
        }
        if slot == self.tail {
            self.head = NUL;
            self.tail = NUL;
        } else {
            self.head = self.pool.next(slot);
        }
        Ok(self.unsplice(slot))
    }

    /// Remove and return the tail element of the ring.
    pub fn pop_back(&mut self) -> Result<D, Error> {
        let slot = self.tail;
        if slot == NUL {
            return Err(Error::Empty);
        }
        if slot == self.head {
            self.head = NUL;
            self.tail = NUL;
        } else {
            self.tail = self.prev(slot);
        }
        Ok(self.unsplice(slot))
    }

    /// Return a reference to the element at the given position.
    pub fn get(&self, index: usize) -> Result<&D, Error> {
        let slot = self.slot_at(index)?;
        Ok(self.pool.value(slot))
    }

    /// Return a mutable reference to the element at the given position.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut D, Error> {
        let slot = self.slot_at(index)?;
        Ok(self.pool.value_mut(slot))
    }

    /// Return a reference to the head element.
    pub fn front(&self) -> Option<&D> {
        (self.head != NUL).then(|| self.pool.value(self.head))
    }

    /// Return a reference to the tail element.
    pub fn back(&self) -> Option<&D> {
        (self.tail != NUL).then(|| self.pool.value(self.tail))
    }

    /// Return true if the ring holds an element equal to `value`.
    pub fn contains(&self, value: &D) -> bool
    where
        D: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.vec_prev.clear();
        self.head = NUL;
        self.tail = NUL;
        self.len = 0;
    }

    /// Advance the ring by one record; the old head becomes the tail.
    pub fn rotate(&mut self) {
        if self.head != NUL {
            self.tail = self.head;
            self.head = self.pool.next(self.head);
        }
    }

    /// Iterate over the ring once, from head to tail.
    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            pool: &self.pool,
            vec_prev: &self.vec_prev,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Find the record at `index`, starting from whichever end is closer.
    fn slot_at(&self, index: usize) -> Result<Slot, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let mut slot;
        if index < self.len / 2 {
            slot = self.head;
            for _ in 0..index {
                slot = self.pool.next(slot);
            }
        } else {
            slot = self.tail;
            for _ in index..self.len - 1 {
                slot = self.prev(slot);
            }
        }
        Ok(slot)
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.len == 0, self.head == NUL);
        assert_eq!(self.len == 0, self.tail == NUL);
        assert_eq!(self.pool.live(), self.len);
        if self.len == 0 {
            return;
        }
        assert_eq!(self.pool.next(self.tail), self.head);
        assert_eq!(self.prev(self.head), self.tail);

        let mut forward = self.head;
        let mut backward = self.tail;
        for step in 0..self.len {
            if step > 0 {
                assert_ne!(forward, self.head);
                assert_ne!(backward, self.tail);
            }
            assert_eq!(self.prev(self.pool.next(forward)), forward);
            forward = self.pool.next(forward);
            backward = self.prev(backward);
        }
        assert_eq!(forward, self.head);
        assert_eq!(backward, self.tail);
    }
}

impl<D> Circular<D> for CircularDoublyLinkedList<D> {
    fn rotate(&mut self) {
        CircularDoublyLinkedList::rotate(self)
    }
}

pub struct Iter<'a, D> {
    pool: &'a Pool<D>,
    vec_prev: &'a [Slot],
    front: Slot,
    back: Slot,
    remaining: usize,
}

impl<'a, D> Iterator for Iter<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        self.front = self.pool.next(slot);
        self.remaining -= 1;
        Some(self.pool.value(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<D> ExactSizeIterator for Iter<'_, D> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, D> DoubleEndedIterator for Iter<'a, D> {
    fn next_back(&mut self) -> Option<&'a D> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back;
        self.back = self.vec_prev[slot as usize];
        self.remaining -= 1;
        Some(self.pool.value(slot))
    }
}

impl_sequence!(CircularDoublyLinkedList, Iter);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_links_to_itself() {
        let mut ring = CircularDoublyLinkedList::new();
        ring.push_front("only");
        ring.check_invariants();
        assert_eq!(ring.head, ring.tail);
        assert_eq!(ring.pool.next(ring.head), ring.head);
        assert_eq!(ring.prev(ring.head), ring.head);
        assert!(ring.contains(&"only"));
        assert_eq!(ring.iter().rev().count(), 1);
        assert_eq!(ring.pop_back(), Ok("only"));
        ring.check_invariants();
    }

    #[test]
    fn end_operations_keep_ring_closed() {
        let mut ring = CircularDoublyLinkedList::new();
        ring.push_back(2);
        ring.push_front(1);
        ring.push_back(3);
        ring.push_front(0);
        ring.check_invariants();
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        assert_eq!(ring.pop_front(), Ok(0));
        ring.check_invariants();
        assert_eq!(ring.pop_back(), Ok(3));
        ring.check_invariants();
        assert_eq!(ring.iter().rev().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn get_wraps_backward_within_ring() {
        let ring: CircularDoublyLinkedList<_> = (0..7).collect();
        for i in 0..7 {
            assert_eq!(ring.get(i), Ok(&i));
        }
        assert_eq!(
            ring.get(7),
            Err(Error::IndexOutOfRange { index: 7, len: 7 })
        );
    }

    #[test]
    fn rotate_then_pop() {
        let mut ring: CircularDoublyLinkedList<_> = (1..=3).collect();
        ring.rotate();
        ring.check_invariants();
        assert_eq!(ring.back(), Some(&1));
        assert_eq!(ring.pop_back(), Ok(1));
        assert_eq!(ring.pop_front(), Ok(2));
        ring.check_invariants();
        assert_eq!(ring.len(), 1);
    }
}
