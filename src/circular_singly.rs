use crate::macros::impl_sequence;
use crate::pool::Pool;
use crate::{Circular, Error, Slot, NUL};

/// A ring of forward-linked records.
///
/// Only the tail is stored: the head is always the record following the tail,
/// so both ends can be pushed in constant time by reseating the tail. A single
/// record links to itself. Traversals are bounded by the element count since
/// no forward link is ever `NUL` while the ring is populated.
#[derive(Clone)]
pub struct CircularSinglyLinkedList<D> {
    pool: Pool<D>,
    tail: Slot,
    len: usize,
}

impl<D> CircularSinglyLinkedList<D> {
    /// Create a new empty ring.
    pub const fn new() -> Self {
        Self {
            pool: Pool::new(),
            tail: NUL,
            len: 0,
        }
    }

    /// Create a new empty ring with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
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
    fn head(&self) -> Slot {
        if self.tail == NUL {
            NUL
        } else {
            self.pool.next(self.tail)
        }
    }

    /// Insert an element right after the tail, making it the new head.
    pub fn push_front(&mut self, value: D) {
        let slot = self.pool.alloc(value);
        if self.tail == NUL {
            self.pool.set_next(slot, slot);
            self.tail = slot;
        } else {
            self.pool.set_next(slot, self.pool.next(self.tail));
            self.pool.set_next(self.tail, slot);
        }
        self.len += 1;
    }

    /// Insert an element as the new head, then move the tail onto it.
    pub fn push_back(&mut self, value: D) {
        self.push_front(value);
        self.tail = self.pool.next(self.tail);
    }

    /// Remove and return the head element of the ring.
    pub fn pop_front(&mut self) -> Result<D, Error> {
        if self.tail == NUL {
            return Err(Error::Empty);
        }
        let head = self.pool.next(self.tail);
        if head == self.tail {
            self.tail = NUL;
        } else {
            self.pool.set_next(self.tail, self.pool.next(head));
        }
        debug_assert!(self.len > 0);
        self.len -= 1;
        Ok(self.pool.release(head))
    }

    /// Remove and return the tail element of the ring.
    pub fn pop_back(&mut self) -> Result<D, Error> {
        let slot = self.tail;
        if slot == NUL {
            return Err(Error::Empty);
        }
        let head = self.pool.next(slot);
        if head == slot {
            self.tail = NUL;
        } else {
            let mut prev = head;
            while self.pool.next(prev) != slot {
                prev = self.pool.next(prev);
            }
            self.pool.set_next(prev, head);
            self.tail = prev;
        }
        debug_assert!(self.len > 0);
        self.len -= 1;
        Ok(self.pool.release(slot))
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
        (self.tail != NUL).then(|| self.pool.value(self.head()))
    }

    /// Return a reference to the tail element.
    pub fn back(&self) -> Option<&D> {
        (self.tail != NUL).then(|| self.pool.value(self.tail))
    }

    /// Return true if the ring holds an element equal to `value`.
    ///
    /// Visits each record exactly once, singleton rings included.
    pub fn contains(&self, value: &D) -> bool
    where
        D: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.tail = NUL;
        self.len = 0;
    }

    /// Move the tail one record forward; the old head becomes the tail.
    pub fn rotate(&mut self) {
        if self.tail != NUL {
            self.tail = self.pool.next(self.tail);
        }
    }

    /// Iterate over the ring once, from head to tail.
    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            pool: &self.pool,
            slot: self.head(),
            remaining: self.len,
        }
    }

    fn slot_at(&self, index: usize) -> Result<Slot, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let mut slot = self.head();
        for _ in 0..index {
            slot = self.pool.next(slot);
        }
        Ok(slot)
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.len == 0, self.tail == NUL);
        assert_eq!(self.pool.live(), self.len);
        let head = self.head();
        let mut slot = head;
        for step in 0..self.len {
            assert_ne!(slot, NUL);
            if step > 0 {
                assert_ne!(slot, head, "ring closed after {} of {} steps", step, self.len);
            }
            slot = self.pool.next(slot);
        }
        assert_eq!(slot, head);
    }
}

impl<D> Circular<D> for CircularSinglyLinkedList<D> {
    fn rotate(&mut self) {
        CircularSinglyLinkedList::rotate(self)
    }
}

pub struct Iter<'a, D> {
    pool: &'a Pool<D>,
    slot: Slot,
    remaining: usize,
}

impl<'a, D> Iterator for Iter<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.slot;
        self.slot = self.pool.next(slot);
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

impl_sequence!(CircularSinglyLinkedList, Iter);
