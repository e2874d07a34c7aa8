use crate::macros::impl_sequence;
use crate::pool::Pool;
use crate::{Error, Slot, NUL};

/// A null-terminated list with forward links only.
///
/// Both ends can be pushed in constant time and the front can be popped in
/// constant time. Popping the back walks from the head to find the record
/// preceding the tail.
#[derive(Clone)]
pub struct SinglyLinkedList<D> {
    pool: Pool<D>,
    head: Slot,
    tail: Slot,
    len: usize,
}

impl<D> SinglyLinkedList<D> {
    /// Create a new empty list.
    pub const fn new() -> Self {
        Self {
            pool: Pool::new(),
            head: NUL,
            tail: NUL,
            len: 0,
        }
    }

    /// Create a new empty list with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
            head: NUL,
            tail: NUL,
            len: 0,
        }
    }

    /// Return the length of the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prepend an element to the beginning of the list.
    pub fn push_front(&mut self, value: D) {
        let slot = self.pool.alloc(value);
        self.pool.set_next(slot, self.head);
        if self.head == NUL {
            self.tail = slot;
        }
        self.head = slot;
        self.len += 1;
    }

    /// Append an element to the end of the list.
    pub fn push_back(&mut self, value: D) {
        if self.tail == NUL {
            return self.push_front(value);
        }
        let slot = self.pool.alloc(value);
        debug_assert_eq!(self.pool.next(self.tail), NUL);
        self.pool.set_next(self.tail, slot);
        self.tail = slot;
        self.len += 1;
    }

    /// Remove and return the head element of the list.
    pub fn pop_front(&mut self) -> Result<D, Error> {
        let slot = self.head;
        if slot == NUL {
            return Err(Error::Empty);
        }
        self.head = self.pool.next(slot);
        if self.head == NUL {
            self.tail = NUL;
        }
        debug_assert!(self.len > 0);
        self.len -= 1;
        Ok(self.pool.release(slot))
    }

    /// Remove and return the tail element of the list.
    pub fn pop_back(&mut self) -> Result<D, Error> {
        let slot = self.tail;
        if slot == NUL {
            return Err(Error::Empty);
        }
        if self.head == slot {
            self.head = NUL;
            self.tail = NUL;
        } else {
            let mut prev = self.head;
            while self.pool.next(prev) != slot {
                prev = self.pool.next(prev);
            }
            self.pool.set_next(prev, NUL);
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
        (self.head != NUL).then(|| self.pool.value(self.head))
    }

    /// Return a reference to the tail element.
    pub fn back(&self) -> Option<&D> {
        (self.tail != NUL).then(|| self.pool.value(self.tail))
    }

    /// Return true if the list holds an element equal to `value`.
    pub fn contains(&self, value: &D) -> bool
    where
        D: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.head = NUL;
        self.tail = NUL;
        self.len = 0;
    }

    /// Iterate over the list.
    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            pool: &self.pool,
            slot: self.head,
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
        let mut slot = self.head;
        for _ in 0..index {
            slot = self.pool.next(slot);
        }
        Ok(slot)
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.len == 0, self.head == NUL);
        assert_eq!(self.len == 0, self.tail == NUL);
        let mut count = 0;
        let mut slot = self.head;
        let mut last = NUL;
        while slot != NUL {
            count += 1;
            last = slot;
            slot = self.pool.next(slot);
        }
        assert_eq!(count, self.len);
        assert_eq!(last, self.tail);
        assert_eq!(self.pool.live(), self.len);
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
        debug_assert_ne!(slot, NUL);
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

impl_sequence!(SinglyLinkedList, Iter);
