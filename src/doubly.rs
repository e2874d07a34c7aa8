use crate::macros::impl_sequence;
use crate::pool::Pool;
use crate::{Error, Slot, NUL};

/// A null-terminated list with forward and backward links.
///
/// Forward links are kept in the slot pool. Backward links live in `vec_prev`,
/// indexed by the same slots; they are navigational only and never decide
/// when a record is released.
#[derive(Clone)]
pub struct DoublyLinkedList<D> {
    pool: Pool<D>,
    vec_prev: Vec<Slot>,
    head: Slot,
    tail: Slot,
    len: usize,
}

impl<D> DoublyLinkedList<D> {
    /// Create a new empty list.
    pub const fn new() -> Self {
        Self {
            pool: Pool::new(),
            vec_prev: Vec::new(),
            head: NUL,
            tail: NUL,
            len: 0,
        }
    }

    /// Create a new empty list with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
            vec_prev: Vec::with_capacity(capacity),
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

    fn link(&mut self, value: D, prev: Slot, next: Slot) -> Slot {
        let slot = self.pool.alloc(value);
        self.pool.set_next(slot, next);
        if slot as usize == self.vec_prev.len() {
            self.vec_prev.push(prev);
        } else {
            self.vec_prev[slot as usize] = prev;
        }
        debug_assert_eq!(self.vec_prev.len(), self.pool.slots());
        self.len += 1;
        slot
    }

    fn unlink(&mut self, slot: Slot) -> D {
        self.vec_prev[slot as usize] = NUL;
        debug_assert!(self.len > 0);
        self.len -= 1;
        self.pool.release(slot)
    }

    /// Prepend an element to the beginning of the list.
    pub fn push_front(&mut self, value: D) {
        let slot = self.link(value, NUL, self.head);
        if self.head != NUL {
            debug_assert_eq!(self.vec_prev[self.head as usize], NUL);
            self.vec_prev[self.head as usize] = slot;
        } else {
            self.tail = slot;
        }
        self.head = slot;
    }

    /// Append an element to the end of the list.
    pub fn push_back(&mut self, value: D) {
        let slot = self.link(value, self.tail, NUL);
        if self.tail != NUL {
            debug_assert_eq!(self.pool.next(self.tail), NUL);
            self.pool.set_next(self.tail, slot);
        } else {
            self.head = slot;
        }
        self.tail = slot;
    }

    /// Remove and return the head element of the list.
    pub fn pop_front(&mut self) -> Result<D, Error> {
        let slot = self.head;
        if slot == NUL {
            return Err(Error::Empty);
        }
        let next = self.pool.next(slot);
        if next != NUL {
            debug_assert_eq!(self.vec_prev[next as usize], slot);
            self.vec_prev[next as usize] = NUL;
        } else {
            self.tail = NUL;
        }
        self.head = next;
        Ok(self.unlink(slot))
    }

    /// Remove and return the tail element of the list.
    pub fn pop_back(&mut self) -> Result<D, Error> {
        let slot = self.tail;
        if slot == NUL {
            return Err(Error::Empty);
        }
        let prev = self.vec_prev[slot as usize];
        debug_assert_eq!(self.pool.next(slot), NUL);
        if prev != NUL {
            debug_assert_eq!(self.pool.next(prev), slot);
            self.pool.set_next(prev, NUL);
        } else {
            self.head = NUL;
        }
        self.tail = prev;
        Ok(self.unlink(slot))
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
        if self.head == NUL {
            return false;
        }
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

    /// Iterate over the list.
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
        if index < self.len / 2 {
            let mut slot = self.head;
            for _ in 0..index {
                slot = self.pool.next(slot);
            }
            Ok(slot)
        } else {
            let mut slot = self.tail;
            for _ in index..self.len - 1 {
                slot = self.vec_prev[slot as usize];
            }
            Ok(slot)
        }
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert_eq!(self.len == 0, self.head == NUL);
        assert_eq!(self.len == 0, self.tail == NUL);
        if self.head != NUL {
            assert_eq!(self.vec_prev[self.head as usize], NUL);
            assert_eq!(self.pool.next(self.tail), NUL);
        }
        let mut count = 0;
        let mut prev = NUL;
        let mut slot = self.head;
        while slot != NUL {
            assert_eq!(self.vec_prev[slot as usize], prev);
            count += 1;
            prev = slot;
            slot = self.pool.next(slot);
        }
        assert_eq!(count, self.len);
        assert_eq!(prev, self.tail);
        assert_eq!(self.pool.live(), self.len);
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

impl_sequence!(DoublyLinkedList, Iter);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_both_ends() {
        let mut list = DoublyLinkedList::new();
        list.push_front(2);
        list.push_front(1);
        list.push_back(3);
        list.check_invariants();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        assert_eq!(list.pop_back(), Ok(3));
        list.check_invariants();
        assert_eq!(list.pop_back(), Ok(2));
        list.check_invariants();
        assert_eq!(list.pop_back(), Ok(1));
        list.check_invariants();
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert_eq!(list.pop_front(), Err(Error::Empty));
    }

    #[test]
    fn get_walks_from_nearest_end() {
        let list: DoublyLinkedList<_> = (0..9).collect();
        for i in 0..9 {
            assert_eq!(list.get(i), Ok(&i));
        }
        assert_eq!(
            list.get(9),
            Err(Error::IndexOutOfRange { index: 9, len: 9 })
        );
    }

    #[test]
    fn contains_on_empty_list() {
        let mut list = DoublyLinkedList::new();
        assert!(!list.contains(&1));
        list.push_back(1);
        assert!(list.contains(&1));
        assert!(!list.contains(&2));
        list.pop_front().unwrap();
        assert!(!list.contains(&1));
    }

    #[test]
    fn iterates_from_both_ends() {
        let list: DoublyLinkedList<_> = (1..=5).collect();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.rev().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
    }

    #[test]
    fn back_links_survive_slot_reuse() {
        let mut list = DoublyLinkedList::new();
        for i in 0..10 {
            list.push_back(i);
        }
        for _ in 0..5 {
            list.pop_front().unwrap();
        }
        for i in 10..15 {
            list.push_front(i);
        }
        list.check_invariants();
        assert_eq!(
            list.iter().rev().copied().collect::<Vec<_>>(),
            vec![9, 8, 7, 6, 5, 10, 11, 12, 13, 14]
        );
        assert_eq!(list.pool.slots(), 10);
    }
}
