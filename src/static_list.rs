use crate::macros::impl_sequence;
use crate::Error;

const DEFAULT_CAPACITY: usize = 10;

/// A list backed by a single growable buffer.
///
/// Elements occupy slots `[0, len)`; every slot past `len` is `None`. The
/// buffer doubles (or grows to the required size, whichever is larger) when
/// full, and never shrinks.
#[derive(Clone)]
pub struct StaticSimpleList<D> {
    data: Box<[Option<D>]>,
    len: usize,
}

impl<D> StaticSimpleList<D> {
    /// Create a new empty list with the default capacity.
    pub fn new() -> Self {
        Self {
            data: Self::vacant(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Create a new empty list with the given capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            data: Self::vacant(capacity),
            len: 0,
        })
    }

    fn vacant(capacity: usize) -> Box<[Option<D>]> {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }

    /// Return the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Return the length of the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_capacity(&mut self, needed: usize) {
        if needed <= self.capacity() {
            return;
        }
        let new_capacity = needed.max(self.capacity().saturating_mul(2).max(1));
        let mut data = Vec::with_capacity(new_capacity);
        data.extend(self.data[..self.len].iter_mut().map(Option::take));
        data.resize_with(new_capacity, || None);
        self.data = data.into_boxed_slice();
    }

    /// Insert an element at position 0, shifting every element right.
    pub fn push_front(&mut self, value: D) {
        self.ensure_capacity(self.len + 1);
        debug_assert!(self.data[self.len].is_none());
        self.data[..=self.len].rotate_right(1);
        self.data[0] = Some(value);
        self.len += 1;
    }

    /// Append an element to the end of the list.
    pub fn push_back(&mut self, value: D) {
        self.ensure_capacity(self.len + 1);
        self.data[self.len] = Some(value);
        self.len += 1;
    }

    /// Remove and return the element at position 0, shifting every element left.
    pub fn pop_front(&mut self) -> Result<D, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        let value = self.data[0].take();
        self.data[..self.len].rotate_left(1);
        self.len -= 1;
        value.ok_or(Error::Empty)
    }

    /// Remove and return the last element of the list.
    pub fn pop_back(&mut self) -> Result<D, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        self.data[self.len].take().ok_or(Error::Empty)
    }

    /// Return a reference to the element at the given position.
    pub fn get(&self, index: usize) -> Result<&D, Error> {
        self.data[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Return a mutable reference to the element at the given position.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut D, Error> {
        let len = self.len;
        self.data[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Return a reference to the first element.
    pub fn front(&self) -> Option<&D> {
        self.get(0).ok()
    }

    /// Return a reference to the last element.
    pub fn back(&self) -> Option<&D> {
        self.len.checked_sub(1).and_then(|last| self.get(last).ok())
    }

    /// Return true if the list holds an element equal to `value`.
    pub fn contains(&self, value: &D) -> bool
    where
        D: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// Drop every element. The capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.data[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterate over the list.
    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            slots: self.data[..self.len].iter(),
        }
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        assert!(self.len <= self.capacity());
        assert!(self.data[..self.len].iter().all(Option::is_some));
        assert!(self.data[self.len..].iter().all(Option::is_none));
    }
}

pub struct Iter<'a, D> {
    slots: std::slice::Iter<'a, Option<D>>,
}

impl<'a, D> Iterator for Iter<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<D> ExactSizeIterator for Iter<'_, D> {
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<'a, D> DoubleEndedIterator for Iter<'a, D> {
    fn next_back(&mut self) -> Option<&'a D> {
        self.slots.next_back()?.as_ref()
    }
}

impl_sequence!(StaticSimpleList, Iter);
