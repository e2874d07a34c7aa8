//! Linear sequence containers sharing one contract.
//!
//! Four linked variants keep their link records in a slot pool (parallel
//! vectors of values and link indices, with a free list of vacated slots),
//! and one variant is backed by a growable array:
//!
//! - [`SinglyLinkedList`]: forward links, null-terminated.
//! - [`DoublyLinkedList`]: forward and backward links, null-terminated.
//! - [`CircularSinglyLinkedList`]: forward links closing a ring, tail only.
//! - [`CircularDoublyLinkedList`]: both links closing a ring.
//! - [`StaticSimpleList`]: contiguous buffer with geometric growth.
//!
//! ```
//! use seqlist::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.push_back(10);
//! list.push_back(20);
//! list.push_front(5);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 10, 20]);
//! assert_eq!(list.pop_back(), Ok(20));
//! ```

mod circular_doubly;
mod circular_singly;
mod doubly;
mod macros;
mod pool;
mod singly;
mod static_list;

pub use circular_doubly::{CircularDoublyLinkedList, Iter as CircularDoublyIter};
pub use circular_singly::{CircularSinglyLinkedList, Iter as CircularSinglyIter};
pub use doubly::{DoublyLinkedList, Iter as DoublyIter};
pub use singly::{Iter as SinglyIter, SinglyLinkedList};
pub use static_list::{Iter as StaticIter, StaticSimpleList};

#[cfg(feature = "slot_usize")]
type Slot = usize;

#[cfg(all(feature = "slot_u64", not(feature = "slot_usize")))]
type Slot = u64;

#[cfg(not(any(feature = "slot_u64", feature = "slot_usize")))]
type Slot = u32;

const NUL: Slot = Slot::MAX;

/// An error.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Error {
    /// Container is empty.
    Empty,
    /// Index is not within `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// Iterator was advanced past its last element.
    IterationExhausted,
    /// Initial capacity must be positive.
    InvalidCapacity,
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Error::Empty => write!(f, "Empty"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: index={}, size={}", index, len)
            }
            Error::IterationExhausted => write!(f, "Iteration exhausted"),
            Error::InvalidCapacity => write!(f, "Initial capacity must be greater than zero"),
        }
    }
}

/// The operations every container in this crate supports.
///
/// Elements are addressed by logical position: `0` is the front, `len() - 1`
/// the back. Iteration always runs front to back.
pub trait Sequence<D> {
    type Iter<'a>: Iterator<Item = &'a D>
    where
        Self: 'a,
        D: 'a;

    /// Insert an element at position 0.
    fn push_front(&mut self, value: D);

    /// Insert an element at position `len()`.
    fn push_back(&mut self, value: D);

    /// Remove and return the element at position 0.
    fn pop_front(&mut self) -> Result<D, Error>;

    /// Remove and return the element at position `len() - 1`.
    fn pop_back(&mut self) -> Result<D, Error>;

    /// Return a reference to the element at `index`.
    fn get(&self, index: usize) -> Result<&D, Error>;

    /// Return true if some element equals `value`.
    fn contains(&self, value: &D) -> bool
    where
        D: PartialEq;

    /// Return the number of elements.
    fn len(&self) -> usize;

    /// Return true if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every element.
    fn clear(&mut self);

    /// Iterate from front to back.
    fn iter(&self) -> Self::Iter<'_>;
}

/// A sequence whose link records form a ring.
pub trait Circular<D>: Sequence<D> {
    /// Advance the ring by one record: the front element becomes the back one.
    fn rotate(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(Error::Empty.to_string(), "Empty");
        assert_eq!(
            Error::IndexOutOfRange { index: 3, len: 1 }.to_string(),
            "Index out of range: index=3, size=1"
        );
        assert_eq!(Error::IterationExhausted.to_string(), "Iteration exhausted");
    }
}
