use crate::{Slot, NUL};

/// Storage for link records.
///
/// Values and forward links live in parallel vectors indexed by slot. Vacated
/// slots are chained through `vec_next` starting at `free_head` and are handed
/// out again before the vectors grow. The meaning of `vec_next` for an occupied
/// slot is up to the owning list.
#[derive(Debug, Clone)]
pub(crate) struct Pool<D> {
    vec_next: Vec<Slot>,
    free_head: Slot,
    data: Vec<Option<D>>,
}

impl<D> Pool<D> {
    pub(crate) const fn new() -> Self {
        Self {
            vec_next: Vec::new(),
            free_head: NUL,
            data: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            vec_next: Vec::with_capacity(capacity),
            free_head: NUL,
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots ever handed out, occupied or not.
    pub(crate) fn slots(&self) -> usize {
        self.data.len()
    }

    /// Store a value in a fresh record whose forward link is `NUL`.
    pub(crate) fn alloc(&mut self, value: D) -> Slot {
        let free_slot = self.free_head;
        if free_slot != NUL {
            debug_assert!(self.data[free_slot as usize].is_none());
            self.free_head = self.vec_next[free_slot as usize];
            self.vec_next[free_slot as usize] = NUL;
            self.data[free_slot as usize] = Some(value);
            return free_slot;
        }
        let slot = self.data.len();
        assert!(slot < NUL as usize, "capacity overflow");
        self.vec_next.push(NUL);
        self.data.push(Some(value));
        slot as Slot
    }

    /// Take the value out of a record and put the slot on the free chain.
    pub(crate) fn release(&mut self, slot: Slot) -> D {
        let value = match self.data[slot as usize].take() {
            Some(value) => value,
            None => unreachable!("slot {} released twice", slot),
        };
        self.vec_next[slot as usize] = self.free_head;
        self.free_head = slot;
        value
    }

    /// Drop every value and forget all slots.
    pub(crate) fn clear(&mut self) {
        self.vec_next.clear();
        self.data.clear();
        self.free_head = NUL;
    }

    #[inline]
    pub(crate) fn next(&self, slot: Slot) -> Slot {
        self.vec_next[slot as usize]
    }

    #[inline]
    pub(crate) fn set_next(&mut self, slot: Slot, next: Slot) {
        self.vec_next[slot as usize] = next;
    }

    pub(crate) fn value(&self, slot: Slot) -> &D {
        match &self.data[slot as usize] {
            Some(value) => value,
            None => unreachable!("slot {} is vacant", slot),
        }
    }

    pub(crate) fn value_mut(&mut self, slot: Slot) -> &mut D {
        match &mut self.data[slot as usize] {
            Some(value) => value,
            None => unreachable!("slot {} is vacant", slot),
        }
    }

    /// Number of slots currently holding a value.
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.data.iter().filter(|value| value.is_some()).count()
    }
}
