/// Implements `Sequence`, the std conversion traits and `try_next` for a
/// container and its iterator, forwarding to the inherent methods.
macro_rules! impl_sequence {
    ($list:ident, $iter:ident) => {
        impl<D> $crate::Sequence<D> for $list<D> {
            type Iter<'a>
                = $iter<'a, D>
            where
                Self: 'a,
                D: 'a;

            fn push_front(&mut self, value: D) {
                $list::push_front(self, value)
            }

            fn push_back(&mut self, value: D) {
                $list::push_back(self, value)
            }

            fn pop_front(&mut self) -> Result<D, $crate::Error> {
                $list::pop_front(self)
            }

            fn pop_back(&mut self) -> Result<D, $crate::Error> {
                $list::pop_back(self)
            }

            fn get(&self, index: usize) -> Result<&D, $crate::Error> {
                $list::get(self, index)
            }

            fn contains(&self, value: &D) -> bool
            where
                D: PartialEq,
            {
                $list::contains(self, value)
            }

            fn len(&self) -> usize {
                $list::len(self)
            }

            fn clear(&mut self) {
                $list::clear(self)
            }

            fn iter(&self) -> Self::Iter<'_> {
                $list::iter(self)
            }
        }

        impl<D> Default for $list<D> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<D: std::fmt::Debug> std::fmt::Debug for $list<D> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }

        impl<D: PartialEq> PartialEq for $list<D> {
            fn eq(&self, other: &Self) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<D: Eq> Eq for $list<D> {}

        impl<D> FromIterator<D> for $list<D> {
            fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
                let mut list = Self::new();
                list.extend(iter);
                list
            }
        }

        impl<D> Extend<D> for $list<D> {
            fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
                for value in iter {
                    self.push_back(value);
                }
            }
        }

        impl<'a, D> IntoIterator for &'a $list<D> {
            type IntoIter = $iter<'a, D>;
            type Item = &'a D;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<'a, D> $iter<'a, D> {
            /// Advance the iterator, failing once every element was yielded.
            pub fn try_next(&mut self) -> Result<&'a D, $crate::Error> {
                self.next().ok_or($crate::Error::IterationExhausted)
            }
        }

        impl<D> std::iter::FusedIterator for $iter<'_, D> {}
    };
}

pub(crate) use impl_sequence;
