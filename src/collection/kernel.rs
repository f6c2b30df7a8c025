//! The iteration kernel.
//!
//! [`Collection`] is the one traversal primitive the rest of the module
//! composes from. Ordered sequences are visited in ascending index order;
//! keyed mappings are visited in whatever order the mapping yields, and
//! callers must not depend on it.

use std::collections::{BTreeMap, HashMap, VecDeque};

/// A collection that can hand each of its elements to a callback.
///
/// The callback receives `(value, index_or_key, collection)`. Sequences use
/// `usize` indices, keyed mappings pass a reference to the key.
///
/// # Laws
///
/// - Every element is visited exactly once.
/// - Sequences are visited in ascending index order, starting at `0`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
///
/// let letters = vec!['a', 'b', 'c'];
/// let mut visited = Vec::new();
///
/// letters.each(|letter, index, whole| {
///     assert_eq!(whole.len(), 3);
///     visited.push((index, *letter));
/// });
///
/// assert_eq!(visited, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
/// ```
pub trait Collection {
    /// The element type.
    type Value;

    /// The position handed to the iteratee: an index or a key reference.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Invokes `iteratee` once per element.
    fn each<'a, F>(&'a self, iteratee: F)
    where
        F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self);

    /// Returns the number of elements.
    fn size(&self) -> usize;
}

/// Invokes `iteratee(value, index_or_key, collection)` for every element.
///
/// Free-function form of [`Collection::each`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let mut total = 0;
/// each(&[1, 2, 3], |value, _, _| total += value);
/// assert_eq!(total, 6);
/// ```
#[inline]
pub fn each<'a, C, F>(collection: &'a C, iteratee: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C),
{
    collection.each(iteratee);
}

macro_rules! impl_sequence_collection {
    ($([$($generics:tt)*] $sequence:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Collection for $sequence {
                type Value = T;
                type Key<'a> = usize
                where
                    Self: 'a;

                fn each<'a, F>(&'a self, mut iteratee: F)
                where
                    F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self),
                {
                    for (index, value) in self.iter().enumerate() {
                        iteratee(value, index, self);
                    }
                }

                #[inline]
                fn size(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_sequence_collection!(
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, const N: usize] [T; N],
);

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Value = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iteratee: F)
    where
        F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self {
            iteratee(value, key, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Value = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iteratee: F)
    where
        F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self),
    {
        for (key, value) in self {
            iteratee(value, key, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
