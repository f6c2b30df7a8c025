//! Keyed mappings and the merge operations over them.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::kernel::Collection;

/// A keyed mapping whose entries can be read and written by field.
///
/// `Record` extends the kernel with the lookups [`pluck`](super::pluck),
/// [`extend`] and [`defaults`] need. [`Record::field`] turns the key the
/// kernel hands to an iteratee into an owned field that can be stored.
pub trait Record: Collection {
    /// The owned key type.
    type Field: Clone;

    /// Converts a kernel key into an owned field.
    fn field<'a>(key: Self::Key<'a>) -> Self::Field
    where
        Self: 'a;

    /// Returns the value stored under `field`, if any.
    fn get(&self, field: &Self::Field) -> Option<&Self::Value>;

    /// Stores `value` under `field`, replacing any previous value.
    fn set(&mut self, field: Self::Field, value: Self::Value);

    /// Returns `true` when a value is stored under `field`.
    #[inline]
    fn has(&self, field: &Self::Field) -> bool {
        self.get(field).is_some()
    }
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Field = K;

    #[inline]
    fn field<'a>(key: &'a K) -> K
    where
        Self: 'a,
    {
        key.clone()
    }

    #[inline]
    fn get(&self, field: &K) -> Option<&V> {
        Self::get(self, field)
    }

    #[inline]
    fn set(&mut self, field: K, value: V) {
        self.insert(field, value);
    }

    #[inline]
    fn has(&self, field: &K) -> bool {
        self.contains_key(field)
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Ord + Clone,
{
    type Field = K;

    #[inline]
    fn field<'a>(key: &'a K) -> K
    where
        Self: 'a,
    {
        key.clone()
    }

    #[inline]
    fn get(&self, field: &K) -> Option<&V> {
        Self::get(self, field)
    }

    #[inline]
    fn set(&mut self, field: K, value: V) {
        self.insert(field, value);
    }

    #[inline]
    fn has(&self, field: &K) -> bool {
        self.contains_key(field)
    }
}

/// Copies every entry of each source into `target`, left to right.
///
/// Later sources overwrite earlier ones and the target itself. Returns the
/// mutated target.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::extend;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// extend(&mut target, &[&BTreeMap::from([("b", 2)]), &BTreeMap::from([("a", 3)])]);
///
/// assert_eq!(target, BTreeMap::from([("a", 3), ("b", 2)]));
/// ```
pub fn extend<'t, R>(target: &'t mut R, sources: &[&R]) -> &'t mut R
where
    R: Record,
    R::Value: Clone,
{
    for source in sources {
        source.each(|value, key, _| target.set(R::field(key), value.clone()));
    }
    target
}

/// Copies entries of each source into `target` only where `target` has no
/// value yet for that field.
///
/// Sources are applied left to right, so the first source to supply a field
/// wins. Returns the mutated target.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::defaults;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// defaults(&mut target, &[&BTreeMap::from([("a", 9), ("b", 2)])]);
///
/// assert_eq!(target, BTreeMap::from([("a", 1), ("b", 2)]));
/// ```
pub fn defaults<'t, R>(target: &'t mut R, sources: &[&R]) -> &'t mut R
where
    R: Record,
    R::Value: Clone,
{
    for source in sources {
        source.each(|value, key, _| {
            let field = R::field(key);
            if !target.has(&field) {
                target.set(field, value.clone());
            }
        });
    }
    target
}
