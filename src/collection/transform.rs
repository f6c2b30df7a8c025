//! Transformations and folds composed from the kernel.

use super::error::CollectionError;
use super::kernel::Collection;
use super::record::Record;

/// Builds a new sequence of `iteratee(value, index_or_key, collection)`
/// results, one per element, in the order the kernel visits them.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// let squares = map(&[1, 2, 3], |value, _, _| value * value);
/// assert_eq!(squares, vec![1, 4, 9]);
///
/// let offsets = map(&vec!['a', 'b'], |letter, index, _| format!("{index}{letter}"));
/// assert_eq!(offsets, vec!["0a", "1b"]);
/// ```
pub fn map<'a, C, U, F>(collection: &'a C, mut iteratee: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C) -> U,
{
    let mut results = Vec::with_capacity(collection.size());
    collection.each(|value, key, whole| results.push(iteratee(value, key, whole)));
    results
}

/// Collects the elements for which `predicate` returns `true`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let evens = filter(&vec![1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    let mut passed = Vec::new();
    collection.each(|value, _, _| {
        if predicate(value) {
            passed.push(value.clone());
        }
    });
    passed
}

/// Collects the elements for which `predicate` returns `false`.
///
/// Together with [`filter`] it partitions the collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// let odds = reject(&vec![1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Extracts `field` from every record in the collection.
///
/// A record without the field yields `None` at that position.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::pluck;
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("age", "40")]),
///     HashMap::from([("name", "curly")]),
/// ];
///
/// assert_eq!(pluck(&people, &"age"), vec![Some("40"), None]);
/// ```
pub fn pluck<C, R>(collection: &C, field: &R::Field) -> Vec<Option<R::Value>>
where
    C: Collection<Value = R> + ?Sized,
    R: Record,
    R::Value: Clone,
{
    map(collection, |record, _, _| record.get(field).cloned())
}

/// Left-folds the collection starting from `seed`.
///
/// `iteratee(accumulator, element)` is called once per element in
/// traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |sum, value| sum + value, 10), 16);
///
/// let joined = reduce(&vec!["a", "b"], |text, part| text + *part, String::new());
/// assert_eq!(joined, "ab");
/// ```
pub fn reduce<C, A, F>(collection: &C, mut iteratee: F, seed: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Value) -> A,
{
    let mut accumulator = seed;
    for value in map(collection, |value, _, _| value) {
        accumulator = iteratee(accumulator, value);
    }
    accumulator
}

/// Left-folds a sequence using its first element as the seed.
///
/// Iteration starts from the second element.
///
/// # Errors
///
/// Returns [`CollectionError::EmptyWithoutSeed`] when the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce_first;
///
/// assert_eq!(reduce_first(&[1, 2, 3, 4], |sum, value| sum + value), Ok(10));
/// assert_eq!(reduce_first(&[5], |sum, value| sum + value), Ok(5));
/// ```
pub fn reduce_first<T, F>(sequence: &[T], iteratee: F) -> Result<T, CollectionError>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (head, rest) = sequence
        .split_first()
        .ok_or(CollectionError::EmptyWithoutSeed)?;
    Ok(reduce(rest, iteratee, head.clone()))
}
