//! Operations specific to ordered sequences.

use rand::Rng;
use rand::seq::SliceRandom;

use super::kernel::each;

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first;
///
/// assert_eq!(first(&[3, 2, 1]), Some(&3));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `min(count, len)` elements as a new sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 0), Vec::<i32>::new());
/// assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last;
///
/// assert_eq!(last(&[3, 2, 1]), Some(&1));
/// ```
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the final `min(count, len)` elements, in their original order.
///
/// A `count` of zero yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 0), Vec::<i32>::new());
/// assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[sequence.len().saturating_sub(count)..].to_vec()
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20], &99), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(sequence, |value, index, _| {
        if found.is_none() && value == target {
            found = Some(index);
        }
    });
    found
}

/// Removes duplicates, keeping the first occurrence of each element.
///
/// Two elements are duplicates when they compare equal. `_is_sorted` is
/// accepted for callers that know their input is sorted; the result is the
/// same either way.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2], false), vec![1, 2, 3]);
/// assert_eq!(uniq(&[1, 1, 2, 3, 3], true), vec![1, 2, 3]);
/// ```
pub fn uniq<T>(sequence: &[T], _is_sorted: bool) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut unique: Vec<T> = Vec::new();
    each(sequence, |value, _, _| {
        if !unique.contains(value) {
            unique.push(value.clone());
        }
    });
    unique
}

/// Removes duplicates by a derived key, keeping the first element seen for
/// each key.
///
/// `transform` is called exactly once per element. `_is_sorted` is accepted
/// as for [`uniq`] and does not change the result.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq_by;
///
/// assert_eq!(uniq_by(&[1, 2, 1, 3], false, |value| value % 2), vec![1, 2]);
///
/// let words = ["apple", "avocado", "banana"];
/// assert_eq!(
///     uniq_by(&words, false, |word| word.chars().next()),
///     vec!["apple", "banana"]
/// );
/// ```
pub fn uniq_by<T, K, F>(sequence: &[T], _is_sorted: bool, mut transform: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut seen_keys: Vec<K> = Vec::new();
    let mut unique = Vec::new();
    each(sequence, |value, _, _| {
        let key = transform(value);
        if !seen_keys.contains(&key) {
            seen_keys.push(key);
            unique.push(value.clone());
        }
    });
    unique
}

/// Returns a uniformly random permutation of the sequence.
///
/// The input is left untouched. Uses the thread-local generator.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
///
/// assert_eq!(original, vec![1, 2, 3, 4, 5]);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a random permutation of the sequence drawn from `rng`.
///
/// A seeded generator makes the permutation reproducible.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::collection::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
