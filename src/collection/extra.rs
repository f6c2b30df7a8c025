//! Sorting, zipping, flattening and set-like operations.
//!
//! These are compositions of the kernel and the other collection
//! operations; none of them keeps state between calls.

use super::kernel::{Collection, each};
use super::predicate::{contains, every, some};
use super::sequence::uniq;
use super::transform::{filter, map, reject};

/// A value that is either a single element or a nested sequence.
///
/// Input type of [`flatten`].
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Nested;
///
/// let nested = Nested::Branch(vec![Nested::Leaf(1), Nested::Branch(vec![Nested::Leaf(2)])]);
/// assert_eq!(nested.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nested<T> {
    /// A single element.
    Leaf(T),
    /// A nested sequence.
    Branch(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns the nesting depth: `0` for a leaf, one more than the deepest
    /// child for a branch.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Branch(children) => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

/// Returns the elements sorted ascending by `criterion`.
///
/// The sort is stable: elements with equal criteria keep their traversal
/// order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::sort_by;
///
/// let words = vec!["pear", "fig", "banana", "kiwi"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "pear", "kiwi", "banana"]);
/// ```
pub fn sort_by<C, K, F>(collection: &C, mut criterion: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    K: Ord,
    F: FnMut(&C::Value) -> K,
{
    let mut keyed = map(collection, |value, _, _| (criterion(value), value.clone()));
    keyed.sort_by(|left, right| left.0.cmp(&right.0));
    keyed.into_iter().map(|(_, value)| value).collect()
}

/// Groups elements by position across several sequences.
///
/// The result is as long as the longest input; positions past the end of a
/// shorter input are `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip;
///
/// let zipped = zip(&[&[1, 2, 3][..], &[4, 5][..]]);
/// assert_eq!(
///     zipped,
///     vec![
///         vec![Some(1), Some(4)],
///         vec![Some(2), Some(5)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = map(sequences, |sequence, _, _| sequence.len())
        .into_iter()
        .max()
        .unwrap_or(0);
    (0..longest)
        .map(|position| map(sequences, |sequence, _, _| sequence.get(position).cloned()))
        .collect()
}

/// Flattens arbitrarily nested sequences into one, depth first.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Nested, flatten};
///
/// let nested = vec![
///     Nested::Leaf(1),
///     Nested::Branch(vec![Nested::Leaf(2), Nested::Branch(vec![Nested::Leaf(3)])]),
///     Nested::Branch(vec![]),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fn flatten_into<T: Clone>(nested: &[Nested<T>], output: &mut Vec<T>) {
        each(nested, |item, _, _| match item {
            Nested::Leaf(value) => output.push(value.clone()),
            Nested::Branch(children) => flatten_into(children, output),
        });
    }

    let mut output = Vec::new();
    flatten_into(nested, &mut output);
    output
}

/// Returns the distinct elements of the first sequence that appear in every
/// other sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::intersection;
///
/// let shared = intersection(&[&[1, 2, 3, 2][..], &[2, 3, 4][..], &[3, 2][..]]);
/// assert_eq!(shared, vec![2, 3]);
/// ```
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    filter(&uniq(head, false), |value| {
        every(rest, |other| contains(*other, value))
    })
}

/// Returns the elements of `sequence` that appear in none of `others`.
///
/// Order and duplicates of `sequence` are preserved.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::difference;
///
/// let remaining = difference(&[1, 2, 3, 4, 1], &[&[2][..], &[4, 5][..]]);
/// assert_eq!(remaining, vec![1, 3, 1]);
/// ```
pub fn difference<T>(sequence: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    reject(sequence, |value| some(others, |other| contains(*other, value)))
}
