//! Membership and quantifier queries, expressed as folds.

use super::kernel::Collection;
use super::transform::reduce;
use super::utils::Truthy;

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&vec!["a", "b"], &"c"));
/// ```
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    reduce(
        collection,
        |was_found, value| was_found || value == target,
        false,
    )
}

/// Returns `true` if `predicate` holds for every element.
///
/// An empty collection satisfies every predicate. Once an element fails,
/// the predicate is not called again.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value| value % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    reduce(
        collection,
        |all_passed, value| all_passed && predicate(value),
        true,
    )
}

/// Returns `true` if every element is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&[1, 0, 3]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Defined as the negation of [`every`] over the negated predicate, so an
/// empty collection yields `false`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert!(some(&[1, 3, 4], |value| value % 2 == 0));
/// assert!(!some(&[1, 3, 5], |value| value % 2 == 0));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Value) -> bool,
{
    !every(collection, |value| !predicate(value))
}

/// Returns `true` if at least one element is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some_truthy;
///
/// assert!(some_truthy(&["", "x"]));
/// assert!(!some_truthy(&[None::<i32>, Some(0)]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    some(collection, Truthy::is_truthy)
}
