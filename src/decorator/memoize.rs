//! Result caching keyed by argument value.
//!
//! The cache key is the argument value itself, so two calls share a cache
//! entry exactly when their arguments are equal. Arguments of different
//! variants never collide, even when they would print the same: see the
//! `Arg::Number(0)` / `Arg::Text("0")` example on [`memoize`].
//!
//! Hits are decided by key membership, never by inspecting the cached
//! value, so falsy results such as `0`, `false` or `""` are cached like any
//! other. The cache is unbounded.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
type CacheHasher = rustc_hash::FxBuildHasher;
#[cfg(not(feature = "fxhash"))]
type CacheHasher = std::hash::RandomState;

/// A function whose results are cached per distinct argument.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::Memoize;
///
/// let calls = Cell::new(0);
/// let square = Memoize::new(|value: u64| {
///     calls.set(calls.get() + 1);
///     value * value
/// });
///
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(calls.get(), 1);
/// assert_eq!(square.len(), 1);
/// ```
pub struct Memoize<F, A, R> {
    function: F,
    cache: RefCell<HashMap<A, R, CacheHasher>>,
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(A) -> R,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::default()),
        }
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    /// Returns the cached result for `arguments`, invoking the function and
    /// caching its result on a miss.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by the wrapped function. Nothing is cached
    /// for that call.
    pub fn call(&self, arguments: A) -> R {
        if let Some(cached) = self.cache.borrow().get(&arguments) {
            tracing::trace!("memoize: cache hit");
            return cached.clone();
        }

        let result = (self.function)(arguments.clone());

        let mut cache = self.cache.borrow_mut();
        let size = cache.len();
        tracing::trace!(cache_size = size + 1, "memoize: cache miss");
        cache.entry(arguments).or_insert(result).clone()
    }

    /// Returns `true` if a result for `arguments` is cached.
    pub fn contains(&self, arguments: &A) -> bool {
        self.cache.borrow().contains_key(arguments)
    }
}

impl<F, A, R> fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Returns a callable that caches `function`'s result per distinct argument.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::memoize;
///
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// enum Arg {
///     Number(i64),
///     Text(&'static str),
/// }
///
/// let calls = Cell::new(0);
/// let describe = memoize(|argument: Arg| {
///     calls.set(calls.get() + 1);
///     match argument {
///         Arg::Number(number) => format!("number {number}"),
///         Arg::Text(text) => format!("text {text}"),
///     }
/// });
///
/// describe(Arg::Number(0));
/// describe(Arg::Text("0"));
/// describe(Arg::Number(0));
/// assert_eq!(calls.get(), 2);
/// ```
pub fn memoize<A, R, F>(function: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    let cell = Memoize::new(function);
    move |arguments| cell.call(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(0)]
    #[case(i64::MIN)]
    fn test_memoize_caches_falsy_results(#[case] input: i64) {
        let calls = Cell::new(0);
        let zero = Memoize::new(|_: i64| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(zero.call(input), 0);
        assert_eq!(zero.call(input), 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_memoize_caches_empty_string_and_false() {
        let calls = Cell::new(0);
        let blank = Memoize::new(|_: bool| {
            calls.set(calls.get() + 1);
            (String::new(), false)
        });
        blank.call(true);
        blank.call(true);
        assert_eq!(calls.get(), 1);
        assert!(blank.contains(&true));
        assert!(!blank.contains(&false));
    }

    #[rstest]
    fn test_memoize_tuple_arguments_are_order_sensitive() {
        let calls = Cell::new(0);
        let subtract = Memoize::new(|(left, right): (i32, i32)| {
            calls.set(calls.get() + 1);
            left - right
        });
        assert_eq!(subtract.call((5, 3)), 2);
        assert_eq!(subtract.call((3, 5)), -2);
        assert_eq!(calls.get(), 2);
        assert_eq!(subtract.len(), 2);
    }

    #[rstest]
    fn test_memoize_panic_caches_nothing() {
        let cell = Memoize::new(|value: i32| {
            assert!(value >= 0, "negative input");
            value
        });
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| cell.call(-1)));
        assert!(outcome.is_err());
        assert!(cell.is_empty());
        assert_eq!(format!("{cell:?}"), "Memoize { cached: 0, .. }");
    }
}
