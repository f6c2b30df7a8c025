//! Run-once latching.
//!
//! [`Once`] invokes its function on the first call and replays the captured
//! result on every later call, whatever the arguments.
//!
//! # Latch Policy
//!
//! The function is invoked first; the result is captured and the latch is
//! closed only after it returns. A first call that panics therefore leaves
//! the cell open, and the next call runs the function again. [`TryOnce`]
//! applies the same rule to `Result`-returning functions: an `Err` is handed
//! back to the caller and does not close the latch.

use std::cell::RefCell;
use std::fmt;

/// Internal state of a [`Once`] or [`TryOnce`] cell.
enum OnceState<R> {
    /// No call has completed yet.
    Armed,
    /// A call completed; holds its result.
    Latched(R),
}

/// A function that runs at most once.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::Once;
///
/// let calls = Cell::new(0);
/// let initialize = Once::new(|name: &str| {
///     calls.set(calls.get() + 1);
///     format!("hello {name}")
/// });
///
/// assert_eq!(initialize.call("first"), "hello first");
/// assert_eq!(initialize.call("second"), "hello first");
/// assert_eq!(calls.get(), 1);
/// assert!(initialize.is_called());
/// ```
pub struct Once<F, R> {
    function: F,
    state: RefCell<OnceState<R>>,
}

impl<F, R> Once<F, R> {
    /// Wraps `function`. Nothing runs until the first [`call`](Self::call).
    #[inline]
    pub const fn new<A>(function: F) -> Self
    where
        F: Fn(A) -> R,
    {
        Self {
            function,
            state: RefCell::new(OnceState::Armed),
        }
    }

    /// Returns `true` once a call has completed and its result is captured.
    pub fn is_called(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Latched(_))
    }

    /// Invokes the function on the first call, then returns the captured
    /// result forever after.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by the wrapped function. The cell stays
    /// armed in that case.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: Fn(A) -> R,
        R: Clone,
    {
        if let OnceState::Latched(result) = &*self.state.borrow() {
            return result.clone();
        }

        let result = (self.function)(arguments);

        let mut state = self.state.borrow_mut();
        match &*state {
            // A re-entrant call latched first; its result wins.
            OnceState::Latched(existing) => existing.clone(),
            OnceState::Armed => {
                tracing::trace!("once: latched after first call");
                *state = OnceState::Latched(result.clone());
                result
            }
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Latched(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Armed => formatter.debug_tuple("Once").field(&"<armed>").finish(),
        }
    }
}

/// A fallible function whose first successful result is latched.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::TryOnce;
///
/// let attempts = Cell::new(0);
/// let connect = TryOnce::new(|()| {
///     attempts.set(attempts.get() + 1);
///     if attempts.get() < 2 { Err("refused") } else { Ok(attempts.get()) }
/// });
///
/// assert_eq!(connect.call(()), Err("refused"));
/// assert_eq!(connect.call(()), Ok(2));
/// assert_eq!(connect.call(()), Ok(2));
/// assert_eq!(attempts.get(), 2);
/// ```
pub struct TryOnce<F, T> {
    function: F,
    state: RefCell<OnceState<T>>,
}

impl<F, T> TryOnce<F, T> {
    /// Wraps `function`. Nothing runs until the first [`call`](Self::call).
    #[inline]
    pub const fn new<A, E>(function: F) -> Self
    where
        F: Fn(A) -> Result<T, E>,
    {
        Self {
            function,
            state: RefCell::new(OnceState::Armed),
        }
    }

    /// Returns `true` once a call has succeeded.
    pub fn is_called(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Latched(_))
    }

    /// Invokes the function until it first returns `Ok`, then replays that
    /// value.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's error unchanged. The cell stays armed.
    pub fn call<A, E>(&self, arguments: A) -> Result<T, E>
    where
        F: Fn(A) -> Result<T, E>,
        T: Clone,
    {
        if let OnceState::Latched(value) = &*self.state.borrow() {
            return Ok(value.clone());
        }

        let value = (self.function)(arguments)?;

        let mut state = self.state.borrow_mut();
        match &*state {
            OnceState::Latched(existing) => Ok(existing.clone()),
            OnceState::Armed => {
                tracing::trace!("try_once: latched after first success");
                *state = OnceState::Latched(value.clone());
                Ok(value)
            }
        }
    }
}

impl<F, T: fmt::Debug> fmt::Debug for TryOnce<F, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Latched(value) => formatter.debug_tuple("TryOnce").field(value).finish(),
            OnceState::Armed => formatter.debug_tuple("TryOnce").field(&"<armed>").finish(),
        }
    }
}

/// Returns a callable that invokes `function` on its first call only.
///
/// Every later call returns the first result without invoking `function`.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::once;
///
/// let first_seen = once(|value: i32| value * 10);
///
/// assert_eq!(first_seen(1), 10);
/// assert_eq!(first_seen(2), 10);
/// assert_eq!(first_seen(3), 10);
/// ```
pub fn once<A, R, F>(function: F) -> impl Fn(A) -> R
where
    F: Fn(A) -> R,
    R: Clone,
{
    let cell = Once::new(function);
    move |arguments| cell.call(arguments)
}

/// Returns a callable that invokes `function` until it first succeeds.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::try_once;
///
/// let parse = try_once(|text: &str| text.parse::<i32>());
///
/// assert!(parse("nope").is_err());
/// assert_eq!(parse("7"), Ok(7));
/// assert_eq!(parse("8"), Ok(7));
/// ```
pub fn try_once<A, T, E, F>(function: F) -> impl Fn(A) -> Result<T, E>
where
    F: Fn(A) -> Result<T, E>,
    T: Clone,
{
    let cell = TryOnce::new(function);
    move |arguments| cell.call(arguments)
}
