//! Leading-and-trailing-edge rate limiting.
//!
//! A [`Throttle`] runs its function at most once per `wait` window:
//!
//! - The first call in a quiet period runs immediately and opens a window.
//! - Calls inside the window only record their arguments, overwriting any
//!   earlier ones, and make sure one trailing timer is scheduled for the end
//!   of the window.
//! - When the timer fires it runs the function with the latest recorded
//!   arguments, which opens a new window.
//!
//! The trailing timer only holds a weak reference to the throttle state.
//! Dropping the [`Throttle`] aborts the timer and discards the pending call.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::scheduler;

/// Outcome of a single [`Throttle::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Throttled {
    /// The function ran during this call.
    Invoked,
    /// The arguments were recorded for the trailing call.
    Deferred,
}

impl Throttled {
    /// Returns `true` if the function ran during the call.
    #[must_use]
    pub const fn is_invoked(self) -> bool {
        matches!(self, Self::Invoked)
    }
}

struct PendingTimer {
    id: u64,
    handle: JoinHandle<()>,
}

struct ThrottleState<A> {
    last_invoked_at: Option<Instant>,
    pending_timer: Option<PendingTimer>,
    pending_arguments: Option<A>,
    next_timer_id: u64,
}

/// Where `now` falls relative to the current window.
enum Window {
    Open,
    ClosesAt(Instant),
    /// The window end is past the representable `Instant` range.
    NeverCloses,
}

impl<A> ThrottleState<A> {
    fn window(&self, now: Instant, wait: Duration) -> Window {
        match self.last_invoked_at.map(|last| last.checked_add(wait)) {
            None => Window::Open,
            Some(Some(end)) if now >= end => Window::Open,
            Some(Some(end)) => Window::ClosesAt(end),
            Some(None) => Window::NeverCloses,
        }
    }

    const fn new() -> Self {
        Self {
            last_invoked_at: None,
            pending_timer: None,
            pending_arguments: None,
            next_timer_id: 0,
        }
    }
}

struct Shared<F, A> {
    function: F,
    wait: Duration,
    state: Mutex<ThrottleState<A>>,
}

impl<F, A> Drop for Shared<F, A> {
    fn drop(&mut self) {
        if let Some(timer) = self.state.get_mut().pending_timer.take() {
            tracing::trace!("throttle: dropped with a pending trailing call");
            timer.handle.abort();
        }
    }
}

impl<F, A> Shared<F, A>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    fn fire_trailing(&self, timer_id: u64) {
        let arguments = {
            let mut state = self.state.lock();
            if state.pending_timer.as_ref().map(|timer| timer.id) != Some(timer_id) {
                return;
            }
            state.pending_timer = None;
            let Some(arguments) = state.pending_arguments.take() else {
                return;
            };
            state.last_invoked_at = Some(Instant::now());
            arguments
        };

        tracing::debug!(timer_id, "throttle: trailing call fired");
        (self.function)(arguments);
    }
}

/// A function rate-limited to one run per window.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use underbar::decorator::{Throttle, Throttled};
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let throttled = Throttle::new(
///     move |_: u32| {
///         counter.fetch_add(1, Ordering::SeqCst);
///     },
///     Duration::from_secs(60),
/// );
///
/// assert_eq!(throttled.call(1), Throttled::Invoked);
/// assert_eq!(throttled.call(2), Throttled::Deferred);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// assert!(throttled.has_pending_call());
/// ```
pub struct Throttle<F, A> {
    shared: Arc<Shared<F, A>>,
}

impl<F, A> Throttle<F, A>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    /// Wraps `function` with a window of length `wait`.
    pub fn new(function: F, wait: Duration) -> Self {
        Self {
            shared: Arc::new(Shared {
                function,
                wait,
                state: Mutex::new(ThrottleState::new()),
            }),
        }
    }

    /// Returns the window length.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }

    /// Returns `true` if arguments are recorded for a trailing call.
    pub fn has_pending_call(&self) -> bool {
        self.shared.state.lock().pending_arguments.is_some()
    }

    /// Runs the function now if the window is open, otherwise records
    /// `arguments` for the trailing call.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by the wrapped function on the leading
    /// edge. Panics if a trailing timer is needed outside a runtime and the
    /// fallback runtime cannot be built.
    pub fn call(&self, arguments: A) -> Throttled {
        let now = Instant::now();
        let mut state = self.shared.state.lock();

        let window = state.window(now, self.shared.wait);

        if matches!(window, Window::Open) {
            state.pending_arguments = None;
            if let Some(stale) = state.pending_timer.take() {
                stale.handle.abort();
            }
            state.last_invoked_at = Some(now);
            drop(state);

            tracing::debug!("throttle: leading call invoked");
            (self.shared.function)(arguments);
            return Throttled::Invoked;
        }

        state.pending_arguments = Some(arguments);
        match window {
            Window::ClosesAt(deadline) if state.pending_timer.is_none() => {
                let id = state.next_timer_id;
                state.next_timer_id = id.wrapping_add(1);
                let handle = Self::schedule_trailing(Arc::downgrade(&self.shared), id, deadline);
                state.pending_timer = Some(PendingTimer { id, handle });
                tracing::trace!(timer_id = id, "throttle: trailing call scheduled");
            }
            Window::NeverCloses => {
                tracing::trace!("throttle: window never closes, trailing call not scheduled");
            }
            _ => tracing::trace!("throttle: pending arguments replaced"),
        }
        Throttled::Deferred
    }

    fn schedule_trailing(shared: Weak<Shared<F, A>>, id: u64, deadline: Instant) -> JoinHandle<()> {
        scheduler::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(shared) = shared.upgrade() {
                shared.fire_trailing(id);
            }
        })
    }
}

impl<F, A> fmt::Debug for Throttle<F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.shared.wait)
            .field("pending", &state.pending_arguments.is_some())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Throttle<fn(u32), u32>: Send, Sync);

/// Returns a callable that runs `function` at most once per `wait`, with a
/// leading call and at most one trailing call per window.
///
/// The trailing call uses the arguments of the most recent call made during
/// the window.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use underbar::decorator::throttle;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let record = throttle(
///     move |value: u32| sink.lock().unwrap().push(value),
///     Duration::from_millis(20),
/// );
///
/// for value in 1..=5 {
///     record(value);
/// }
/// std::thread::sleep(Duration::from_millis(200));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 5]);
/// ```
pub fn throttle<A, F>(function: F, wait: Duration) -> impl Fn(A) -> Throttled + Send + Sync
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    let throttled = Throttle::new(function, wait);
    move |arguments| throttled.call(arguments)
}
