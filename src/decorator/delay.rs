//! Deferred, cancellable execution.
//!
//! [`delay`] schedules a function to run once, no earlier than a given wait,
//! and returns immediately with a [`DelayHandle`].
//!
//! The handle and the timer task race on a single atomic state. Whichever
//! leaves `PENDING` first wins: the timer moves to `FIRED` right before it
//! calls the function, [`DelayHandle::cancel`] moves to `CANCELLED`. A
//! cancellation that loses the race reports `false`.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::scheduler;

/// State: timer not yet fired
const STATE_PENDING: u8 = 0;
/// State: function has been called (or is running)
const STATE_FIRED: u8 = 1;
/// State: cancelled before firing
const STATE_CANCELLED: u8 = 2;

/// Handle to a call scheduled by [`delay`].
///
/// Dropping the handle does not cancel the call.
pub struct DelayHandle {
    state: Arc<AtomicU8>,
    task: JoinHandle<()>,
}

impl DelayHandle {
    /// Cancels the call if it has not fired yet.
    ///
    /// Returns `true` if this call prevented the function from running.
    pub fn cancel(&self) -> bool {
        let prevented = self
            .state
            .compare_exchange(
                STATE_PENDING,
                STATE_CANCELLED,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();
        if prevented {
            self.task.abort();
            tracing::debug!("delay: cancelled before firing");
        }
        prevented
    }

    /// Returns `true` while the call is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_PENDING
    }

    /// Returns `true` once the function has been called.
    pub fn has_fired(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_FIRED
    }

    /// Returns `true` if the call was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) == STATE_CANCELLED
    }

    /// Returns `true` once the timer task has completed or been aborted.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl fmt::Debug for DelayHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state.load(Ordering::Acquire) {
            STATE_PENDING => "pending",
            STATE_FIRED => "fired",
            _ => "cancelled",
        };
        formatter
            .debug_struct("DelayHandle")
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(DelayHandle: Send, Sync);

/// Schedules `function(arguments)` to run once, no earlier than `wait` from
/// now.
///
/// Returns without blocking. Inside a tokio runtime the timer runs on that
/// runtime; elsewhere it runs on the [scheduler](crate::scheduler)'s fallback
/// runtime.
///
/// # Panics
///
/// Panics if called outside a runtime and the fallback runtime cannot be
/// built.
///
/// # Examples
///
/// ```rust
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use underbar::decorator::delay;
///
/// let (sender, receiver) = mpsc::channel();
/// let handle = delay(
///     move |(greeting, name): (&str, &str)| {
///         sender.send(format!("{greeting}, {name}")).ok();
///     },
///     Duration::from_millis(10),
///     ("hello", "world"),
/// );
///
/// assert_eq!(receiver.recv().ok().as_deref(), Some("hello, world"));
/// assert!(handle.has_fired());
/// ```
pub fn delay<F, A>(function: F, wait: Duration, arguments: A) -> DelayHandle
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    let state = Arc::new(AtomicU8::new(STATE_PENDING));
    let timer_state = Arc::clone(&state);

    tracing::debug!(wait_ms = wait.as_millis(), "delay: scheduled");
    let task = scheduler::spawn(async move {
        tokio::time::sleep(wait).await;
        if timer_state
            .compare_exchange(
                STATE_PENDING,
                STATE_FIRED,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
        {
            tracing::debug!("delay: fired");
            function(arguments);
        }
    });

    DelayHandle { state, task }
}
