//! Timer scheduling for [`delay`](crate::decorator::delay) and
//! [`throttle`](crate::decorator::throttle).
//!
//! Timer tasks run on the tokio runtime the caller is already inside. When
//! called from plain synchronous code, they run on a lazily built fallback
//! runtime owned by this module.
//!
//! # Handle Priority
//!
//! 1. Inside a tokio runtime: the current runtime's handle, so timers follow
//!    the caller's clock (including a paused test clock).
//! 2. Otherwise: the fallback runtime, built on first use from the
//!    [`SchedulerConfig`] passed to [`configure`] (or the default).
//!
//! # Examples
//!
//! ```rust
//! use std::sync::mpsc;
//! use underbar::scheduler;
//!
//! let (sender, receiver) = mpsc::channel();
//! scheduler::spawn(async move {
//!     sender.send(7).ok();
//! });
//! assert_eq!(receiver.recv().ok(), Some(7));
//! ```

mod config;
mod error;

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

pub use config::SchedulerConfig;
pub use error::SchedulerError;

static CONFIG: OnceLock<SchedulerConfig> = OnceLock::new();

static FALLBACK_RUNTIME: OnceLock<Result<Runtime, SchedulerError>> = OnceLock::new();

/// Sets the configuration of the fallback runtime.
///
/// Must be called before the first timer is scheduled outside a runtime.
///
/// # Errors
///
/// Returns [`SchedulerError::AlreadyInitialized`] if a configuration was
/// already set or the fallback runtime already exists.
///
/// # Examples
///
/// ```rust
/// use underbar::scheduler::{self, SchedulerConfig, SchedulerError};
///
/// let config = SchedulerConfig::default().with_worker_threads(2);
/// scheduler::configure(config.clone()).ok();
///
/// assert_eq!(
///     scheduler::configure(config),
///     Err(SchedulerError::AlreadyInitialized)
/// );
/// ```
pub fn configure(config: SchedulerConfig) -> Result<(), SchedulerError> {
    CONFIG
        .set(config)
        .map_err(|_| SchedulerError::AlreadyInitialized)
}

fn build_runtime(config: &SchedulerConfig) -> Result<Runtime, SchedulerError> {
    tracing::debug!(
        worker_threads = config.worker_threads,
        thread_name = %config.thread_name,
        "scheduler: building fallback timer runtime"
    );
    Builder::new_multi_thread()
        .worker_threads(config.worker_threads.max(1))
        .thread_name(config.thread_name.clone())
        .enable_time()
        .build()
        .map_err(|error| SchedulerError::RuntimeBuild(error.to_string()))
}

fn fallback() -> Result<&'static Runtime, SchedulerError> {
    FALLBACK_RUNTIME
        .get_or_init(|| build_runtime(CONFIG.get_or_init(SchedulerConfig::default)))
        .as_ref()
        .map_err(Clone::clone)
}

/// Returns a handle to the current runtime, or to the fallback runtime when
/// called outside one.
///
/// # Errors
///
/// Returns [`SchedulerError::RuntimeBuild`] if the fallback runtime is needed
/// and could not be built.
pub fn try_handle() -> Result<Handle, SchedulerError> {
    if let Ok(current_handle) = Handle::try_current() {
        return Ok(current_handle);
    }
    fallback().map(|runtime| runtime.handle().clone())
}

/// Returns a handle to the current runtime, or to the fallback runtime.
///
/// # Panics
///
/// Panics if the fallback runtime is needed and could not be built.
#[must_use]
pub fn handle() -> Handle {
    try_handle().expect("Failed to create fallback timer runtime")
}

/// Spawns `future` on the runtime returned by [`handle`].
///
/// # Panics
///
/// Panics if the fallback runtime is needed and could not be built.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    handle().spawn(future)
}
