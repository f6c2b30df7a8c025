//! Stateful function decorators.
//!
//! Each decorator takes a callable and returns a new callable that owns a
//! private state cell. The cell is created when the decorator is applied,
//! is never shared with another decorated instance, and is dropped together
//! with the returned callable.
//!
//! - [`once`]: Runs the wrapped function on the first call only
//! - [`memoize`]: Caches results by argument value
//! - [`delay`]: Runs a function once after a wait (feature `timer`)
//! - [`throttle`]: At most one run per window, leading and trailing edge
//!   (feature `timer`)
//!
//! # Calling Convention
//!
//! A decorated callable takes a single argument value. Use a tuple for
//! several arguments and `()` for none:
//!
//! ```rust
//! use underbar::decorator::memoize;
//!
//! let area = memoize(|(width, height): (u32, u32)| width * height);
//! assert_eq!(area((3, 4)), 12);
//!
//! let answer = memoize(|()| 42);
//! assert_eq!(answer(()), 42);
//! ```
//!
//! # Thread Safety
//!
//! [`Once`] and [`Memoize`] keep their state in a `RefCell` and are meant
//! for a single thread of control. [`Throttle`] and [`DelayHandle`] are
//! `Send + Sync`, since their timers run on the scheduler.

mod memoize;
mod once;

#[cfg(feature = "timer")]
mod delay;
#[cfg(feature = "timer")]
mod throttle;

pub use memoize::{Memoize, memoize};
pub use once::{Once, TryOnce, once, try_once};

#[cfg(feature = "timer")]
pub use delay::{DelayHandle, delay};
#[cfg(feature = "timer")]
pub use throttle::{Throttle, Throttled, throttle};
