//! # underbar
//!
//! A small functional toolkit built around a single iteration primitive.
//!
//! ## Overview
//!
//! - **Iteration kernel**: [`each`](collection::each) walks an ordered
//!   sequence or a keyed mapping and hands every element to a callback.
//! - **Collection operations**: `map`, `filter`, `reduce`, `uniq`, `extend`
//!   and friends, all composed from the kernel.
//! - **Function decorators**: `once`, `memoize`, `delay` and `throttle`, each
//!   wrapping a callable with a private state cell that lives as long as the
//!   returned callable.
//!
//! ## Feature Flags
//!
//! - `collection`: The iteration kernel and the operations derived from it
//! - `decorator`: `once` and `memoize`
//! - `timer`: `delay`, `throttle` and the timer scheduler (pulls in `tokio`)
//! - `serde`: `Serialize`/`Deserialize` for [`Nested`](collection::Nested)
//! - `fxhash`: Use `FxHash` for the `memoize` cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let doubled = map(&vec![1, 2, 3], |value, _, _| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let total = reduce(&doubled, |sum, value| sum + value, 0);
//! assert_eq!(total, 12);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "timer")]
pub mod scheduler;
