//! Collection operations built on a single iteration kernel.
//!
//! Every traversal in this module is expressed through [`Collection::each`],
//! which visits each element of an ordered sequence (in ascending index
//! order) or of a keyed mapping (in unspecified order) exactly once.
//!
//! # Overview
//!
//! - [`each`]: The kernel itself
//! - [`map`], [`filter`], [`reject`], [`pluck`], [`reduce`]: Transformations and folds
//! - [`contains`], [`every`], [`some`]: Queries, all expressed as folds
//! - [`first`], [`last`], [`index_of`], [`uniq`], [`shuffle`]: Sequence operations
//! - [`extend`], [`defaults`]: Merging keyed mappings
//! - [`sort_by`], [`zip`], [`flatten`], [`intersection`], [`difference`]: Extras
//!
//! # Optional Arguments
//!
//! Operations whose behaviour depends on whether an argument was supplied
//! come in pairs: [`first`] / [`first_n`], [`last`] / [`last_n`],
//! [`reduce`] / [`reduce_first`], [`uniq`] / [`uniq_by`],
//! [`every`] / [`every_truthy`] and [`some`] / [`some_truthy`].
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{filter, reject, uniq};
//!
//! let numbers = vec![1, 2, 1, 3, 2, 4];
//!
//! assert_eq!(uniq(&numbers, false), vec![1, 2, 3, 4]);
//! assert_eq!(filter(&numbers, |number| number % 2 == 0), vec![2, 2, 4]);
//! assert_eq!(reject(&numbers, |number| number % 2 == 0), vec![1, 1, 3]);
//! ```
//!
//! Keyed mappings go through the same kernel:
//!
//! ```rust
//! use std::collections::HashMap;
//! use underbar::collection::{every, map};
//!
//! let ages = HashMap::from([("alice", 31), ("bob", 27)]);
//!
//! assert!(every(&ages, |age| *age > 18));
//!
//! let mut labels = map(&ages, |age, name, _| format!("{name}:{age}"));
//! labels.sort();
//! assert_eq!(labels, vec!["alice:31", "bob:27"]);
//! ```

mod error;
mod extra;
mod kernel;
mod predicate;
mod record;
mod sequence;
mod transform;
mod utils;

pub use error::CollectionError;
pub use extra::{Nested, difference, flatten, intersection, sort_by, zip};
pub use kernel::{Collection, each};
pub use predicate::{contains, every, every_truthy, some, some_truthy};
pub use record::{Record, defaults, extend};
pub use sequence::{
    first, first_n, index_of, last, last_n, shuffle, shuffle_with, uniq, uniq_by,
};
pub use transform::{filter, map, pluck, reduce, reduce_first, reject};
pub use utils::{Truthy, identity};
