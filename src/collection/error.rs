//! Error types for collection operations.

use thiserror::Error;

/// Errors raised when a collection operation is called outside its contract.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{CollectionError, reduce_first};
///
/// let empty: Vec<i32> = Vec::new();
/// let result = reduce_first(&empty, |sum, value| sum + value);
///
/// assert_eq!(result, Err(CollectionError::EmptyWithoutSeed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A fold without a seed was asked to reduce an empty sequence.
    #[error("cannot reduce an empty sequence without a seed")]
    EmptyWithoutSeed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_without_seed_display() {
        assert_eq!(
            CollectionError::EmptyWithoutSeed.to_string(),
            "cannot reduce an empty sequence without a seed"
        );
    }

    #[test]
    fn test_collection_error_source() {
        use std::error::Error;

        assert!(CollectionError::EmptyWithoutSeed.source().is_none());
    }
}
