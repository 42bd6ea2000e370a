//! Errors reported when checking the ordering invariant of a tree.

use std::result;
use thiserror::Error;

/// The ways a tree can fail validation.
///
/// A tree built through the public API only ever fails validation when the `Ord` implementation of
/// its keys is not a total order, or changed while keys were stored.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The key at `position` of the in-order traversal compares less than its predecessor.
    #[error("key at in-order position {position} is smaller than its predecessor")]
    OutOfOrder { position: usize },
    /// The key at `position` of the in-order traversal compares equal to its predecessor.
    #[error("key at in-order position {position} is equal to its predecessor")]
    DuplicateKey { position: usize },
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::OutOfOrder { position: 3 }.to_string(),
            "key at in-order position 3 is smaller than its predecessor",
        );
        assert_eq!(
            Error::DuplicateKey { position: 1 }.to_string(),
            "key at in-order position 1 is equal to its predecessor",
        );
    }
}
