//! Errors raised while building a [`ValidationError`](crate::ValidationError).

use std::error::Error as StdError;
use std::fmt;

/// A construction argument broke the aggregate's preconditions.
///
/// Returned by [`ValidationError::from_vec`](crate::ValidationError::from_vec)
/// and the matching `TryFrom<Vec<Violation>>` impl, the only paths where
/// an empty list cannot be ruled out at compile time.
///
/// # Examples
///
/// ```
/// use valerr::{InvalidArgument, ValidationError};
///
/// let err = ValidationError::from_vec(Vec::new()).unwrap_err();
/// assert_eq!(err, InvalidArgument::NoViolations);
/// assert_eq!(
///     err.to_string(),
///     "invalid argument: a validation error needs at least one violation"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// The violation list was empty.
    NoViolations,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NoViolations => write!(
                f,
                "invalid argument: a validation error needs at least one violation"
            ),
        }
    }
}

impl StdError for InvalidArgument {}
