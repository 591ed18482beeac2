//! Testing utilities for code that produces validation errors
//!
//! Assertion macros for checking the contents of a [`ValidationError`], and,
//! with the `proptest` feature, `Arbitrary` impls so property tests can draw
//! violations and non-empty aggregates directly.
//!
//! # Examples
//!
//! ```rust
//! use valerr::{assert_has_violation, assert_violations, validation_error};
//!
//! let err = validation_error![("email", "invalid"), ("name", "empty")];
//!
//! assert_violations!(err, [("email", "invalid"), ("name", "empty")]);
//! assert_has_violation!(err, "name", "empty");
//! ```
//!
//! [`ValidationError`]: crate::ValidationError

/// Assert that a validation error holds exactly the given violations, in order.
///
/// Expected violations are written as `(field, reason)` pairs.
///
/// # Example
///
/// ```rust
/// use valerr::{assert_violations, ValidationError, Violation};
///
/// let err = ValidationError::new(Violation::new("email", "invalid"));
/// assert_violations!(err, [("email", "invalid")]);
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($error:expr, [$(($field:expr, $reason:expr)),+ $(,)?]) => {{
        let expected: ::std::vec::Vec<$crate::Violation> =
            ::std::vec![$($crate::Violation::new($field, $reason)),+];
        let actual = $crate::ValidationError::violations(&$error);
        if actual != expected.as_slice() {
            panic!(
                "Expected violations {:?}, got {:?}",
                expected, actual
            );
        }
    }};
}

/// Assert that a validation error contains a violation for `field` with `reason`.
///
/// # Example
///
/// ```rust
/// use valerr::{assert_has_violation, validation_error};
///
/// let err = validation_error![("email", "invalid"), ("password", "insecure")];
/// assert_has_violation!(err, "password", "insecure");
/// ```
#[macro_export]
macro_rules! assert_has_violation {
    ($error:expr, $field:expr, $reason:expr) => {{
        let wanted = $crate::Violation::new($field, $reason);
        let error = &$error;
        if !$crate::ValidationError::iter(error).any(|v| *v == wanted) {
            panic!(
                "Expected {} to be part of violations, got {}",
                wanted,
                $crate::ValidationError::render(error)
            );
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{ValidationError, Violation};

#[cfg(feature = "proptest")]
impl Arbitrary for Violation {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<String>(), any::<String>())
            .prop_map(|(field, reason)| Violation::new(field, reason))
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationError {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<Violation>(),
            prop::collection::vec(any::<Violation>(), 0..8),
        )
            .prop_map(|(first, rest)| ValidationError::with_rest(first, rest))
            .boxed()
    }
}
