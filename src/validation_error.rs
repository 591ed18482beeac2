//! Aggregate of one or more violations
//!
//! This module provides [`ValidationError`], an immutable, ordered, non-empty
//! list of [`Violation`]s. It is built from at least one violation and grows
//! only by [`append`](ValidationError::append), which returns a new value and
//! leaves the receiver untouched.
//!
//! # Examples
//!
//! ## Building up an error
//!
//! ```
//! use valerr::{ValidationError, Violation};
//!
//! let first = ValidationError::new(Violation::new("email", "invalid"));
//! let second = first.append(Violation::new("name", "empty"));
//!
//! assert_eq!(first.len(), 1);
//! assert_eq!(second.len(), 2);
//! assert_eq!(second.describe(), "[ { 'email' : 'invalid' }, { 'name' : 'empty' } ]");
//! ```
//!
//! ## Variadic construction
//!
//! ```
//! use valerr::{validation_error, Violation};
//!
//! let err = validation_error![
//!     Violation::new("email", "invalid"),
//!     ("password", "insecure"),
//! ];
//!
//! assert_eq!(
//!     err.render(),
//!     "ValidationError[ { 'email' : 'invalid' }, { 'password' : 'insecure' } ]"
//! );
//! ```
//!
//! ## Two renderings
//!
//! [`render`](ValidationError::render) prefixes the type name and is meant for
//! logs. [`describe`](ValidationError::describe), which is also the `Display`
//! output, has no prefix and is what generic error consumers see. Neither
//! escapes quotes inside field names or reasons.

use std::fmt;

use crate::error::InvalidArgument;
use crate::violation::Violation;

/// An immutable, non-empty, ordered collection of [`Violation`]s.
///
/// Insertion order is preserved by every operation. There is no way to obtain
/// mutable access to the stored violations.
///
/// # Example
///
/// ```
/// use valerr::{ValidationError, Violation};
///
/// let err = ValidationError::with_rest(
///     Violation::new("email", "invalid"),
///     vec![Violation::new("password", "insecure")],
/// );
///
/// let fields: Vec<_> = err.iter().map(Violation::field).collect();
/// assert_eq!(fields, ["email", "password"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    // never empty
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Create an aggregate holding a single violation.
    ///
    /// # Example
    ///
    /// ```
    /// use valerr::{ValidationError, Violation};
    ///
    /// let err = ValidationError::new(Violation::new("email", "invalid"));
    /// assert_eq!(err.describe(), "[ { 'email' : 'invalid' } ]");
    /// ```
    pub fn new(first: Violation) -> Self {
        ValidationError {
            violations: vec![first],
        }
    }

    /// Create an aggregate from `first` followed by `rest`, in order.
    ///
    /// `rest` may be empty.
    ///
    /// # Example
    ///
    /// ```
    /// use valerr::{ValidationError, Violation};
    ///
    /// let err = ValidationError::with_rest(Violation::new("a", "x"), Vec::new());
    /// assert_eq!(err.len(), 1);
    /// ```
    pub fn with_rest<I>(first: Violation, rest: I) -> Self
    where
        I: IntoIterator<Item = Violation>,
    {
        let rest = rest.into_iter();
        let mut violations = Vec::with_capacity(1 + rest.size_hint().0);
        violations.push(first);
        violations.extend(rest);
        ValidationError { violations }
    }

    /// Try to create an aggregate from a `Vec`.
    ///
    /// Returns [`InvalidArgument::NoViolations`] if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use valerr::{InvalidArgument, ValidationError, Violation};
    ///
    /// let err = ValidationError::from_vec(vec![Violation::new("email", "invalid")]).unwrap();
    /// assert_eq!(err.len(), 1);
    ///
    /// let empty = ValidationError::from_vec(Vec::new());
    /// assert_eq!(empty, Err(InvalidArgument::NoViolations));
    /// ```
    pub fn from_vec(violations: Vec<Violation>) -> Result<Self, InvalidArgument> {
        if violations.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("rejected validation error with no violations");
            return Err(InvalidArgument::NoViolations);
        }
        Ok(ValidationError { violations })
    }

    /// The stored violations, in insertion order. Never empty.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of violations. Always >= 1.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always returns `false`.
    ///
    /// Present to satisfy clippy's `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first violation (always present).
    pub fn first(&self) -> &Violation {
        // `violations` is non-empty by construction
        &self.violations[0]
    }

    /// Iterate over the violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Consume and return the violations as a `Vec`.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Return a new aggregate with `violation` added at the end.
    ///
    /// The receiver is left as it was; the new value owns a fresh copy of the
    /// sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use valerr::{ValidationError, Violation};
    ///
    /// let a = ValidationError::new(Violation::new("email", "empty"));
    /// let b = a.append(Violation::new("password", "insecure"));
    ///
    /// assert_eq!(a.len(), 1);
    /// assert_eq!(b.len(), 2);
    /// assert_eq!(b.violations()[..1], a.violations()[..]);
    /// ```
    #[must_use = "append returns a new ValidationError and leaves the receiver unchanged"]
    pub fn append(&self, violation: Violation) -> Self {
        let mut violations = Vec::with_capacity(self.violations.len() + 1);
        violations.extend_from_slice(&self.violations);
        violations.push(violation);
        ValidationError { violations }
    }

    /// Display form: `ValidationError[ <v1>, <v2>, ... ]`.
    ///
    /// # Example
    ///
    /// ```
    /// use valerr::{validation_error, Violation};
    ///
    /// let err = validation_error![Violation::new("email", "invalid")];
    /// assert_eq!(err.render(), "ValidationError[ { 'email' : 'invalid' } ]");
    /// ```
    pub fn render(&self) -> String {
        format!("ValidationError{}", self)
    }

    /// Diagnostic form: `[ <v1>, <v2>, ... ]`.
    ///
    /// This is also what `Display` (and therefore the `Error` message) shows.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        write!(f, " ]")
    }
}

impl std::error::Error for ValidationError {}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        ValidationError::new(violation)
    }
}

impl TryFrom<Vec<Violation>> for ValidationError {
    type Error = InvalidArgument;

    fn try_from(violations: Vec<Violation>) -> Result<Self, Self::Error> {
        ValidationError::from_vec(violations)
    }
}

impl<'a> IntoIterator for &'a ValidationError {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Build a [`ValidationError`] from one or more violations.
///
/// Each argument is anything `Violation::from` accepts, so `(field, reason)`
/// tuples work alongside `Violation` values. Calling it with no arguments does
/// not compile.
///
/// # Example
///
/// ```
/// use valerr::{validation_error, Violation};
///
/// let err = validation_error![
///     ("email", "invalid"),
///     Violation::new("password", "insecure"),
///     ("name", "empty"),
/// ];
/// assert_eq!(err.len(), 3);
/// ```
///
/// ```compile_fail
/// let err = valerr::validation_error![];
/// ```
#[macro_export]
macro_rules! validation_error {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let rest: ::std::vec::Vec<$crate::Violation> =
            ::std::vec![$($crate::Violation::from($rest)),*];
        $crate::ValidationError::with_rest($crate::Violation::from($first), rest)
    }};
}
