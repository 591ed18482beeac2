//! A single failed validation rule
//!
//! A [`Violation`] pairs the name of the offending field with a human-readable
//! reason. It is a plain value: constructed once, never mutated, compared
//! structurally.
//!
//! # Examples
//!
//! ```
//! use valerr::Violation;
//!
//! let v = Violation::new("email", "invalid");
//! assert_eq!(v.field(), "email");
//! assert_eq!(v.reason(), "invalid");
//! assert_eq!(v.render(), "{ 'email' : 'invalid' }");
//! ```
//!
//! # Known limitation
//!
//! Rendering substitutes `field` and `reason` verbatim. Single quotes inside
//! either value are not escaped, so `{ 'a' : 'it's' }` is a possible and
//! ambiguous output. Consumers already match on this exact shape, so it is
//! kept as is.

use std::fmt;

/// One field-level validation failure.
///
/// No checks are made on the content of `field` or `reason`; empty strings
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    field: String,
    reason: String,
}

impl Violation {
    /// Create a violation for `field` explaining `reason`.
    ///
    /// # Example
    ///
    /// ```
    /// use valerr::Violation;
    ///
    /// let v = Violation::new("password", String::from("insecure"));
    /// assert_eq!(v.reason(), "insecure");
    /// ```
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Violation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the field that broke a rule.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Why the rule was broken.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Render as `{ '<field>' : '<reason>' }`.
    ///
    /// Same text as the `Display` impl.
    ///
    /// # Example
    ///
    /// ```
    /// use valerr::Violation;
    ///
    /// let v = Violation::new("name", "empty");
    /// assert_eq!(v.render(), "{ 'name' : 'empty' }");
    /// assert_eq!(v.render(), v.to_string());
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Consume and return the owned `(field, reason)` pair.
    pub fn into_parts(self) -> (String, String) {
        (self.field, self.reason)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ '{}' : '{}' }}", self.field, self.reason)
    }
}

impl<F, R> From<(F, R)> for Violation
where
    F: Into<String>,
    R: Into<String>,
{
    fn from((field, reason): (F, R)) -> Self {
        Violation::new(field, reason)
    }
}
