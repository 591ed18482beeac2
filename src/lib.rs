//! # valerr
//!
//! Immutable values describing the *result* of validation: one or more
//! field-level [`Violation`]s bundled into a single [`ValidationError`].
//!
//! The crate does not validate anything itself. Whatever decides which rules
//! failed builds `Violation`s, and this crate carries them around, combines
//! them and renders them.
//!
//! ## Quick Example
//!
//! ```rust
//! use valerr::{ValidationError, Violation};
//!
//! let err = ValidationError::new(Violation::new("email", "invalid"))
//!     .append(Violation::new("password", "insecure"));
//!
//! assert_eq!(err.violations().len(), 2);
//! assert_eq!(
//!     err.render(),
//!     "ValidationError[ { 'email' : 'invalid' }, { 'password' : 'insecure' } ]"
//! );
//! assert_eq!(
//!     err.to_string(),
//!     "[ { 'email' : 'invalid' }, { 'password' : 'insecure' } ]"
//! );
//! ```
//!
//! ## As a generic error
//!
//! `ValidationError` implements [`std::error::Error`], so it travels through
//! `?` into `Box<dyn Error>` like any other error. Its `Display` output is the
//! diagnostic form returned by [`ValidationError::describe`].
//!
//! ```rust
//! use std::error::Error;
//! use valerr::{validation_error, Violation};
//!
//! fn register(email: &str) -> Result<(), Box<dyn Error>> {
//!     if !email.contains('@') {
//!         return Err(validation_error![Violation::new("email", "invalid")].into());
//!     }
//!     Ok(())
//! }
//!
//! let err = register("nope").unwrap_err();
//! assert_eq!(err.to_string(), "[ { 'email' : 'invalid' } ]");
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod testing;
pub mod validation_error;
pub mod violation;

// Re-exports
pub use error::InvalidArgument;
pub use validation_error::ValidationError;
pub use violation::Violation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::InvalidArgument;
    pub use crate::validation_error;
    pub use crate::validation_error::ValidationError;
    pub use crate::violation::Violation;
}
