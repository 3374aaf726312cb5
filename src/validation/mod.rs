//! The success/failure algebra shared by every codec.
//!
//! [`Validation`] is an applicative result: either a decoded value or one or
//! more accumulated errors. Unlike `Result`, combining two validations with
//! [`Validation::zip`] keeps **all** errors, which is what lets a combinator
//! report every bad entry of a mapping in one pass instead of stopping at the
//! first.
//!
//! # Key Components
//!
//! - [`Validation`] - a valid value or a non-empty error list
//! - Iterator adapters for traversing values and errors
//!
//! # Examples
//!
//! ```
//! use codec_rail::validation::Validation;
//!
//! let valid: Validation<String, i32> = Validation::Valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many(["bad key", "bad value"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
