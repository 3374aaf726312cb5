//! Error types shared by every codec.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use codec_rail::{Context, ValidationError, Value};
//!
//! let input = Arc::new(Value::from("s"));
//! let err = ValidationError::new(&input, Context::root("number", &input));
//! assert_eq!(err.to_string(), r#"Invalid value "s" supplied to : number"#);
//! ```
use smallvec::SmallVec;

pub mod validation_error;

pub use validation_error::*;

/// SmallVec-backed collection used for accumulating validation errors.
///
/// Uses inline storage for one element so the common single-error failure
/// never touches the heap.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Accumulated [`ValidationError`]s of one failed validation. Never empty.
pub type Errors = ErrorVec<ValidationError>;
