//! Composable runtime validation and bidirectional transformation codecs for
//! untyped values.
//!
//! A [`Codec`] checks that an untyped [`Value`] conforms to a declared shape,
//! produces the decoded value on success, and can losslessly re-encode it
//! back to its wire shape. Shapes are built by composing codecs; there is no
//! schema language and no inference; what you compose is what gets checked.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `codec_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Decoding a dictionary
//!
//! ```
//! use std::sync::Arc;
//! use codec_rail::prelude::*;
//!
//! let counts = record(string(), number());
//! let input = Arc::new(Value::object([("a", 1), ("b", 2)]));
//!
//! let decoded = counts.decode(&input).into_value().unwrap();
//! // Nothing changed, so no new map was allocated.
//! assert!(Arc::ptr_eq(&decoded, &input));
//! ```
//!
//! ## Accumulated errors with exact paths
//!
//! ```
//! use std::sync::Arc;
//! use codec_rail::prelude::*;
//! use codec_rail::report::PathReporter;
//!
//! let counts = record(string(), number());
//! let input = Arc::new(Value::object([("aa", "s"), ("bb", "t")]));
//!
//! let messages = PathReporter::report(&counts.decode(&input));
//! assert_eq!(messages.len(), 2);
//! assert_eq!(
//!     messages[0],
//!     r#"Invalid value "s" supplied to : { [K in string]: number }/aa: number"#
//! );
//! ```
//!
//! ## Identity encode
//!
//! ```
//! use codec_rail::prelude::*;
//!
//! let counts = record(string(), number());
//! // Both sides encode as identity, so the whole dictionary does too and
//! // enclosing combinators may skip it outright.
//! assert!(counts.encode_is_identity());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The codec contract, leaf codecs, and combinators
pub mod codec;
/// Validation context frames and path tracking
pub mod context;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Human-readable rendering of validation failures
pub mod report;
/// Validation error types
pub mod types;
/// Validation algebra with error accumulation
pub mod validation;
/// Untyped runtime values
pub mod value;

pub use codec::*;
pub use context::*;
pub use types::*;
pub use validation::*;
pub use value::*;
