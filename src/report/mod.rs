//! Rendering of validation outcomes for humans.
//!
//! The core only guarantees that every error carries a complete, ordered
//! context chain; turning that chain into text lives here, out of the hot
//! path. [`PathReporter`] is the default renderer: one line per error, each
//! locating the offending value by its full path.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use codec_rail::prelude::*;
//! use codec_rail::report::PathReporter;
//!
//! let counts = record(string(), number());
//! let input = Arc::new(Value::object([("aa", "s")]));
//!
//! let messages = PathReporter::report(&counts.decode(&input));
//! assert_eq!(
//!     messages,
//!     [r#"Invalid value "s" supplied to : { [K in string]: number }/aa: number"#]
//! );
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::codec::Validated;
use crate::types::ValidationError;
use crate::validation::Validation;

/// Renders one error as `Invalid value <value> supplied to <path>`, or its
/// message override verbatim.
#[must_use]
pub fn describe(error: &ValidationError) -> String {
    error.description()
}

/// Reports every error of a failed validation, in accumulation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathReporter;

impl PathReporter {
    /// One message per error; a success reports a single `No errors!` line.
    #[must_use]
    pub fn report(result: &Validated) -> Vec<String> {
        match result {
            Validation::Valid(_) => alloc::vec![String::from("No errors!")],
            Validation::Invalid(errors) => errors.iter().map(describe).collect(),
        }
    }
}
