//! Convenience re-exports for common usage patterns.
//!
//! This prelude provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use codec_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Codec constructors**: [`string`], [`number`], [`boolean`], [`unknown`],
//!   [`any`], [`literal`], [`keyof`], [`refine`], [`record`], [`record_named`]
//! - **Types**: [`Value`], [`ValueMap`], [`Context`], [`ContextFrame`],
//!   [`ValidationError`], [`Errors`], [`Validated`], [`Validation`]
//! - **The contract**: [`Codec`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use codec_rail::prelude::*;
//!
//! let scores = record(string(), number());
//! let input = Arc::new(Value::object([("ada", 10)]));
//!
//! assert!(scores.is(&input));
//! let decoded = scores.decode(&input).into_value().unwrap();
//! assert!(Arc::ptr_eq(&decoded, &input));
//! ```
//!
//! ## Restricted key domains
//!
//! ```
//! use std::sync::Arc;
//! use codec_rail::prelude::*;
//!
//! let flags = record(keyof(["read", "write"]), boolean());
//! let bad = Arc::new(Value::object([("exec", true)]));
//! assert!(flags.decode(&bad).is_invalid());
//! ```

// The contract and its result type
pub use crate::codec::{Codec, Validated};

// Codec constructors
pub use crate::codec::{
    any, boolean, keyof, literal, number, record, record_named, refine, string, unknown,
};

// Core types
pub use crate::context::{Context, ContextFrame};
pub use crate::types::{Errors, ValidationError};
pub use crate::validation::Validation;
pub use crate::value::{Value, ValueMap};
