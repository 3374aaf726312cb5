//! The codec contract and the combinators built on it.
//!
//! A [`Codec`] is a named, immutable, composable unit that can
//!
//! - **validate** an untyped input under a [`Context`], producing a
//!   [`Validated`] result,
//! - **decode** (validate from a fresh root context),
//! - **encode** an already-decoded value back to its wire shape, and
//! - **guard** (`is`): answer whether decoding would succeed without
//!   building any error machinery.
//!
//! Codecs hold no per-call state: one instance can be shared behind an `Arc`
//! and used from any number of threads at once. Combinators therefore take
//! their sub-codecs as `Arc<dyn Codec>` and never branch on what kind of
//! codec they were given. Everything they need is in the contract, including
//! the two capability flags [`Codec::encode_is_identity`] (lets whole
//! encoding subtrees be skipped) and [`Codec::is_passthrough`] (marks the
//! fully-permissive codec).
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use codec_rail::prelude::*;
//!
//! let ages = record(string(), number());
//! let input = Arc::new(Value::object([("ada", 36)]));
//!
//! let decoded = ages.decode(&input);
//! assert!(decoded.is_valid());
//! ```

use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::context::Context;
use crate::types::ValidationError;
use crate::validation::Validation;
use crate::value::Value;

pub mod keyof;
pub mod literal;
pub mod primitives;
pub mod record;
pub mod refinement;

pub use keyof::{keyof, KeyOfCodec};
pub use literal::{literal, LiteralCodec};
pub use primitives::{
    any, boolean, number, string, unknown, AnyCodec, BooleanCodec, NumberCodec, StringCodec,
    UnknownCodec,
};
pub use record::{record, record_named, RecordCodec};
pub use refinement::{refine, RefinementCodec};

/// Result of validating one value: the decoded value or accumulated errors.
pub type Validated = Validation<ValidationError, Arc<Value>>;

/// A named, bidirectional validator/transformer over untyped values.
///
/// Implementations must be pure: `validate` may depend only on its arguments
/// and the codec's own immutable configuration, and none of the operations
/// may panic on malformed input; failures are always reported through the
/// returned [`Validated`].
pub trait Codec: Send + Sync {
    /// Human-readable type descriptor, used in error paths and in the default
    /// names of combinators that embed this codec.
    fn name(&self) -> &str;

    /// Checks `input` and produces the decoded value, labeling any errors
    /// with `context`.
    fn validate(&self, input: &Arc<Value>, context: &Context) -> Validated;

    /// Transforms an already-decoded value back to its wire shape.
    ///
    /// Total over values this codec has decoded; it does not re-validate its
    /// argument.
    fn encode(&self, value: &Arc<Value>) -> Arc<Value>;

    /// Returns `true` exactly when [`Codec::validate`] would succeed on
    /// `input`, without constructing any errors.
    fn is(&self, input: &Value) -> bool;

    /// Validates `input` under a fresh root context named after this codec.
    fn decode(&self, input: &Arc<Value>) -> Validated {
        let result = self.validate(input, &Context::root(self.name(), input));
        #[cfg(feature = "tracing")]
        if result.is_invalid() {
            tracing::trace!(codec = self.name(), "decode failed");
        }
        result
    }

    /// `true` when this codec's encode observably returns its input
    /// unchanged.
    ///
    /// Combinators consult the flag instead of comparing function pointers:
    /// when every sub-codec encodes as identity, the combinator's own encode
    /// is identity too and whole subtrees of encoding work are skipped.
    fn encode_is_identity(&self) -> bool {
        false
    }

    /// `true` only for the designated fully-permissive codec (see
    /// [`any`]), whose guard accepts every input.
    ///
    /// A dictionary whose codomain is passthrough also accepts sequences,
    /// reading them as mappings keyed by stringified indices; a structural
    /// codomain keeps rejecting them.
    fn is_passthrough(&self) -> bool {
        false
    }
}

/// Builds a successful [`Validated`] result.
#[inline]
pub fn success(value: Arc<Value>) -> Validated {
    Validation::valid(value)
}

/// Builds a failed [`Validated`] result for `value` at `context`.
#[inline]
pub fn failure(value: &Arc<Value>, context: &Context) -> Validated {
    Validation::invalid(ValidationError::new(value, context.clone()))
}

/// Builds a failed [`Validated`] result with an explicit message.
#[inline]
pub fn failure_with<S: Into<String>>(value: &Arc<Value>, context: &Context, message: S) -> Validated {
    Validation::invalid(ValidationError::new(value, context.clone()).with_message(message))
}

// Object keys decoded by a domain codec are expected to be strings; anything
// else is stringified through the wire rendering so encode/decode stay total.
pub(crate) fn key_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
