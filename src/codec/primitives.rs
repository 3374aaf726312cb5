//! Leaf codecs for scalar and permissive shapes.
//!
//! All of these decode and encode as identity; what varies is the guard.
//! [`unknown`] and [`any`] both accept every input; the difference is that
//! [`any`] is the designated passthrough codec ([`Codec::is_passthrough`]),
//! which is what lets a dictionary built over it also accept sequences.

use alloc::sync::Arc;

use crate::codec::{failure, success, Codec, Validated};
use crate::context::Context;
use crate::value::Value;

/// Accepts exactly string values. Name: `string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl Codec for StringCodec {
    fn name(&self) -> &str {
        "string"
    }

    fn validate(&self, input: &Arc<Value>, context: &Context) -> Validated {
        match &**input {
            Value::String(_) => success(input.clone()),
            _ => failure(input, context),
        }
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        value.clone()
    }

    fn is(&self, input: &Value) -> bool {
        matches!(input, Value::String(_))
    }

    fn encode_is_identity(&self) -> bool {
        true
    }
}

/// Accepts exactly numeric values. Name: `number`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberCodec;

impl Codec for NumberCodec {
    fn name(&self) -> &str {
        "number"
    }

    fn validate(&self, input: &Arc<Value>, context: &Context) -> Validated {
        match &**input {
            Value::Number(_) => success(input.clone()),
            _ => failure(input, context),
        }
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        value.clone()
    }

    fn is(&self, input: &Value) -> bool {
        matches!(input, Value::Number(_))
    }

    fn encode_is_identity(&self) -> bool {
        true
    }
}

/// Accepts exactly boolean values. Name: `boolean`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanCodec;

impl Codec for BooleanCodec {
    fn name(&self) -> &str {
        "boolean"
    }

    fn validate(&self, input: &Arc<Value>, context: &Context) -> Validated {
        match &**input {
            Value::Bool(_) => success(input.clone()),
            _ => failure(input, context),
        }
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        value.clone()
    }

    fn is(&self, input: &Value) -> bool {
        matches!(input, Value::Bool(_))
    }

    fn encode_is_identity(&self) -> bool {
        true
    }
}

/// Accepts every input without claiming any structure. Name: `unknown`.
///
/// Not a passthrough codec: a dictionary whose codomain is `unknown` still
/// rejects sequence inputs, because `unknown` makes no promise that would
/// justify reading an index as a key.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownCodec;

impl Codec for UnknownCodec {
    fn name(&self) -> &str {
        "unknown"
    }

    fn validate(&self, input: &Arc<Value>, _context: &Context) -> Validated {
        success(input.clone())
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        value.clone()
    }

    fn is(&self, _input: &Value) -> bool {
        true
    }

    fn encode_is_identity(&self) -> bool {
        true
    }
}

/// The designated fully-permissive passthrough codec. Name: `any`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCodec;

impl Codec for AnyCodec {
    fn name(&self) -> &str {
        "any"
    }

    fn validate(&self, input: &Arc<Value>, _context: &Context) -> Validated {
        success(input.clone())
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        value.clone()
    }

    fn is(&self, _input: &Value) -> bool {
        true
    }

    fn encode_is_identity(&self) -> bool {
        true
    }

    fn is_passthrough(&self) -> bool {
        true
    }
}

/// The `string` codec.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use codec_rail::prelude::*;
///
/// let codec = string();
/// assert!(codec.decode(&Arc::new(Value::from("s"))).is_valid());
/// assert!(codec.decode(&Arc::new(Value::from(1))).is_invalid());
/// ```
pub fn string() -> Arc<dyn Codec> {
    Arc::new(StringCodec)
}

/// The `number` codec.
pub fn number() -> Arc<dyn Codec> {
    Arc::new(NumberCodec)
}

/// The `boolean` codec.
pub fn boolean() -> Arc<dyn Codec> {
    Arc::new(BooleanCodec)
}

/// The `unknown` codec: accepts everything, promises nothing.
pub fn unknown() -> Arc<dyn Codec> {
    Arc::new(UnknownCodec)
}

/// The `any` codec: accepts everything and relaxes the shape gate of
/// dictionaries built over it.
pub fn any() -> Arc<dyn Codec> {
    Arc::new(AnyCodec)
}
