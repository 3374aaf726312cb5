//! Codec for a single constant value.

use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::codec::{failure, success, Codec, Validated};
use crate::context::Context;
use crate::value::Value;

/// Accepts exactly one constant; decodes and encodes it unchanged.
///
/// The name is the wire rendering of the constant, so `literal("foo")` is
/// named `"foo"`, quotes included, which is what shows up when the literal
/// is used as a restricted key domain and an unexpected key is reported.
#[derive(Debug, Clone)]
pub struct LiteralCodec {
    value: Arc<Value>,
    name: String,
}

impl LiteralCodec {
    /// The constant this codec accepts.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Codec for LiteralCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, input: &Arc<Value>, context: &Context) -> Validated {
        if **input == *self.value {
            success(input.clone())
        } else {
            failure(input, context)
        }
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        value.clone()
    }

    fn is(&self, input: &Value) -> bool {
        *input == *self.value
    }

    fn encode_is_identity(&self) -> bool {
        true
    }
}

/// Codec accepting exactly `value`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use codec_rail::prelude::*;
///
/// let foo = literal("foo");
/// assert_eq!(foo.name(), r#""foo""#);
/// assert!(foo.is(&Value::from("foo")));
/// assert!(!foo.is(&Value::from("bar")));
/// ```
pub fn literal<V: Into<Value>>(value: V) -> Arc<dyn Codec> {
    let value = Arc::new(value.into());
    let name = value.to_string();
    Arc::new(LiteralCodec { value, name })
}
