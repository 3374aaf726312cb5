//! Codec that narrows another codec with a predicate.

use alloc::string::String;
use alloc::sync::Arc;

use crate::codec::{failure, success, Codec, Validated};
use crate::context::Context;
use crate::value::Value;

/// Wraps an inner codec and additionally requires a predicate to hold on the
/// decoded value. The failure is reported at the current context, against the
/// refinement's own name.
///
/// Encoding is delegated to the inner codec, and so is the identity-encode
/// flag: refining a codec never changes its wire shape.
pub struct RefinementCodec {
    inner: Arc<dyn Codec>,
    name: String,
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl core::fmt::Debug for RefinementCodec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefinementCodec")
            .field("inner", &self.inner.name())
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Codec for RefinementCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, input: &Arc<Value>, context: &Context) -> Validated {
        self.inner.validate(input, context).and_then(|decoded| {
            if (self.predicate)(decoded.as_ref()) {
                success(decoded)
            } else {
                failure(input, context)
            }
        })
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        self.inner.encode(value)
    }

    fn is(&self, input: &Value) -> bool {
        self.inner.is(input) && (self.predicate)(input)
    }

    fn encode_is_identity(&self) -> bool {
        self.inner.encode_is_identity()
    }
}

/// Narrows `inner` with `predicate`, under an explicit `name`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use codec_rail::prelude::*;
///
/// let long_string = refine(string(), "long string", |v| {
///     v.as_str().is_some_and(|s| s.len() >= 2)
/// });
///
/// assert!(long_string.decode(&Arc::new(Value::from("aa"))).is_valid());
/// assert!(long_string.decode(&Arc::new(Value::from("a"))).is_invalid());
/// ```
pub fn refine<N, F>(inner: Arc<dyn Codec>, name: N, predicate: F) -> Arc<dyn Codec>
where
    N: Into<String>,
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(RefinementCodec {
        inner,
        name: name.into(),
        predicate: Arc::new(predicate),
    })
}
