//! Codec for membership in a finite set of string keys.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt::Write as _;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::codec::{failure, success, Codec, Validated};
use crate::context::Context;
use crate::value::Value;

/// Accepts any string drawn from a fixed key set; identity on both
/// directions.
///
/// The name is the union of the quoted members in insertion order, e.g.
/// `"foo" | "bar"`. Membership checks are O(1) against the backing set and
/// never allocate.
#[derive(Debug, Clone)]
pub struct KeyOfCodec {
    keys: IndexSet<String, FxBuildHasher>,
    name: String,
}

impl KeyOfCodec {
    /// The accepted keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// `true` when `key` is a member of the set.
    #[must_use]
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

impl Codec for KeyOfCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, input: &Arc<Value>, context: &Context) -> Validated {
        match &**input {
            Value::String(s) if self.keys.contains(s.as_str()) => success(input.clone()),
            _ => failure(input, context),
        }
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        value.clone()
    }

    fn is(&self, input: &Value) -> bool {
        match input {
            Value::String(s) => self.keys.contains(s.as_str()),
            _ => false,
        }
    }

    fn encode_is_identity(&self) -> bool {
        true
    }
}

/// Codec accepting any of `keys`.
///
/// # Examples
///
/// ```
/// use codec_rail::prelude::*;
///
/// let codec = keyof(["foo", "bar"]);
/// assert_eq!(codec.name(), r#""foo" | "bar""#);
/// assert!(codec.is(&Value::from("bar")));
/// assert!(!codec.is(&Value::from("baz")));
/// ```
pub fn keyof<I, S>(keys: I) -> Arc<dyn Codec>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let keys: IndexSet<String, FxBuildHasher> = keys.into_iter().map(Into::into).collect();
    let mut name = String::new();
    for (index, key) in keys.iter().enumerate() {
        if index > 0 {
            name.push_str(" | ");
        }
        let _ = write!(name, "{:?}", key);
    }
    Arc::new(KeyOfCodec { keys, name })
}
