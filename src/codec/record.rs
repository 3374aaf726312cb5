//! Dictionary combinator: composes a key codec and a value codec into a codec
//! over whole mappings.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use rustc_hash::FxBuildHasher;

use crate::codec::{failure, key_text, success, Codec, Validated};
use crate::context::Context;
use crate::types::Errors;
use crate::validation::Validation;
use crate::value::{Value, ValueMap};

/// Codec over key-value mappings whose keys are governed by a *domain* codec
/// and values by a *codomain* codec.
///
/// Validation walks every entry, running the key through the domain and the
/// value through the codomain, each under a context extended by one frame.
/// Errors from independent entries accumulate, so one bad entry does not
/// hide another, and within one entry the key error is reported before the
/// value error. Extra or missing keys are never an error by themselves: an entry
/// only fails when its key or value fails the respective sub-codec.
///
/// Two optimizations fall out of the contract:
///
/// - **Reference preservation.** When every decoded key equals its raw key
///   and every decoded value is pointer-identical to its raw value, decoding
///   returns the original input allocation instead of building a new map.
///   A single differing entry forces one fresh map for the whole result.
/// - **Identity encode.** When both sub-codecs encode as identity, the
///   combinator's encode is itself the identity function, observable through
///   [`Codec::encode_is_identity`], so enclosing combinators can skip the
///   whole subtree.
///
/// The shape gate rejects anything that is not a plain key-value mapping.
/// Sequences are the one exception: when the codomain is the passthrough
/// codec ([`Codec::is_passthrough`]), a sequence reads as a mapping from
/// stringified indices to elements. A structural codomain keeps rejecting
/// sequences rather than silently coercing indices into meaningless keys.
pub struct RecordCodec {
    name: String,
    domain: Arc<dyn Codec>,
    codomain: Arc<dyn Codec>,
    encode_identity: bool,
}

impl RecordCodec {
    /// The key codec.
    #[must_use]
    #[inline]
    pub fn domain(&self) -> &Arc<dyn Codec> {
        &self.domain
    }

    /// The value codec.
    #[must_use]
    #[inline]
    pub fn codomain(&self) -> &Arc<dyn Codec> {
        &self.codomain
    }

    fn validate_entries<I>(&self, input: &Arc<Value>, context: &Context, entries: I) -> Validated
    where
        I: Iterator<Item = (String, Arc<Value>)>,
    {
        let mut errors = Errors::new();
        let mut decoded: Vec<(String, Arc<Value>)> = Vec::with_capacity(entries.size_hint().0);
        let mut changed = false;

        for (key, value) in entries {
            let raw_key = Arc::new(Value::String(key.clone()));
            let key_result = self
                .domain
                .validate(&raw_key, &context.descend(key.as_str(), self.domain.name(), &raw_key));
            let value_result = self
                .codomain
                .validate(&value, &context.descend(key.as_str(), self.codomain.name(), &value));

            // zip keeps the domain error ahead of the codomain error.
            match key_result.zip(value_result) {
                Validation::Valid((decoded_key, decoded_value)) => {
                    let decoded_key = key_text(&decoded_key);
                    if decoded_key != key || !Arc::ptr_eq(&decoded_value, &value) {
                        changed = true;
                    }
                    decoded.push((decoded_key, decoded_value));
                }
                Validation::Invalid(entry_errors) => errors.extend(entry_errors),
            }
        }

        if !errors.is_empty() {
            return Validation::Invalid(errors);
        }
        if !changed {
            return success(input.clone());
        }
        let mut rebuilt =
            ValueMap::with_capacity_and_hasher(decoded.len(), FxBuildHasher::default());
        for (key, value) in decoded {
            rebuilt.insert(key, value);
        }
        success(Arc::new(Value::Object(rebuilt)))
    }
}

impl Codec for RecordCodec {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, input: &Arc<Value>, context: &Context) -> Validated {
        match &**input {
            Value::Object(map) => self.validate_entries(
                input,
                context,
                map.iter().map(|(key, value)| (key.clone(), value.clone())),
            ),
            Value::Array(items) if self.codomain.is_passthrough() => self.validate_entries(
                input,
                context,
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item.clone())),
            ),
            _ => failure(input, context),
        }
    }

    fn encode(&self, value: &Arc<Value>) -> Arc<Value> {
        if self.encode_identity {
            return value.clone();
        }
        match &**value {
            Value::Object(map) => {
                let mut encoded =
                    ValueMap::with_capacity_and_hasher(map.len(), FxBuildHasher::default());
                for (key, entry) in map {
                    let raw_key = Arc::new(Value::String(key.clone()));
                    encoded.insert(
                        key_text(&self.domain.encode(&raw_key)),
                        self.codomain.encode(entry),
                    );
                }
                Arc::new(Value::Object(encoded))
            }
            // Sequences only decode under a passthrough codomain; encoding one
            // through a non-identity domain yields the index-keyed mapping.
            Value::Array(items) => {
                let mut encoded =
                    ValueMap::with_capacity_and_hasher(items.len(), FxBuildHasher::default());
                for (index, item) in items.iter().enumerate() {
                    let raw_key = Arc::new(Value::String(index.to_string()));
                    encoded.insert(
                        key_text(&self.domain.encode(&raw_key)),
                        self.codomain.encode(item),
                    );
                }
                Arc::new(Value::Object(encoded))
            }
            _ => value.clone(),
        }
    }

    fn is(&self, input: &Value) -> bool {
        match input {
            Value::Object(map) => map.iter().all(|(key, value)| {
                self.domain.is(&Value::String(key.clone())) && self.codomain.is(value.as_ref())
            }),
            Value::Array(items) => {
                self.codomain.is_passthrough()
                    && items.iter().enumerate().all(|(index, item)| {
                        self.domain.is(&Value::String(index.to_string()))
                            && self.codomain.is(item.as_ref())
                    })
            }
            _ => false,
        }
    }

    fn encode_is_identity(&self) -> bool {
        self.encode_identity
    }
}

/// Dictionary codec from `domain` keys to `codomain` values, with the default
/// mapped-type name `{ [K in <domain>]: <codomain> }`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use codec_rail::prelude::*;
///
/// let counts = record(string(), number());
/// assert_eq!(counts.name(), "{ [K in string]: number }");
///
/// let input = Arc::new(Value::object([("a", 1)]));
/// let decoded = counts.decode(&input).into_value().unwrap();
/// // Nothing changed, so the original allocation comes back.
/// assert!(Arc::ptr_eq(&decoded, &input));
/// ```
pub fn record(domain: Arc<dyn Codec>, codomain: Arc<dyn Codec>) -> Arc<dyn Codec> {
    let name = format!("{{ [K in {}]: {} }}", domain.name(), codomain.name());
    record_named(domain, codomain, name)
}

/// Dictionary codec with an explicit name.
///
/// # Examples
///
/// ```
/// use codec_rail::prelude::*;
///
/// let counts = record_named(string(), number(), "Counts");
/// assert_eq!(counts.name(), "Counts");
/// ```
pub fn record_named<N: Into<String>>(
    domain: Arc<dyn Codec>,
    codomain: Arc<dyn Codec>,
    name: N,
) -> Arc<dyn Codec> {
    let encode_identity = domain.encode_is_identity() && codomain.encode_is_identity();
    Arc::new(RecordCodec {
        name: name.into(),
        domain,
        codomain,
        encode_identity,
    })
}
