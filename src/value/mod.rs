//! Untyped runtime values that codecs validate and transform.
//!
//! [`Value`] is the dynamic representation every codec consumes and produces:
//! a JSON-like tree whose children are shared behind [`Arc`]. Sharing is what
//! makes the decode fast path cheap: a codec that changes nothing hands the
//! caller the original allocation back (a refcount bump), and change detection
//! inside combinators is pointer equality via [`Arc::ptr_eq`], never a deep
//! comparison.
//!
//! # Examples
//!
//! ```
//! use codec_rail::Value;
//!
//! let v = Value::object([("a", 1), ("b", 2)]);
//! assert_eq!(v.to_string(), r#"{"a":1,"b":2}"#);
//!
//! let items = Value::array([1, 2, 3]);
//! assert_eq!(items.to_string(), "[1,2,3]");
//! ```

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write as _;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

#[cfg(feature = "serde")]
mod serde_impl;

/// Insertion-order-preserving map used for [`Value::Object`].
///
/// Iteration order is the order entries were inserted, which is what keeps
/// decode/encode output deterministic and faithful to the wire shape.
pub type ValueMap = IndexMap<String, Arc<Value>, FxBuildHasher>;

/// A dynamically typed value.
///
/// Children of arrays and objects are [`Arc`]-shared so that validation can
/// return unchanged subtrees without copying them and detect changes with
/// pointer equality.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use codec_rail::Value;
///
/// let shared = Arc::new(Value::from(1));
/// let reused = shared.clone();
/// assert!(Arc::ptr_eq(&shared, &reused));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Arc<Value>>),
    Object(ValueMap),
}

impl Value {
    /// Builds an object value from `(key, value)` pairs, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::Value;
    ///
    /// let v = Value::object([("name", "ada"), ("role", "admin")]);
    /// assert!(v.as_object().is_some());
    /// ```
    #[must_use]
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let iter = entries.into_iter();
        let mut map = ValueMap::with_capacity_and_hasher(iter.size_hint().0, FxBuildHasher::default());
        for (key, value) in iter {
            map.insert(key.into(), Arc::new(value.into()));
        }
        Self::Object(map)
    }

    /// Builds an array value from its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::Value;
    ///
    /// let v = Value::array(["a", "b"]);
    /// assert_eq!(v.as_array().map(|items| items.len()), Some(2));
    /// ```
    #[must_use]
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(items.into_iter().map(|item| Arc::new(item.into())).collect())
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice if this is a string value.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric value.
    #[must_use]
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean value.
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the backing map if this is an object value.
    #[must_use]
    #[inline]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the backing slice if this is an array value.
    #[must_use]
    #[inline]
    pub fn as_array(&self) -> Option<&[Arc<Value>]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u64> for Value {
    #[inline]
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<usize> for Value {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ValueMap> for Value {
    #[inline]
    fn from(value: ValueMap) -> Self {
        Self::Object(value)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(value: Vec<V>) -> Self {
        Self::array(value)
    }
}

/// Renders the value the way it would appear on the wire, compact JSON style.
///
/// This rendering is what validation error messages embed, so it favors
/// being short over being pretty: no whitespace, integral floats without a
/// fractional part.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write_number(f, *n),
            Self::String(s) => write_escaped(f, s),
            Self::Array(items) => {
                f.write_char('[')?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_char(']')
            }
            Self::Object(map) => {
                f.write_char('{')?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        f.write_char(',')?;
                    }
                    write_escaped(f, key)?;
                    f.write_char(':')?;
                    write!(f, "{}", value)?;
                }
                f.write_char('}')
            }
        }
    }
}

// Integral doubles inside the exact 2^53 range print as integers.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_finite() && n % 1.0 == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
