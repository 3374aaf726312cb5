//! Validation context: the chain of frames from the decoding root down to the
//! value currently being checked.
//!
//! Every recursive descent into a sub-value appends one [`ContextFrame`] with
//! the key that was followed, the name of the codec expected there, and the
//! raw value found. A failing codec captures the chain in its error, so the
//! caller can render an exact location such as
//! `: { [K in string]: number }/aa: number`.
//!
//! Contexts are extended by copy, never mutated in place: sibling branches of
//! one validation each own their chain, and concurrent validations through a
//! shared codec cannot interfere.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use codec_rail::{Context, Value};
//!
//! let input = Arc::new(Value::object([("a", 1)]));
//! let root = Context::root("{ [K in string]: number }", &input);
//! let entry = root.descend("a", "number", &Arc::new(Value::from(1)));
//!
//! assert_eq!(entry.len(), 2);
//! assert_eq!(entry.path(), ": { [K in string]: number }/a: number");
//! ```

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Write as _;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One step of a validation descent.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ContextFrame {
    /// Key followed to reach the value: an object key or a stringified index.
    /// Empty for the root frame.
    pub key: String,
    /// Name of the codec the value was expected to satisfy.
    pub type_name: String,
    /// The raw value found at this position.
    pub actual: Arc<Value>,
}

/// Ordered root-to-leaf chain of [`ContextFrame`]s.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    frames: Vec<ContextFrame>,
}

impl Context {
    /// Starts a chain at the top-level input, labeled with the decoding
    /// codec's name. The root frame carries an empty key.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use codec_rail::{Context, Value};
    ///
    /// let input = Arc::new(Value::Null);
    /// let context = Context::root("string", &input);
    /// assert_eq!(context.len(), 1);
    /// ```
    pub fn root<N: Into<String>>(type_name: N, input: &Arc<Value>) -> Self {
        Self {
            frames: alloc::vec![ContextFrame {
                key: String::new(),
                type_name: type_name.into(),
                actual: input.clone(),
            }],
        }
    }

    /// Returns a new chain extended by one frame.
    ///
    /// The receiver is left untouched; each recursive validation branch gets
    /// its own copy.
    pub fn descend<K, N>(&self, key: K, type_name: N, actual: &Arc<Value>) -> Self
    where
        K: Into<String>,
        N: Into<String>,
    {
        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        frames.extend(self.frames.iter().cloned());
        frames.push(ContextFrame {
            key: key.into(),
            type_name: type_name.into(),
            actual: actual.clone(),
        });
        Self { frames }
    }

    /// All frames, root first.
    #[must_use]
    #[inline]
    pub fn frames(&self) -> &[ContextFrame] {
        &self.frames
    }

    /// Number of frames in the chain.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when the chain holds no frames.
    ///
    /// Chains built through [`Context::root`] always hold at least one.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The deepest frame, where validation actually failed or succeeded.
    #[must_use]
    #[inline]
    pub fn last(&self) -> Option<&ContextFrame> {
        self.frames.last()
    }

    /// Renders the chain as `key: type` pairs joined by `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use codec_rail::{Context, Value};
    ///
    /// let input = Arc::new(Value::object([("aa", "s")]));
    /// let context = Context::root("{ [K in string]: number }", &input)
    ///     .descend("aa", "number", &Arc::new(Value::from("s")));
    /// assert_eq!(context.path(), ": { [K in string]: number }/aa: number");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        let mut rendered = String::new();
        for (index, frame) in self.frames.iter().enumerate() {
            if index > 0 {
                rendered.push('/');
            }
            let _ = write!(rendered, "{}: {}", frame.key, frame.type_name);
        }
        rendered
    }
}
