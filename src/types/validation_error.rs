use alloc::string::String;
use alloc::sync::Arc;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::value::Value;

/// A single validation failure: the offending raw value plus the context
/// chain leading to it.
///
/// The default rendering is `Invalid value <value> supplied to <path>`; a
/// codec can override it wholesale with [`ValidationError::with_message`].
/// There is exactly one error kind: codecs have no fallible internals, so
/// everything that can go wrong is a value failing a check somewhere along a
/// path.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use codec_rail::{Context, ValidationError, Value};
///
/// let input = Arc::new(Value::Null);
/// let err = ValidationError::new(&input, Context::root("string", &input))
///     .with_message("expected a string, found null");
/// assert_eq!(err.to_string(), "expected a string, found null");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The raw value that failed.
    pub value: Arc<Value>,
    /// Root-to-leaf chain at the failure point.
    pub context: Context,
    /// Optional override for the rendered message.
    pub message: Option<String>,
}

impl ValidationError {
    /// Creates an error for `value` failing at `context`.
    #[inline]
    pub fn new(value: &Arc<Value>, context: Context) -> Self {
        Self { value: value.clone(), context, message: None }
    }

    /// Replaces the default rendering with a fixed message.
    #[inline]
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The human-readable description: the override if present, otherwise
    /// the offending value and its full path.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => alloc::format!(
                "Invalid value {} supplied to {}",
                self.value,
                self.context.path()
            ),
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(
                f,
                "Invalid value {} supplied to {}",
                self.value,
                self.context.path()
            ),
        }
    }
}

impl core::error::Error for ValidationError {}
