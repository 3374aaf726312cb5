use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Applicative-style validation that accumulates many errors instead of failing fast.
///
/// `Validation<E, A>` represents a check that either succeeded with a value of
/// type `A` or failed with one or more errors of type `E`. The two states are
/// exhaustive and mutually exclusive; there is no partial success. Codecs use
/// it so that independent entries of a composite value each contribute their
/// own errors to a single failure.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when `E` and `A` do.
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `A` - The success value type
///
/// # Variants
///
/// * `Valid(A)` - Contains a decoded value
/// * `Invalid(ErrorVec<E>)` - Contains one or more errors
///
/// # Examples
///
/// ```
/// use codec_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("not a number");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("expected a string");
    /// assert!(v.is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from an iterator of errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many(["bad key", "bad value"]);
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    /// Returns `true` if the validation contains a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the validation contains errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(21);
    /// let doubled = v.map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Chains a check that may itself fail.
    ///
    /// Behaves like [`Result::and_then`], propagating invalid states while
    /// invoking `f` only when the current validation is valid. Refinement
    /// codecs are built on this: decode first, then test the decoded value.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// fn positive(input: i32) -> Validation<&'static str, i32> {
    ///     if input > 0 {
    ///         Validation::valid(input)
    ///     } else {
    ///         Validation::invalid("not positive")
    ///     }
    /// }
    ///
    /// let result = Validation::valid(4).and_then(positive);
    /// assert_eq!(result.into_value(), Some(4));
    ///
    /// let invalid = Validation::valid(-4).and_then(positive);
    /// assert!(invalid.is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Calls `op` if the validation is invalid, otherwise returns the `Valid` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let res = v.or_else(|_errs| Validation::valid(42));
    /// assert_eq!(res.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validation<E, A>
    where
        F: FnOnce(ErrorVec<E>) -> Validation<E, A>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => op(errors),
        }
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// If both are valid, returns both values. Otherwise the errors of `self`
    /// come first, then the errors of `other`, which is the ordering composite
    /// codecs rely on when a key check and a value check both fail for one entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let key = Validation::<&str, &str>::invalid("bad key");
    /// let value = Validation::<&str, i32>::invalid("bad value");
    /// let entry = key.zip(value);
    ///
    /// let errors = entry.into_errors().unwrap();
    /// assert_eq!(errors.as_slice(), ["bad key", "bad value"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.extend(e2);
                Validation::Invalid(e1)
            }
        }
    }

    /// Maps each error while preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let mapped = v.map_err(|e| format!("decode failed: {}", e));
    /// assert!(mapped.is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Validation<G, A>
    where
        F: Fn(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// Converts into a `Result`, keeping the whole error list on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.to_result(), Ok(42));
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// assert!(v.to_result().is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a plain `Result` into a `Validation`, turning the error side into
    /// a singleton list.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let result: Result<i32, &str> = Ok(42);
    /// let v = Validation::from_result(result);
    /// assert!(v.is_valid());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the error list, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// assert_eq!(v.into_errors().unwrap().len(), 1);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Extracts the value, if valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use codec_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the value, if valid.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}
