use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::types::alloc_type::{String, Vec};
use crate::types::ErrorVec;

/// Railway-oriented result that either carries a value or one or more error
/// messages, never both.
///
/// `Rail<T>` represents one step of a pipeline: a computation that succeeded
/// with a value of type `T`, or failed with an ordered, non-empty list of
/// human-readable error messages. Once a rail is a failure, every combinator
/// propagates the messages unchanged and never runs its supplied function,
/// so a pipeline short-circuits at the first failing step.
///
/// Instances are immutable: combinators consume the rail by value and produce
/// a new one (or hand the original back untouched).
///
/// # Serde Support
///
/// `Rail` implements `Serialize` and `Deserialize` when `T` does, behind the
/// `serde` feature.
///
/// # Variants
///
/// * `Success(T)` - Contains the successful value
/// * `Failure(ErrorVec)` - Contains one or more error messages
///
/// Constructing `Failure` directly with an empty `ErrorVec` bypasses the
/// non-empty check that [`failure`](Rail::failure) and
/// [`failure_many`](Rail::failure_many) enforce; prefer the constructors.
///
/// # Examples
///
/// ```
/// use result_rail::Rail;
///
/// let ok = Rail::success(42);
/// assert!(ok.is_success());
///
/// let bad = Rail::<i32>::failure("out of range");
/// assert!(bad.is_failure());
/// assert_eq!(bad.errors(), ["out of range"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Rail<T> {
    Success(T),
    Failure(ErrorVec),
}

impl<T> Rail<T> {
    /// Creates a successful rail.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::success(42);
    /// assert_eq!(rail.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed rail from a single error message.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::<()>::failure("missing field");
    /// assert!(rail.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(smallvec![message.into()])
    }

    /// Creates a failed rail from an iterator of error messages.
    ///
    /// Message order is preserved.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields no messages. A failure with zero
    /// messages would be structurally indistinguishable from a success, so
    /// the constructor rejects it outright.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::<()>::failure_many(["missing", "invalid"]);
    /// assert_eq!(rail.errors().len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn failure_many<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let errors: ErrorVec = messages.into_iter().map(Into::into).collect();
        assert!(
            !errors.is_empty(),
            "Rail::failure_many requires at least one error message"
        );
        Self::Failure(errors)
    }

    /// Returns `true` if the rail carries no error messages.
    ///
    /// Success is determined structurally from error emptiness, not from a
    /// separate flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// assert!(Rail::success(42).is_success());
    /// assert!(!Rail::<i32>::failure("error").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors().is_empty()
    }

    /// Returns `true` if the rail carries error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// assert!(Rail::<i32>::failure("error").is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// assert_eq!(Rail::success(42).value(), Some(&42));
    /// assert_eq!(Rail::<i32>::failure("error").value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the rail, returning the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error messages as a slice.
    ///
    /// A successful rail legally reports an empty slice, meaning
    /// "no errors".
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// assert!(Rail::success(42).errors().is_empty());
    /// assert_eq!(Rail::<i32>::failure("bad").errors(), ["bad"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors,
        }
    }

    /// Consumes the rail, returning the error messages, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Returns a `Result` view borrowing the rail's contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::success(42);
    /// assert_eq!(rail.as_result(), Ok(&42));
    /// ```
    #[inline]
    pub fn as_result(&self) -> Result<&T, &[String]> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Consumes the rail, converting it into a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::<i32>::failure("bad input");
    /// let errors = rail.into_result().unwrap_err();
    /// assert_eq!(errors.as_slice(), ["bad input"]);
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorVec> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Chains a step that can itself fail.
    ///
    /// On success, `f` receives the unwrapped value and its rail is returned
    /// directly, with no extra wrapping; this is the only combinator that can
    /// introduce a new failure mid-pipeline. On failure, the existing
    /// messages propagate verbatim into the output rail and `f` is never
    /// invoked.
    ///
    /// Panics raised by `f` are not caught; they propagate to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::success(10).bind(|x| {
    ///     if x > 5 {
    ///         Rail::success(x)
    ///     } else {
    ///         Rail::failure("too small")
    ///     }
    /// });
    /// assert_eq!(rail, Rail::success(10));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Rail<U>
    where
        F: FnOnce(T) -> Rail<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => Rail::Failure(errors),
        }
    }

    /// Transforms the success value with an infallible function.
    ///
    /// On success, `f(value)` is wrapped in a new `Success`. On failure, the
    /// existing messages propagate verbatim into the output rail and `f` is
    /// never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::success(5).map(|x| x * 2);
    /// assert_eq!(rail, Rail::success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Rail<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Rail::Success(f(value)),
            Self::Failure(errors) => Rail::Failure(errors),
        }
    }

    /// Runs a side effect against the success value, then returns the rail
    /// unchanged.
    ///
    /// The effect observes the value by reference, so the success value's
    /// identity is preserved across the call. On failure the effect is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Rail;
    ///
    /// let mut seen = None;
    /// let rail = Rail::success(10).then(|x| seen = Some(*x));
    /// assert_eq!(rail, Rail::success(10));
    /// assert_eq!(seen, Some(10));
    /// ```
    #[inline]
    pub fn then<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }
}

impl<T: fmt::Display> fmt::Display for Rail<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "{}", value),
            Self::Failure(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    f.write_str(error)?;
                }
                Ok(())
            }
        }
    }
}

/// Collects an iterator of rails into a rail of values, stopping at the
/// first failure.
///
/// Values gathered before the failing element are discarded and the failing
/// element's messages are returned verbatim. Elements after the first
/// failure are never consumed.
///
/// # Examples
///
/// ```
/// use result_rail::Rail;
///
/// let all: Rail<Vec<i32>> = [Rail::success(1), Rail::success(2)].into_iter().collect();
/// assert_eq!(all, Rail::success(vec![1, 2]));
///
/// let short: Rail<Vec<i32>> = [Rail::success(1), Rail::failure("bad")]
///     .into_iter()
///     .collect();
/// assert_eq!(short.errors(), ["bad"]);
/// ```
impl<T> FromIterator<Rail<T>> for Rail<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Rail<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut values = Vec::with_capacity(iter.size_hint().0);
        for rail in iter {
            match rail {
                Rail::Success(value) => values.push(value),
                Rail::Failure(errors) => return Rail::Failure(errors),
            }
        }
        Rail::Success(values)
    }
}
