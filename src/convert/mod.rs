//! Conversion helpers between `core::result::Result` and [`Rail`].
//!
//! These adapters make it straightforward to feed a pipeline from existing
//! fallible APIs, and to hand a finished rail back to code that speaks
//! `Result`.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::*;
//! use result_rail::Rail;
//!
//! let parsed: Result<i32, core::num::ParseIntError> = "42".parse();
//! let rail = result_to_rail(parsed);
//! assert_eq!(rail, Rail::success(42));
//! ```

use core::fmt::Display;

use crate::types::alloc_type::{format, String};
use crate::types::{ErrorVec, Rail};

/// Converts a `Result` to a [`Rail`], rendering the error with `Display`.
///
/// # Examples
///
/// ```
/// use result_rail::convert::result_to_rail;
/// use result_rail::Rail;
///
/// let err: Result<i32, &str> = Err("boom");
/// assert_eq!(result_to_rail(err), Rail::failure("boom"));
/// ```
#[inline]
pub fn result_to_rail<T, E: Display>(result: Result<T, E>) -> Rail<T> {
    match result {
        Ok(value) => Rail::success(value),
        Err(error) => Rail::failure(format!("{}", error)),
    }
}

/// Converts a [`Rail`] back to a `Result`, keeping every error message.
///
/// # Examples
///
/// ```
/// use result_rail::convert::rail_to_result;
/// use result_rail::Rail;
///
/// let rail = Rail::<i32>::failure_many(["a", "b"]);
/// let errors = rail_to_result(rail).unwrap_err();
/// assert_eq!(errors.as_slice(), ["a", "b"]);
/// ```
#[inline]
pub fn rail_to_result<T>(rail: Rail<T>) -> Result<T, ErrorVec> {
    rail.into_result()
}

impl<T, E: Display> From<Result<T, E>> for Rail<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_rail(result)
    }
}

/// Extension trait for lifting `Result` values onto the rail.
///
/// # Examples
///
/// ```
/// use result_rail::convert::ResultRailExt;
/// use result_rail::Rail;
///
/// let rail = "not a number"
///     .parse::<i32>()
///     .or_fail("expected a number");
/// assert_eq!(rail, Rail::failure("expected a number"));
/// ```
pub trait ResultRailExt<T, E> {
    /// Converts into a [`Rail`], rendering the error with `Display`.
    fn into_rail(self) -> Rail<T>
    where
        E: Display;

    /// Converts into a [`Rail`], replacing the error with `message`.
    ///
    /// Useful when the underlying error type has no `Display` impl or when
    /// its rendering is not fit for the pipeline's consumers.
    fn or_fail(self, message: impl Into<String>) -> Rail<T>;
}

impl<T, E> ResultRailExt<T, E> for Result<T, E> {
    #[inline]
    fn into_rail(self) -> Rail<T>
    where
        E: Display,
    {
        result_to_rail(self)
    }

    #[inline]
    fn or_fail(self, message: impl Into<String>) -> Rail<T> {
        match self {
            Ok(value) => Rail::success(value),
            Err(_) => Rail::failure(message),
        }
    }
}
