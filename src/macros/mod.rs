//! Ergonomic macros for constructing [`Rail`](crate::Rail) values.
//!
//! - [`macro@crate::fail`] - Builds a single-message failure with `format!`
//!   semantics.
//! - [`macro@crate::rail`] - Converts a `Result`-producing expression or
//!   block into a [`Rail`](crate::Rail).
//!
//! # Examples
//!
//! ```
//! use result_rail::{fail, rail, Rail};
//!
//! let rail: Rail<i32> = fail!("user {} not found", 42);
//! assert_eq!(rail.errors(), ["user 42 not found"]);
//!
//! let rail = rail!("7".parse::<i32>());
//! assert_eq!(rail, Rail::success(7));
//! ```

/// Builds a failed [`Rail`](crate::Rail) with a formatted error message.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use result_rail::{fail, Rail};
///
/// let rail: Rail<()> = fail!("expected {} items, got {}", 3, 1);
/// assert_eq!(rail.errors(), ["expected 3 items, got 1"]);
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Rail::failure($crate::types::alloc_type::format!($($arg)*))
    };
}

/// Converts a `Result`-producing expression or block into a
/// [`Rail`](crate::Rail).
///
/// The error type must implement `Display`; it becomes the failure's single
/// message.
///
/// # Syntax
///
/// - `rail!(expr)` - Wraps a single `Result`-producing expression
/// - `rail!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use result_rail::{rail, Rail};
///
/// let rail = rail!("42".parse::<i32>());
/// assert_eq!(rail, Rail::success(42));
///
/// let rail = rail!({
///     let text = "not a number";
///     text.parse::<i32>()
/// });
/// assert!(rail.is_failure());
/// ```
#[macro_export]
macro_rules! rail {
    ($expr:expr $(,)?) => {
        $crate::convert::result_to_rail($expr)
    };
}
