//! Railway-oriented [`Rail`] container and short-circuiting combinators.
//!
//! A [`Rail<T>`] carries either a successful value or an ordered, non-empty
//! list of error messages. The combinators `bind`, `map` and `then` chain
//! pipeline steps so that the first failing step short-circuits everything
//! after it, and each exists in a sync form (on `Rail` itself) and an async
//! form (on any `Future<Output = Rail<T>>`, behind the `async` feature).
//!
//! # Examples
//!
//! ## Sync pipeline
//!
//! ```
//! use result_rail::Rail;
//!
//! let rail = Rail::success(5)
//!     .map(|x| x * 2)
//!     .bind(|x| {
//!         if x > 5 {
//!             Rail::success(x)
//!         } else {
//!             Rail::failure("too small")
//!         }
//!     })
//!     .then(|x| println!("checked: {}", x));
//!
//! assert_eq!(rail, Rail::success(10));
//! ```
//!
//! ## Short-circuiting
//!
//! ```
//! use result_rail::Rail;
//!
//! let rail = Rail::<i32>::failure("bad input")
//!     .map(|x| x * 2)
//!     .then(|_| unreachable!("never runs after a failure"));
//!
//! assert_eq!(rail.errors(), ["bad input"]);
//! ```
//!
//! # Error channels
//!
//! Domain failures travel in-band as the `Failure` case. Panics raised by
//! caller-supplied functions are not caught, wrapped or translated anywhere
//! in this crate; they propagate to the combinator's caller.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result` and `Rail`
pub mod convert;
/// Macros for constructing rails
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The `Rail` container and its sync combinators
pub mod types;

/// Async combinators over deferred rails (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Failure logging through `tracing` (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use convert::{rail_to_result, result_to_rail, ResultRailExt};
pub use types::{ErrorVec, Rail};
