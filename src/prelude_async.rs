//! Async prelude - everything from [`prelude`](crate::prelude) plus the
//! async combinators.
//!
//! ```
//! use result_rail::prelude_async::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude_async::*;
//!
//! async fn double(x: i32) -> i32 {
//!     x * 2
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let rail = async { Rail::success(5) }.map(double).await;
//! assert_eq!(rail, Rail::success(10));
//! # });
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{Bind, FutureRailExt, Map, Then};

#[cfg(feature = "tracing")]
pub use crate::async_ext::{FutureTraceExt, TracedRail};

#[cfg(feature = "tracing")]
pub use crate::trace::RailTraceExt;
