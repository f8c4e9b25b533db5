//! Async combinators for deferred rails.
//!
//! This module extends any `Future<Output = Rail<T>>` with the same
//! short-circuiting combinators the sync API provides, one suspension point
//! per step.
//!
//! # Feature Flag
//!
//! Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude_async::*;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let rail = async { Rail::success(5) }
//!     .map(|x| async move { x * 2 })
//!     .await;
//! assert_eq!(rail, Rail::success(10));
//! # });
//! ```

mod bind;
mod future_ext;
mod map;
mod then;

#[cfg(feature = "tracing")]
mod tracing_ext;

pub use bind::Bind;
pub use future_ext::FutureRailExt;
pub use map::Map;
pub use then::Then;

#[cfg(feature = "tracing")]
pub use tracing_ext::{FutureTraceExt, TracedRail};
