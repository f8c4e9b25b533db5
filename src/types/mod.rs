//! Core types for railway-oriented pipelines.
//!
//! # Examples
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
//!     });
//!
//! assert_eq!(rail, Rail::success(10));
//! ```
use smallvec::SmallVec;

use crate::types::alloc_type::String;

pub mod alloc_type;
pub mod iter;
pub mod rail;

pub use rail::*;

/// SmallVec-backed collection of error messages.
///
/// Uses inline storage for a single message to avoid heap allocation in the
/// common case where a pipeline step fails with exactly one error.
pub type ErrorVec = SmallVec<[String; 1]>;
