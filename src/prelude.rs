//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use result_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`rail!`]
//! - **Types**: [`Rail`], [`ErrorVec`]
//! - **Traits**: [`ResultRailExt`]
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude::*;
//!
//! fn halve(x: i32) -> Rail<i32> {
//!     if x % 2 == 0 {
//!         Rail::success(x / 2)
//!     } else {
//!         fail!("{} is odd", x)
//!     }
//! }
//!
//! let rail = Rail::success(10).bind(halve).map(|x| x + 1);
//! assert_eq!(rail, Rail::success(6));
//! ```

// Macros
pub use crate::{fail, rail};

// Core types
pub use crate::types::{ErrorVec, Rail};

// Traits
pub use crate::convert::ResultRailExt;
