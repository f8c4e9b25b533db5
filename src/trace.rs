//! Tracing integration for sync rails.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.3", features = ["tracing"] }
//! ```

use crate::types::Rail;

/// Extension trait that logs rail failures through `tracing`.
///
/// Failure logging is observational: the rail always passes through
/// unchanged, whichever case it carries.
pub trait RailTraceExt<T> {
    /// Logs the rail's messages under `operation` if it is a failure.
    ///
    /// Emits a single `error` event carrying the operation name and the
    /// full message list. Successful rails emit nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::trace::RailTraceExt;
    /// use result_rail::Rail;
    ///
    /// let rail = Rail::<i32>::failure("bad input").traced("parse_request");
    /// assert!(rail.is_failure());
    /// ```
    #[must_use]
    fn traced(self, operation: &str) -> Self;
}

impl<T> RailTraceExt<T> for Rail<T> {
    fn traced(self, operation: &str) -> Self {
        if self.is_failure() {
            tracing::error!(operation, errors = ?self.errors(), "rail failed");
        }
        self
    }
}
