//! Tracing integration for deferred rails.
//!
//! # Feature Flag
//!
//! Requires both the `async` and `tracing` features:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.3", features = ["async", "tracing"] }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::types::alloc_type::String;
use crate::types::Rail;

/// Extension trait for futures that logs rail failures through `tracing`.
///
/// This is the async counterpart to
/// [`RailTraceExt`](crate::trace::RailTraceExt): when the wrapped future
/// resolves to a failed rail, an `error` event is emitted naming the
/// operation and the messages, and the rail passes through unchanged.
pub trait FutureTraceExt<T>: Future<Output = Rail<T>> + Sized {
    /// Logs the rail's messages under `operation` if it resolves failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::prelude_async::*;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let rail = async { Rail::<i32>::failure("timeout") }
    ///     .traced("fetch_user")
    ///     .await;
    /// assert!(rail.is_failure());
    /// # });
    /// ```
    fn traced(self, operation: impl Into<String>) -> TracedRail<Self> {
        TracedRail { inner: self, operation: operation.into() }
    }
}

impl<F, T> FutureTraceExt<T> for F where F: Future<Output = Rail<T>> {}

pin_project! {
    /// Future wrapper that logs failures at resolution.
    ///
    /// Created by [`FutureTraceExt::traced`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TracedRail<F> {
        #[pin]
        inner: F,
        operation: String,
    }
}

impl<F, T> Future for TracedRail<F>
where
    F: Future<Output = Rail<T>>,
{
    type Output = Rail<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(rail) => {
                if rail.is_failure() {
                    tracing::error!(
                        operation = %this.operation,
                        errors = ?rail.errors(),
                        "rail failed"
                    );
                }
                Poll::Ready(rail)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
