//! Extension trait for `Future<Output = Rail<T>>`.
//!
//! Provides `.bind()`, `.map()` and `.then()` on deferred rails, mirroring
//! the sync combinators on [`Rail`].

use core::future::Future;

use crate::types::Rail;

use super::bind::Bind;
use super::map::Map;
use super::then::Then;

/// Extension trait adding the railway combinators to futures that resolve
/// to a [`Rail`].
///
/// Each method awaits the inbound rail, and only on success constructs and
/// awaits the continuation's future. A failed rail resolves immediately with
/// its messages propagated verbatim; the continuation is never scheduled.
///
/// Steps are strictly sequential. The combinators add no cancellation,
/// timeout or retry of their own, and panics from continuations propagate
/// to the caller untouched.
///
/// # Examples
///
/// ```
/// use result_rail::prelude_async::*;
///
/// async fn lookup(id: u64) -> Rail<u64> {
///     if id == 0 {
///         Rail::failure("unknown id")
///     } else {
///         Rail::success(id)
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let rail = lookup(7)
///     .map(|id| async move { id * 2 })
///     .bind(|id| async move {
///         if id > 5 {
///             Rail::success(id)
///         } else {
///             Rail::failure("too small")
///         }
///     })
///     .await;
///
/// assert_eq!(rail, Rail::success(14));
/// # });
/// ```
pub trait FutureRailExt<T>: Future<Output = Rail<T>> + Sized {
    /// Chains an asynchronous step that can itself fail.
    ///
    /// On success, `f` receives the unwrapped value and the rail its future
    /// resolves to becomes the output directly, with no extra wrapping. On
    /// failure, `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::prelude_async::*;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let rail = async { Rail::success("a") }
    ///     .bind(|_| async { Rail::<&str>::failure("x") })
    ///     .await;
    /// assert_eq!(rail.errors(), ["x"]);
    /// # });
    /// ```
    fn bind<U, F, Fut>(self, f: F) -> Bind<Self, F, Fut>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Rail<U>>,
    {
        Bind::new(self, f)
    }

    /// Transforms the success value with an asynchronous, infallible step.
    ///
    /// On success, the output of `f`'s future is wrapped in a new `Success`.
    /// On failure, `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::prelude_async::*;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let rail = async { Rail::success(5) }
    ///     .map(|x| async move { x * 2 })
    ///     .await;
    /// assert_eq!(rail, Rail::success(10));
    /// # });
    /// ```
    fn map<U, F, Fut>(self, f: F) -> Map<Self, F, Fut>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        Map::new(self, f)
    }

    /// Runs an asynchronous side effect against the success value, then
    /// resolves with the original rail.
    ///
    /// The effect observes the value by reference; its future's output is
    /// discarded and the success value's identity is preserved. On failure,
    /// the effect is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::prelude_async::*;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let rail = async { Rail::success(10) }
    ///     .then(|x| {
    ///         let x = *x;
    ///         async move { println!("saw {}", x) }
    ///     })
    ///     .await;
    /// assert_eq!(rail, Rail::success(10));
    /// # });
    /// ```
    fn then<F, Fut>(self, f: F) -> Then<Self, F, Fut, T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future,
    {
        Then::new(self, f)
    }
}

impl<Fut, T> FutureRailExt<T> for Fut where Fut: Future<Output = Rail<T>> {}
