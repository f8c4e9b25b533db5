use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Rail;

pin_project! {
    /// Future returned by [`FutureRailExt::bind`](super::FutureRailExt::bind).
    ///
    /// Awaits the inbound rail first. On failure it resolves immediately
    /// with the propagated messages and the continuation is never
    /// constructed. On success the continuation future is built from the
    /// unwrapped value and its rail becomes the output, with no extra
    /// wrapping.
    ///
    /// # Cancel Safety
    ///
    /// Dropping `Bind` drops whichever inner future is currently in flight;
    /// no combinator-level cancellation is added.
    #[must_use = "futures do nothing unless polled"]
    #[project = BindProj]
    pub enum Bind<Fut1, F, Fut2> {
        First {
            #[pin]
            future: Fut1,
            continuation: Option<F>,
        },
        Second {
            #[pin]
            future: Fut2,
        },
    }
}

impl<Fut1, F, Fut2> Bind<Fut1, F, Fut2> {
    /// Creates a new `Bind` from an inbound future and a continuation.
    #[inline]
    pub fn new(future: Fut1, continuation: F) -> Self {
        Self::First { future, continuation: Some(continuation) }
    }
}

impl<Fut1, F, Fut2, T, U> Future for Bind<Fut1, F, Fut2>
where
    Fut1: Future<Output = Rail<T>>,
    F: FnOnce(T) -> Fut2,
    Fut2: Future<Output = Rail<U>>,
{
    type Output = Rail<U>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            let next = match self.as_mut().project() {
                BindProj::First { future, continuation } => {
                    match ready!(future.poll(cx)) {
                        Rail::Success(value) => {
                            let continuation = continuation
                                .take()
                                .expect("Bind polled after completion; this is a bug");
                            continuation(value)
                        }
                        Rail::Failure(errors) => return Poll::Ready(Rail::Failure(errors)),
                    }
                }
                BindProj::Second { future } => return future.poll(cx),
            };
            self.set(Self::Second { future: next });
        }
    }
}

impl<Fut1, F, Fut2, T, U> FusedFuture for Bind<Fut1, F, Fut2>
where
    Fut1: FusedFuture<Output = Rail<T>>,
    F: FnOnce(T) -> Fut2,
    Fut2: FusedFuture<Output = Rail<U>>,
{
    fn is_terminated(&self) -> bool {
        match self {
            Self::First { future, continuation } => {
                continuation.is_none() || future.is_terminated()
            }
            Self::Second { future } => future.is_terminated(),
        }
    }
}
