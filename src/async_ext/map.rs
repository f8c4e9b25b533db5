use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Rail;

pin_project! {
    /// Future returned by [`FutureRailExt::map`](super::FutureRailExt::map).
    ///
    /// Awaits the inbound rail first. On failure it resolves immediately
    /// with the propagated messages. On success the transformation future is
    /// built from the unwrapped value and its output is wrapped in a new
    /// `Success`.
    #[must_use = "futures do nothing unless polled"]
    #[project = MapProj]
    pub enum Map<Fut1, F, Fut2> {
        First {
            #[pin]
            future: Fut1,
            transform: Option<F>,
        },
        Second {
            #[pin]
            future: Fut2,
        },
    }
}

impl<Fut1, F, Fut2> Map<Fut1, F, Fut2> {
    /// Creates a new `Map` from an inbound future and a transformation.
    #[inline]
    pub fn new(future: Fut1, transform: F) -> Self {
        Self::First { future, transform: Some(transform) }
    }
}

impl<Fut1, F, Fut2, T, U> Future for Map<Fut1, F, Fut2>
where
    Fut1: Future<Output = Rail<T>>,
    F: FnOnce(T) -> Fut2,
    Fut2: Future<Output = U>,
{
    type Output = Rail<U>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            let next = match self.as_mut().project() {
                MapProj::First { future, transform } => match ready!(future.poll(cx)) {
                    Rail::Success(value) => {
                        let transform = transform
                            .take()
                            .expect("Map polled after completion; this is a bug");
                        transform(value)
                    }
                    Rail::Failure(errors) => return Poll::Ready(Rail::Failure(errors)),
                },
                MapProj::Second { future } => {
                    return future.poll(cx).map(Rail::Success);
                }
            };
            self.set(Self::Second { future: next });
        }
    }
}

impl<Fut1, F, Fut2, T, U> FusedFuture for Map<Fut1, F, Fut2>
where
    Fut1: FusedFuture<Output = Rail<T>>,
    F: FnOnce(T) -> Fut2,
    Fut2: FusedFuture<Output = U>,
{
    fn is_terminated(&self) -> bool {
        match self {
            Self::First { future, transform } => transform.is_none() || future.is_terminated(),
            Self::Second { future } => future.is_terminated(),
        }
    }
}
