use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Rail;

pin_project! {
    /// Future returned by [`FutureRailExt::then`](super::FutureRailExt::then).
    ///
    /// Awaits the inbound rail first. On failure it resolves immediately
    /// with the propagated messages. On success the effect future is built
    /// from a reference to the value, awaited for its side effect, and the
    /// original rail is returned with its value intact. The effect's output
    /// is discarded.
    ///
    /// The effect closure receives the value by reference and must return a
    /// future that does not borrow from it; copy or clone inside the closure
    /// whatever the effect needs.
    #[must_use = "futures do nothing unless polled"]
    #[project = ThenProj]
    pub enum Then<Fut1, F, Fut2, T> {
        First {
            #[pin]
            future: Fut1,
            effect: Option<F>,
        },
        Second {
            #[pin]
            future: Fut2,
            rail: Option<Rail<T>>,
        },
    }
}

impl<Fut1, F, Fut2, T> Then<Fut1, F, Fut2, T> {
    /// Creates a new `Then` from an inbound future and an effect.
    #[inline]
    pub fn new(future: Fut1, effect: F) -> Self {
        Self::First { future, effect: Some(effect) }
    }
}

impl<Fut1, F, Fut2, T> Future for Then<Fut1, F, Fut2, T>
where
    Fut1: Future<Output = Rail<T>>,
    F: FnOnce(&T) -> Fut2,
    Fut2: Future,
{
    type Output = Rail<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            let (next, rail) = match self.as_mut().project() {
                ThenProj::First { future, effect } => {
                    let rail = ready!(future.poll(cx));
                    match &rail {
                        Rail::Success(value) => {
                            let effect = effect
                                .take()
                                .expect("Then polled after completion; this is a bug");
                            (effect(value), rail)
                        }
                        Rail::Failure(_) => return Poll::Ready(rail),
                    }
                }
                ThenProj::Second { future, rail } => {
                    ready!(future.poll(cx));
                    let rail = rail
                        .take()
                        .expect("Then polled after completion; this is a bug");
                    return Poll::Ready(rail);
                }
            };
            self.set(Self::Second { future: next, rail: Some(rail) });
        }
    }
}

impl<Fut1, F, Fut2, T> FusedFuture for Then<Fut1, F, Fut2, T>
where
    Fut1: FusedFuture<Output = Rail<T>>,
    F: FnOnce(&T) -> Fut2,
    Fut2: FusedFuture,
{
    fn is_terminated(&self) -> bool {
        match self {
            Self::First { future, effect } => effect.is_none() || future.is_terminated(),
            Self::Second { future, rail } => rail.is_none() || future.is_terminated(),
        }
    }
}
