//! Tests for the FutureRailExt combinators.

use std::sync::atomic::{AtomicU32, Ordering};

use result_rail::prelude_async::*;

#[test]
fn combinator_futures_are_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    type Inbound = std::future::Ready<Rail<i32>>;

    assert_send::<result_rail::async_ext::Bind<Inbound, fn(i32) -> Inbound, Inbound>>();
    assert_sync::<result_rail::async_ext::Bind<Inbound, fn(i32) -> Inbound, Inbound>>();
    assert_send::<
        result_rail::async_ext::Map<
            Inbound,
            fn(i32) -> std::future::Ready<i32>,
            std::future::Ready<i32>,
        >,
    >();
    assert_send::<
        result_rail::async_ext::Then<
            Inbound,
            fn(&i32) -> std::future::Ready<()>,
            std::future::Ready<()>,
            i32,
        >,
    >();
}

#[tokio::test]
async fn bind_returns_the_continuation_rail_unwrapped() {
    let rail = async { Rail::success("a") }
        .bind(|_| async { Rail::<&str>::failure("x") })
        .await;
    assert_eq!(rail, Rail::failure("x"));
}

#[tokio::test]
async fn map_wraps_the_transformed_value() {
    let rail = async { Rail::success(5) }.map(|x| async move { x * 2 }).await;
    assert_eq!(rail, Rail::success(10));
}

#[tokio::test]
async fn then_preserves_the_original_value() {
    let seen = AtomicU32::new(0);

    let rail = async { Rail::success(10) }
        .then(|x| {
            seen.store(*x as u32, Ordering::SeqCst);
            async {}
        })
        .await;

    assert_eq!(rail, Rail::success(10));
    assert_eq!(seen.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn failed_rail_never_schedules_continuations() {
    let invocations = AtomicU32::new(0);

    let rail = async { Rail::<i32>::failure("bad input") }
        .map(|x| {
            invocations.fetch_add(1, Ordering::SeqCst);
            async move { x * 2 }
        })
        .bind(|x| {
            invocations.fetch_add(1, Ordering::SeqCst);
            async move { Rail::success(x) }
        })
        .then(|_| {
            invocations.fetch_add(1, Ordering::SeqCst);
            async {}
        })
        .await;

    assert_eq!(rail.errors(), ["bad input"]);
    assert_eq!(invocations.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn errors_survive_payload_type_changes_verbatim() {
    let rail: Rail<String> = async { Rail::<i32>::failure_many(["a", "b"]) }
        .bind(|x| async move { Rail::success(x.to_string()) })
        .await;
    assert_eq!(rail.errors(), ["a", "b"]);
}

#[tokio::test]
async fn steps_run_sequentially_across_suspension_points() {
    let order = AtomicU32::new(0);

    let rail = async {
        tokio::task::yield_now().await;
        assert_eq!(order.fetch_add(1, Ordering::SeqCst), 0);
        Rail::success(1)
    }
    .map(|x| {
        assert_eq!(order.fetch_add(1, Ordering::SeqCst), 1);
        async move {
            tokio::task::yield_now().await;
            x + 1
        }
    })
    .then(|_| {
        assert_eq!(order.fetch_add(1, Ordering::SeqCst), 2);
        async {
            tokio::task::yield_now().await;
        }
    })
    .await;

    assert_eq!(rail, Rail::success(2));
    assert_eq!(order.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn full_async_pipeline_scenario() {
    let rail = async { Rail::success(5) }
        .map(|x| async move { x * 2 })
        .bind(|x| async move {
            if x > 5 {
                Rail::success(x)
            } else {
                Rail::failure("too small")
            }
        })
        .await;
    assert_eq!(rail, Rail::success(10));
}
