//! Tests for `FutureErrorOrExt`.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::task::{Context, Poll, Wake, Waker};
use std::sync::Arc;

use error_or::async_ext::ThenFuture;
use error_or::prelude_async::*;

struct NoopWaker;

impl Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}
}

fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    let waker = Waker::from(Arc::new(NoopWaker));
    let mut cx = Context::from_waker(&waker);
    future.poll(&mut cx)
}

async fn step(value: i32) -> ErrorOr<i32> {
    tokio::task::yield_now().await;
    ErrorOr::from_value(value + 1)
}

#[test]
fn then_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<ThenFuture<std::future::Ready<ErrorOr<()>>, fn(ErrorOr<()>) -> ErrorOr<()>>>();
    assert_sync::<ThenFuture<std::future::Ready<ErrorOr<()>>, fn(ErrorOr<()>) -> ErrorOr<()>>>();
}

#[tokio::test]
async fn map_on_future_transforms_value() {
    let result = async { ErrorOr::from_value(20) }.map(|x| x + 1).map(|x| x * 2).await;
    assert_eq!(result.value(), 42);
}

#[tokio::test]
async fn second_failing_step_stops_the_chain() {
    let step3 = AtomicU32::new(0);

    let result = step(0)
        .and_then_async(|n| async move {
            if n > 0 {
                Error::conflict().with_code("Step.Two").into_failure()
            } else {
                ErrorOr::from_value(n)
            }
        })
        .and_then_async(|n| {
            step3.fetch_add(1, Ordering::SeqCst);
            step(n)
        })
        .await;

    assert_eq!(step3.load(Ordering::SeqCst), 0);
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.first_error().code(), "Step.Two");
}

#[tokio::test]
async fn plain_and_async_callbacks_mix() {
    let result = step(1)
        .map(|n| n * 10)
        .and_then(|n| if n == 20 { ErrorOr::from_value(n) } else { Error::failure().into_failure() })
        .map_async(|n| async move { n.to_string() })
        .await;

    assert_eq!(result.value(), "20");
}

#[tokio::test]
async fn deferred_fold_and_branch() {
    let text = async { ErrorOr::<u8>::from_error(Error::validation()) }
        .fold(|n| n.to_string(), |errors| errors[0].code().to_string())
        .await;
    assert_eq!(text, "General.Validation");

    let kind = async { ErrorOr::<u8>::from_errors([Error::not_found(), Error::failure()]) }
        .fold_first(|_| None, |error| Some(error.kind()))
        .await;
    assert_eq!(kind, Some(ErrorKind::NotFound));

    let hits = AtomicU32::new(0);
    async { ErrorOr::from_value(5) }
        .branch(
            |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            },
            |_| unreachable!("success must not reach the error callback"),
        )
        .await;
    async { ErrorOr::<i32>::from_error(Error::failure()) }
        .branch_first(
            |_| unreachable!("failure must not reach the value callback"),
            |_| {
                hits.fetch_add(10, Ordering::SeqCst);
            },
        )
        .await;
    assert_eq!(hits.load(Ordering::SeqCst), 11);
}

#[tokio::test]
async fn deferred_recovery_family() {
    let failed = || async { ErrorOr::<i32>::from_error(Error::not_found()) };

    assert_eq!(failed().fallback(7).await.value(), 7);
    assert_eq!(failed().recover_safe(|errors| errors.len() as i32).await.value(), 1);
    assert_eq!(failed().recover(|_| ErrorOr::from_value(3)).await.value(), 3);
    assert_eq!(failed().fallback_async(async { 8 }).await.value(), 8);
    assert_eq!(
        failed().recover_async(|_| async { ErrorOr::from_value(4) }).await.value(),
        4
    );
    assert_eq!(
        failed().recover_safe_async(|_| async { 5 }).await.value(),
        5
    );
}

#[tokio::test]
async fn deferred_replace_family() {
    let failed = || async { ErrorOr::<i32>::from_errors([Error::validation(), Error::conflict()]) };

    assert_eq!(failed().replace_error(Error::failure()).await.errors(), &[Error::failure()]);
    assert_eq!(
        failed().replace_error_with(|errors| errors[1].clone()).await.errors(),
        &[Error::conflict()]
    );
    assert_eq!(
        failed().replace_errors_with(|errors| errors.into_iter().take(1)).await.errors(),
        &[Error::validation()]
    );
    assert_eq!(
        failed().replace_error_async(async { Error::unexpected() }).await.errors(),
        &[Error::unexpected()]
    );
    assert_eq!(
        failed()
            .replace_error_with_async(|_| async { Error::unauthorized() })
            .await
            .errors(),
        &[Error::unauthorized()]
    );
    assert_eq!(
        failed()
            .replace_errors_with_async(|errors| async move { errors })
            .await
            .errors()
            .len(),
        2
    );
}

#[tokio::test]
async fn deferred_inspect_variants() {
    let seen = &AtomicU32::new(0);

    let result = async { ErrorOr::from_value(3_u32) }
        .inspect(|v| seen.store(*v, Ordering::SeqCst))
        .inspect_async(|v| {
            let v = *v;
            async move {
                seen.fetch_add(v, Ordering::SeqCst);
            }
        })
        .await;

    assert_eq!(result.value(), 3);
    assert_eq!(seen.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn deferred_branch_and_fold_async() {
    let hits = &AtomicU32::new(0);

    async { ErrorOr::from_value(1) }
        .branch_async(
            |_| async move {
                hits.fetch_add(1, Ordering::SeqCst);
            },
            |_| async move {
                hits.fetch_add(100, Ordering::SeqCst);
            },
        )
        .await;
    async { ErrorOr::<i32>::from_error(Error::failure()) }
        .branch_first_async(
            |_| async move {
                hits.fetch_add(100, Ordering::SeqCst);
            },
            |_| async move {
                hits.fetch_add(1, Ordering::SeqCst);
            },
        )
        .await;
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    let n = async { ErrorOr::from_value(2) }
        .fold_async(|n| async move { n * 2 }, |_| async { 0 })
        .await;
    let code = async { ErrorOr::<i32>::from_error(Error::conflict()) }
        .fold_first_async(|_| async { String::new() }, |e| async move { e.code().to_string() })
        .await;
    assert_eq!(n, 4);
    assert_eq!(code, "General.Conflict");
}

#[test]
fn steps_run_only_after_input_resolves() {
    let ran = AtomicU32::new(0);
    let mut future = Box::pin(
        std::future::pending::<ErrorOr<i32>>().map(|n| {
            ran.fetch_add(1, Ordering::SeqCst);
            n
        }),
    );

    assert!(poll_once(future.as_mut()).is_pending());
    assert!(poll_once(future.as_mut()).is_pending());
    assert_eq!(ran.load(Ordering::SeqCst), 0);
}

#[test]
fn dropping_the_chain_cancels_remaining_steps() {
    let ran = AtomicU32::new(0);

    {
        let future = std::future::pending::<ErrorOr<i32>>()
            .and_then(|n| {
                ran.fetch_add(1, Ordering::SeqCst);
                ErrorOr::from_value(n)
            })
            .map(|n| {
                ran.fetch_add(1, Ordering::SeqCst);
                n
            });
        let mut future = Box::pin(future);
        assert!(poll_once(future.as_mut()).is_pending());
    }

    assert_eq!(ran.load(Ordering::SeqCst), 0);
}

#[test]
fn then_future_reports_termination() {
    use futures_core::future::FusedFuture;

    let mut future = Box::pin(std::future::ready(ErrorOr::from_value(1)).map(|n| n + 1));
    assert!(!future.is_terminated());

    match poll_once(future.as_mut()) {
        Poll::Ready(result) => assert_eq!(result.value(), 2),
        Poll::Pending => panic!("ready input must resolve on first poll"),
    }
    assert!(future.is_terminated());
}
