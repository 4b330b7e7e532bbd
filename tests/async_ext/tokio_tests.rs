//! Tests for Tokio integration.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use error_or::async_ext::{timeout_or, with_timeout, TIMEOUT_CODE};
use error_or::prelude_async::*;

async fn slow_value(delay: Duration) -> ErrorOr<u32> {
    tokio::time::sleep(delay).await;
    ErrorOr::from_value(1)
}

#[tokio::test]
async fn timeout_or_passes_through_fast_results() {
    let result = timeout_or(Duration::from_secs(5), Error::unexpected(), async {
        ErrorOr::from_value(3)
    })
    .await;

    assert_eq!(result.value(), 3);
}

#[tokio::test]
async fn timeout_or_keeps_inner_failures() {
    let result = timeout_or(Duration::from_secs(5), Error::unexpected(), async {
        ErrorOr::<u32>::from_error(Error::conflict())
    })
    .await;

    assert_eq!(result.errors(), &[Error::conflict()]);
}

#[tokio::test]
async fn elapsed_deadline_becomes_caller_error() {
    let result = slow_value(Duration::from_secs(60))
        .timeout_or(Duration::from_millis(10), Error::failure().with_code("Fetch.Slow"))
        .await;

    assert_eq!(result.first_error().code(), "Fetch.Slow");
}

#[tokio::test]
async fn with_timeout_uses_timeout_error() {
    let result = with_timeout(Duration::from_millis(10), slow_value(Duration::from_secs(60))).await;
    let error = result.first_error();

    assert_eq!(error.code(), TIMEOUT_CODE);
    assert_eq!(error.kind(), ErrorKind::Unexpected);
    assert_eq!(error.meta("timeout_ms"), Some(&MetadataValue::Int(10)));
}

#[tokio::test]
async fn timeout_cancels_pending_steps() {
    let later = Arc::new(AtomicU32::new(0));
    let later_clone = later.clone();

    let result = slow_value(Duration::from_secs(60))
        .map(move |n| {
            later_clone.fetch_add(1, Ordering::SeqCst);
            n
        })
        .with_timeout(Duration::from_millis(10))
        .await;

    assert!(result.is_error());
    assert_eq!(later.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn outer_cancellation_is_not_an_error() {
    let step3 = Arc::new(AtomicU32::new(0));
    let step3_clone = step3.clone();

    let chain = async { ErrorOr::from_value(1) }
        .and_then_async(|n| async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            ErrorOr::from_value(n + 1)
        })
        .map(move |n| {
            step3_clone.fetch_add(1, Ordering::SeqCst);
            n
        });

    // The caller's own deadline drops the chain; nothing inside it observes a failure.
    let outcome = tokio::time::timeout(Duration::from_millis(10), chain).await;

    assert!(outcome.is_err());
    assert_eq!(step3.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn chain_after_timeout_can_recover() {
    let result = slow_value(Duration::from_secs(60))
        .with_timeout(Duration::from_millis(10))
        .recover_safe(|errors| {
            assert_eq!(errors[0].code(), TIMEOUT_CODE);
            0
        })
        .await;

    assert_eq!(result.value(), 0);
}
