//! Tokio-specific async extensions.
//!
//! Turns an elapsed deadline into a failed [`ErrorOr`]. This is the only place
//! where the crate converts the absence of a result into an error, and it only
//! happens when the caller asks for it.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::future::Future;
use core::time::Duration;

use crate::types::{Error, ErrorOr};

/// Code of the error produced by [`with_timeout`].
pub const TIMEOUT_CODE: &str = "ErrorOr.Timeout";

/// Awaits `future`, failing with `error` if it does not resolve within `duration`.
///
/// On timeout the inner future is dropped; steps chained inside it never run.
///
/// # Example
///
/// ```rust
/// use error_or::async_ext::timeout_or;
/// use error_or::{Error, ErrorOr};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let slow = async {
///     tokio::time::sleep(Duration::from_secs(60)).await;
///     ErrorOr::from_value(1)
/// };
///
/// let result = timeout_or(Duration::from_millis(5), Error::unexpected(), slow).await;
/// assert_eq!(result.first_error().code(), "General.Unexpected");
/// # }
/// ```
pub async fn timeout_or<T, Fut>(duration: Duration, error: Error, future: Fut) -> ErrorOr<T>
where
    Fut: Future<Output = ErrorOr<T>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_elapsed) => ErrorOr::from_error(error),
    }
}

/// Awaits `future`, failing with a [`TIMEOUT_CODE`] error on an elapsed deadline.
///
/// The error is of kind `Unexpected` and carries the deadline in milliseconds
/// under the `timeout_ms` metadata key.
pub async fn with_timeout<T, Fut>(duration: Duration, future: Fut) -> ErrorOr<T>
where
    Fut: Future<Output = ErrorOr<T>>,
{
    timeout_or(duration, timeout_error(duration), future).await
}

fn timeout_error(duration: Duration) -> Error {
    let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
    Error::unexpected()
        .with_code(TIMEOUT_CODE)
        .with_description("The operation did not complete in time.")
        .with_meta("timeout_ms", millis)
}
