//! Deferred combinators for error-or.
//!
//! Two surfaces share the semantics of the immediate combinators:
//!
//! - inherent `*_async` methods on [`ErrorOr`](crate::ErrorOr), taking callbacks
//!   that return futures
//! - [`FutureErrorOrExt`], chaining onto any `Future<Output = ErrorOr<T>>`
//!
//! Steps run strictly in order, each one only after the previous result is
//! available. Cancellation is plain future dropping: remaining steps never run
//! and no error is produced.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use error_or::prelude_async::*;
//!
//! async fn parse(input: &str) -> ErrorOr<i32> {
//!     input.parse::<i32>().or_error(|_| Error::validation())
//! }
//!
//! async fn example() -> String {
//!     parse("5")
//!         .map(|n| n * 2)
//!         .fold(|n| n.to_string(), |errors| errors[0].description().to_string())
//!         .await
//! }
//! ```

mod deferred;
mod future_ext;
mod then_future;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use future_ext::FutureErrorOrExt;
pub use then_future::ThenFuture;

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{timeout_or, with_timeout, TIMEOUT_CODE};
