//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! deferred combinators.
//!
//! # Usage
//!
//! ```rust
//! use error_or::prelude_async::*;
//!
//! async fn fetch_user(id: u64) -> ErrorOr<String> {
//!     if id == 0 {
//!         Error::not_found().with_code("User.NotFound").into_failure()
//!     } else {
//!         format!("user-{}", id).lift()
//!     }
//! }
//!
//! async fn greeting(id: u64) -> ErrorOr<String> {
//!     fetch_user(id)
//!         .map(|name| format!("hello, {}", name))
//!         .recover_safe(|_| String::from("hello, stranger"))
//!         .await
//! }
//! ```
//!
//! # What's Included
//!
//! - Everything in [`prelude`](crate::prelude)
//! - **Traits**: [`FutureErrorOrExt`](crate::async_ext::FutureErrorOrExt)
//! - **Types**: [`ThenFuture`](crate::async_ext::ThenFuture)

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureErrorOrExt, ThenFuture};
