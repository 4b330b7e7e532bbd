//! Integration tests for deferred combinators.

mod future_ext_tests;

#[cfg(feature = "async-tokio")]
mod tokio_tests;
