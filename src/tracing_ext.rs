//! Tracing integration for error-or.
//!
//! Failed containers can be logged as structured `tracing` events, one event
//! per error with the fields `code`, `description`, `kind` and `numeric_kind`.
//! The core types never log on their own.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{Error, ErrorOr};

/// Metadata key written by [`instrument_error`].
pub const SPAN_KEY: &str = "span";

/// Emits one `warn` event per error.
pub fn record_errors(errors: &[Error]) {
    for error in errors {
        tracing::warn!(
            code = %error.code(),
            description = %error.description(),
            kind = %error.kind(),
            numeric_kind = error.numeric_kind(),
            "operation failed"
        );
    }
}

/// Logging extension for [`ErrorOr`].
///
/// # Example
///
/// ```rust
/// use error_or::tracing_ext::ErrorOrTraceExt;
/// use error_or::{Error, ErrorOr};
///
/// fn load() -> ErrorOr<u32> {
///     Error::not_found().with_code("User.NotFound").into_failure()
/// }
///
/// let result = load().trace_errors();
/// assert!(result.is_error());
/// ```
pub trait ErrorOrTraceExt: Sized {
    /// Logs every error of a failed container and returns it unchanged.
    fn trace_errors(self) -> Self;

    /// Like [`trace_errors`](Self::trace_errors), with the events emitted inside `span`.
    fn trace_errors_in(self, span: &Span) -> Self {
        span.in_scope(|| self.trace_errors())
    }
}

impl<T> ErrorOrTraceExt for ErrorOr<T> {
    fn trace_errors(self) -> Self {
        if self.is_error() {
            record_errors(self.errors());
        }
        self
    }
}

/// Records the name of the current span under the `span` metadata key.
///
/// Outside of any enabled span the recorded name is `"unknown"`.
pub fn instrument_error(error: Error) -> Error {
    instrument_error_in(error, &Span::current())
}

/// Like [`instrument_error`], using `span` instead of the current span.
pub fn instrument_error_in(error: Error, span: &Span) -> Error {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    error.with_meta(SPAN_KEY, name)
}

#[cfg(feature = "async")]
pub use self::future::TraceErrorsFuture;

#[cfg(feature = "async")]
mod future {
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use pin_project_lite::pin_project;
    use tracing::Span;

    use super::ErrorOrTraceExt;
    use crate::types::ErrorOr;

    pin_project! {
        /// Future wrapper that logs the errors of the resolved container.
        ///
        /// Created by [`FutureErrorOrExt::trace_errors`](crate::async_ext::FutureErrorOrExt::trace_errors).
        /// The span is captured when the wrapper is built, so the events are
        /// attributed to the caller's span even if the future is polled elsewhere.
        #[must_use = "futures do nothing unless polled"]
        pub struct TraceErrorsFuture<F> {
            #[pin]
            inner: F,
            span: Span,
        }
    }

    impl<F> TraceErrorsFuture<F> {
        /// Wraps `inner`, logging into `span`.
        pub fn new(inner: F, span: Span) -> Self {
            Self { inner, span }
        }
    }

    impl<F, T> Future for TraceErrorsFuture<F>
    where
        F: Future<Output = ErrorOr<T>>,
    {
        type Output = ErrorOr<T>;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let this = self.project();

            match this.inner.poll(cx) {
                Poll::Ready(result) => Poll::Ready(result.trace_errors_in(this.span)),
                Poll::Pending => Poll::Pending,
            }
        }
    }
}
