//! Extension trait for `Future<Output = ErrorOr<T>>`.
//!
//! Mirrors the immediate combinators of [`ErrorOr`] for computations that have
//! not produced their container yet. Plain-callback methods return a
//! [`ThenFuture`]; methods with the `_async` suffix take callbacks that return
//! futures themselves.

use core::future::Future;

use crate::types::{Error, ErrorList, ErrorOr};

use super::then_future::ThenFuture;

/// Extension trait chaining combinators onto a deferred [`ErrorOr`].
///
/// Every method awaits the receiver first, then applies exactly the same rules
/// as the immediate method of the same name. Nothing runs until the returned
/// future is polled, and dropping it cancels the whole remaining chain without
/// turning the cancellation into an error.
///
/// # Examples
///
/// ## Plain callbacks
///
/// ```rust
/// use error_or::prelude_async::*;
///
/// async fn fetch_count() -> ErrorOr<u32> {
///     ErrorOr::from_value(4)
/// }
///
/// async fn example() -> ErrorOr<String> {
///     fetch_count()
///         .map(|n| n * 10)
///         .and_then(|n| if n > 0 { ErrorOr::from_value(n) } else { Error::validation().into_failure() })
///         .map(|n| n.to_string())
///         .await
/// }
/// ```
///
/// ## Asynchronous callbacks
///
/// ```rust
/// use error_or::prelude_async::*;
///
/// async fn lookup(id: u32) -> ErrorOr<String> {
///     if id == 0 {
///         Error::not_found().into_failure()
///     } else {
///         ErrorOr::from_value(format!("item-{}", id))
///     }
/// }
///
/// async fn example() -> String {
///     async { ErrorOr::from_value(3) }
///         .and_then_async(lookup)
///         .recover_safe_async(|_errors| async { String::from("fallback") })
///         .await
///         .value()
/// }
/// ```
pub trait FutureErrorOrExt<T>: Future<Output = ErrorOr<T>> + Sized {
    /// Resolves the container and runs exactly one of the two callbacks.
    #[inline]
    fn branch<V, E>(self, on_value: V, on_error: E) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>)>
    where
        V: FnOnce(T),
        E: FnOnce(ErrorList),
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.branch(on_value, on_error))
    }

    /// Like [`branch`](Self::branch), passing only the primary error.
    #[inline]
    fn branch_first<V, E>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>)>
    where
        V: FnOnce(T),
        E: FnOnce(Error),
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| {
            result.branch_first(on_value, on_first_error)
        })
    }

    /// Resolves the container and folds it through one of the two callbacks.
    #[inline]
    fn fold<R, V, E>(self, on_value: V, on_error: E) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> R>
    where
        V: FnOnce(T) -> R,
        E: FnOnce(ErrorList) -> R,
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.fold(on_value, on_error))
    }

    /// Like [`fold`](Self::fold), passing only the primary error.
    #[inline]
    fn fold_first<R, V, E>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> R>
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.fold_first(on_value, on_first_error))
    }

    /// Transforms the resolved value.
    #[inline]
    fn map<U, F>(self, f: F) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<U>>
    where
        F: FnOnce(T) -> U,
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.map(f))
    }

    /// Chains a step that may fail.
    #[inline]
    fn and_then<U, F>(self, f: F) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<U>>
    where
        F: FnOnce(T) -> ErrorOr<U>,
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.and_then(f))
    }

    /// Runs a side effect on the resolved value and passes the container through.
    #[inline]
    fn inspect<F>(self, f: F) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(&T),
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.inspect(f))
    }

    /// Replaces a failure with the container returned by `recovery`.
    #[inline]
    fn recover<F>(self, recovery: F) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> ErrorOr<T>,
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.recover(recovery))
    }

    /// Replaces a failure with `value`.
    #[inline]
    fn fallback(self, value: T) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>> {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.fallback(value))
    }

    /// Replaces a failure with a value computed from its errors.
    #[inline]
    fn recover_safe<F>(self, f: F) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> T,
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.recover_safe(f))
    }

    /// Replaces the errors of a failure with `error`.
    #[inline]
    fn replace_error(self, error: Error) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>> {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.replace_error(error))
    }

    /// Replaces the errors of a failure with one error computed from them.
    #[inline]
    fn replace_error_with<F>(self, f: F) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Error,
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.replace_error_with(f))
    }

    /// Replaces the errors of a failure with a list computed from them.
    ///
    /// # Panics
    ///
    /// The returned future panics if the computed list is empty.
    #[inline]
    fn replace_errors_with<F, I>(self, f: F) -> ThenFuture<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> I,
        I: IntoIterator<Item = Error>,
    {
        ThenFuture::new(self, move |result: ErrorOr<T>| result.replace_errors_with(f))
    }

    /// Resolves the container and awaits exactly one of the two callbacks' futures.
    fn branch_async<V, E, VFut, EFut>(self, on_value: V, on_error: E) -> impl Future<Output = ()>
    where
        V: FnOnce(T) -> VFut,
        E: FnOnce(ErrorList) -> EFut,
        VFut: Future<Output = ()>,
        EFut: Future<Output = ()>,
    {
        async move { self.await.branch_async(on_value, on_error).await }
    }

    /// Like [`branch_async`](Self::branch_async), passing only the primary error.
    fn branch_first_async<V, E, VFut, EFut>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> impl Future<Output = ()>
    where
        V: FnOnce(T) -> VFut,
        E: FnOnce(Error) -> EFut,
        VFut: Future<Output = ()>,
        EFut: Future<Output = ()>,
    {
        async move { self.await.branch_first_async(on_value, on_first_error).await }
    }

    /// Resolves the container and folds it through one asynchronous callback.
    fn fold_async<R, V, E, VFut, EFut>(self, on_value: V, on_error: E) -> impl Future<Output = R>
    where
        V: FnOnce(T) -> VFut,
        E: FnOnce(ErrorList) -> EFut,
        VFut: Future<Output = R>,
        EFut: Future<Output = R>,
    {
        async move { self.await.fold_async(on_value, on_error).await }
    }

    /// Like [`fold_async`](Self::fold_async), passing only the primary error.
    fn fold_first_async<R, V, E, VFut, EFut>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> impl Future<Output = R>
    where
        V: FnOnce(T) -> VFut,
        E: FnOnce(Error) -> EFut,
        VFut: Future<Output = R>,
        EFut: Future<Output = R>,
    {
        async move { self.await.fold_first_async(on_value, on_first_error).await }
    }

    /// Transforms the resolved value asynchronously.
    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Chains an asynchronous step that may fail.
    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    /// Awaits a side effect on the resolved value and passes the container through.
    fn inspect_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.inspect_async(f).await }
    }

    /// Replaces a failure with the container produced by an asynchronous recovery.
    fn recover_async<F, Fut>(self, recovery: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = ErrorOr<T>>,
    {
        async move { self.await.recover_async(recovery).await }
    }

    /// Replaces a failure with the output of `value`; on success it is dropped unpolled.
    fn fallback_async<Fut>(self, value: Fut) -> impl Future<Output = ErrorOr<T>>
    where
        Fut: Future<Output = T>,
    {
        async move { self.await.fallback_async(value).await }
    }

    /// Replaces a failure with a value computed asynchronously from its errors.
    fn recover_safe_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.recover_safe_async(f).await }
    }

    /// Replaces the errors of a failure with the output of `error`.
    fn replace_error_async<Fut>(self, error: Fut) -> impl Future<Output = ErrorOr<T>>
    where
        Fut: Future<Output = Error>,
    {
        async move { self.await.replace_error_async(error).await }
    }

    /// Replaces the errors of a failure with one error computed asynchronously.
    fn replace_error_with_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = Error>,
    {
        async move { self.await.replace_error_with_async(f).await }
    }

    /// Replaces the errors of a failure with a list computed asynchronously.
    ///
    /// # Panics
    ///
    /// The returned future panics if the computed list is empty.
    fn replace_errors_with_async<F, Fut, I>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = I>,
        I: IntoIterator<Item = Error>,
    {
        async move { self.await.replace_errors_with_async(f).await }
    }

    /// Fails with `error` if the container is not resolved within `duration`.
    ///
    /// Only the elapsed deadline becomes a failure; the receiver is dropped
    /// and none of its pending steps run.
    #[cfg(feature = "async-tokio")]
    fn timeout_or(self, duration: core::time::Duration, error: Error) -> impl Future<Output = ErrorOr<T>> {
        super::tokio_ext::timeout_or(duration, error, self)
    }

    /// Fails with an `ErrorOr.Timeout` error if the container is not resolved within `duration`.
    #[cfg(feature = "async-tokio")]
    fn with_timeout(self, duration: core::time::Duration) -> impl Future<Output = ErrorOr<T>> {
        super::tokio_ext::with_timeout(duration, self)
    }

    /// Logs every error of the resolved container inside the span current at call time.
    #[cfg(feature = "tracing")]
    fn trace_errors(self) -> crate::tracing_ext::TraceErrorsFuture<Self> {
        crate::tracing_ext::TraceErrorsFuture::new(self, tracing::Span::current())
    }
}

impl<Fut, T> FutureErrorOrExt<T> for Fut where Fut: Future<Output = ErrorOr<T>> {}
