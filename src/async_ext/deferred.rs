//! Combinators on an immediate [`ErrorOr`] whose callbacks return futures.
//!
//! Each method is the `_async` counterpart of the immediate combinator of the
//! same base name. The state is inspected first; only the selected callback is
//! called, and only its future is awaited. Futures passed by value (as in
//! [`ErrorOr::fallback_async`]) are dropped unpolled when not needed.

use core::future::Future;

use crate::types::error_or::{ops::first_of, State};
use crate::types::{Error, ErrorList, ErrorOr};

impl<T> ErrorOr<T> {
    /// Awaits exactly one of the two callbacks' futures.
    pub async fn branch_async<V, E, VFut, EFut>(self, on_value: V, on_error: E)
    where
        V: FnOnce(T) -> VFut,
        E: FnOnce(ErrorList) -> EFut,
        VFut: Future<Output = ()>,
        EFut: Future<Output = ()>,
    {
        match self.state {
            State::Value(value) => on_value(value).await,
            State::Errors(errors) => on_error(errors).await,
        }
    }

    /// Like [`branch_async`](Self::branch_async), passing only the primary error.
    pub async fn branch_first_async<V, E, VFut, EFut>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T) -> VFut,
        E: FnOnce(Error) -> EFut,
        VFut: Future<Output = ()>,
        EFut: Future<Output = ()>,
    {
        match self.state {
            State::Value(value) => on_value(value).await,
            State::Errors(errors) => on_first_error(first_of(errors)).await,
        }
    }

    /// Resolves the container through one of two asynchronous callbacks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_or::prelude_async::*;
    ///
    /// async fn render(result: ErrorOr<u32>) -> String {
    ///     result
    ///         .fold_async(
    ///             |id| async move { format!("user {}", id) },
    ///             |errors| async move { format!("{} error(s)", errors.len()) },
    ///         )
    ///         .await
    /// }
    /// ```
    pub async fn fold_async<R, V, E, VFut, EFut>(self, on_value: V, on_error: E) -> R
    where
        V: FnOnce(T) -> VFut,
        E: FnOnce(ErrorList) -> EFut,
        VFut: Future<Output = R>,
        EFut: Future<Output = R>,
    {
        match self.state {
            State::Value(value) => on_value(value).await,
            State::Errors(errors) => on_error(errors).await,
        }
    }

    /// Like [`fold_async`](Self::fold_async), passing only the primary error.
    pub async fn fold_first_async<R, V, E, VFut, EFut>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> VFut,
        E: FnOnce(Error) -> EFut,
        VFut: Future<Output = R>,
        EFut: Future<Output = R>,
    {
        match self.state {
            State::Value(value) => on_value(value).await,
            State::Errors(errors) => on_first_error(first_of(errors)).await,
        }
    }

    /// Transforms the value asynchronously; errors pass through and `f` is not called.
    pub async fn map_async<U, F, Fut>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.state {
            State::Value(value) => ErrorOr::from_value(f(value).await),
            State::Errors(errors) => ErrorOr::failed(errors),
        }
    }

    /// Chains an asynchronous step that may itself fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_or::prelude_async::*;
    ///
    /// async fn load_name(id: u32) -> ErrorOr<String> {
    ///     if id == 0 {
    ///         Error::not_found().into_failure()
    ///     } else {
    ///         ErrorOr::from_value(format!("user-{}", id))
    ///     }
    /// }
    ///
    /// async fn example() -> ErrorOr<usize> {
    ///     ErrorOr::from_value(7)
    ///         .and_then_async(load_name)
    ///         .await
    ///         .map(|name| name.len())
    /// }
    /// ```
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        match self.state {
            State::Value(value) => f(value).await,
            State::Errors(errors) => ErrorOr::failed(errors),
        }
    }

    /// Awaits a side effect on the value, then passes the container through unchanged.
    ///
    /// The returned future cannot borrow the value; clone what it needs.
    pub async fn inspect_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let State::Value(value) = &self.state {
            f(value).await;
        }
        self
    }

    /// Replaces a failure with the container produced by an asynchronous recovery.
    pub async fn recover_async<F, Fut>(self, recovery: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = ErrorOr<T>>,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => recovery(errors).await,
        }
    }

    /// Replaces a failure with the output of `value`; on success `value` is never polled.
    pub async fn fallback_async<Fut>(self, value: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        match self.state {
            State::Value(current) => Self::from_value(current),
            State::Errors(_) => Self::from_value(value.await),
        }
    }

    /// Replaces a failure with a value computed asynchronously from its errors.
    pub async fn recover_safe_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = T>,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => Self::from_value(f(errors).await),
        }
    }

    /// Replaces the errors of a failure with the output of `error`.
    pub async fn replace_error_async<Fut>(self, error: Fut) -> Self
    where
        Fut: Future<Output = Error>,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(_) => Self::from_error(error.await),
        }
    }

    /// Replaces the errors of a failure with one error computed asynchronously.
    pub async fn replace_error_with_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = Error>,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => Self::from_error(f(errors).await),
        }
    }

    /// Replaces the errors of a failure with a list computed asynchronously.
    ///
    /// # Panics
    ///
    /// Panics if the computed list is empty.
    pub async fn replace_errors_with_async<F, Fut, I>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = I>,
        I: IntoIterator<Item = Error>,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => Self::from_errors(f(errors).await),
        }
    }
}
