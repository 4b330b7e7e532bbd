//! Immediate combinators: branch, fold, bind-or-propagate and recover.
//!
//! Every method consumes the container. Success-side callbacks run only in the
//! value state and failure-side callbacks only in the error state; the other
//! side's callback is never invoked. A failed container travels through
//! `map` / `and_then` / `inspect` with its error list untouched.

use super::{ErrorList, ErrorOr, State, NO_FIRST_ERROR};
use crate::types::error::Error;

impl<T> ErrorOr<T> {
    /// Runs exactly one of the two callbacks.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// ErrorOr::<i32>::from_error(Error::conflict())
    ///     .branch(|_| seen.set(1), |errors| seen.set(errors.len() * 10));
    /// assert_eq!(seen.get(), 10);
    /// ```
    #[inline]
    pub fn branch<V, E>(self, on_value: V, on_error: E)
    where
        V: FnOnce(T),
        E: FnOnce(ErrorList),
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_error(errors),
        }
    }

    /// Like [`branch`](Self::branch), but the error callback receives only the primary error.
    #[inline]
    pub fn branch_first<V, E>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T),
        E: FnOnce(Error),
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_first_error(first_of(errors)),
        }
    }

    /// Resolves the container into a single value of type `R`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let describe = |r: ErrorOr<u32>| r.fold(|v| v.to_string(), |errs| format!("{} error(s)", errs.len()));
    ///
    /// assert_eq!(describe(ErrorOr::from_value(7)), "7");
    /// assert_eq!(describe(ErrorOr::from_errors([Error::failure(), Error::conflict()])), "2 error(s)");
    /// ```
    #[inline]
    pub fn fold<R, V, E>(self, on_value: V, on_error: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(ErrorList) -> R,
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_error(errors),
        }
    }

    /// Like [`fold`](Self::fold), but the error callback receives only the primary error.
    #[inline]
    pub fn fold_first<R, V, E>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        match self.state {
            State::Value(value) => on_value(value),
            State::Errors(errors) => on_first_error(first_of(errors)),
        }
    }

    /// Transforms the value; a failed container passes through and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// assert_eq!(ErrorOr::from_value(21).map(|x| x * 2).value(), 42);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Value(value) => ErrorOr::from_value(f(value)),
            State::Errors(errors) => ErrorOr::failed(errors),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// On failure the current errors propagate unchanged and `f` is not called.
    /// Once a step fails, every later `and_then` is skipped until a recovery
    /// step clears the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// fn parse(input: &str) -> ErrorOr<i32> {
    ///     input
    ///         .parse()
    ///         .map_or_else(|_| Error::validation().into_failure(), ErrorOr::from_value)
    /// }
    ///
    /// let doubled = ErrorOr::from_value("5").and_then(parse).map(|x| x * 2);
    /// assert_eq!(doubled.value(), 10);
    ///
    /// let failed = ErrorOr::from_value("x").and_then(parse).map(|x| x * 2);
    /// assert_eq!(failed.errors(), &[Error::validation()]);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> ErrorOr<U>,
    {
        match self.state {
            State::Value(value) => f(value),
            State::Errors(errors) => ErrorOr::failed(errors),
        }
    }

    /// Runs a side effect on the value and passes the container through unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Value(value) = &self.state {
            f(value);
        }
        self
    }

    /// Replaces a failure with whatever `recovery` returns.
    ///
    /// `recovery` receives the full error list and may produce a value, a new
    /// error, or a new error list. A successful container passes through and
    /// `recovery` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let retried = ErrorOr::<i32>::from_error(Error::not_found())
    ///     .recover(|errors| {
    ///         if errors[0] == Error::not_found() {
    ///             ErrorOr::from_value(0)
    ///         } else {
    ///             ErrorOr::from_errors(errors)
    ///         }
    ///     });
    /// assert_eq!(retried.value(), 0);
    /// ```
    #[inline]
    pub fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(ErrorList) -> ErrorOr<T>,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => recovery(errors),
        }
    }

    /// Replaces a failure with `value`.
    #[inline]
    pub fn fallback(self, value: T) -> Self {
        match self.state {
            State::Value(current) => Self::from_value(current),
            State::Errors(_) => Self::from_value(value),
        }
    }

    /// Replaces a failure with a value computed from its errors.
    #[inline]
    pub fn recover_safe<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> T,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => Self::from_value(f(errors)),
        }
    }

    /// Replaces the errors of a failure with a single `error`.
    #[inline]
    pub fn replace_error(self, error: Error) -> Self {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(_) => Self::from_error(error),
        }
    }

    /// Replaces the errors of a failure with a single error computed from them.
    #[inline]
    pub fn replace_error_with<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Error,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => Self::from_error(f(errors)),
        }
    }

    /// Replaces the errors of a failure with a new list computed from them.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns an empty list.
    #[inline]
    pub fn replace_errors_with<F, I>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> I,
        I: IntoIterator<Item = Error>,
    {
        match self.state {
            State::Value(value) => Self::from_value(value),
            State::Errors(errors) => Self::from_errors(f(errors)),
        }
    }
}

impl<T> ErrorOr<ErrorOr<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> ErrorOr<T> {
        self.and_then(|inner| inner)
    }
}

/// Takes the primary error out of a non-empty list.
#[inline]
pub(crate) fn first_of(errors: ErrorList) -> Error {
    let mut errors = errors.into_iter();
    match errors.next() {
        Some(first) => first,
        // Unreachable for lists stored in a container.
        None => NO_FIRST_ERROR.clone(),
    }
}
