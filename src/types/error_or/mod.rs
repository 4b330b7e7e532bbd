//! The `ErrorOr` container: either one value or a non-empty list of [`Error`]s.
//!
//! # Examples
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! let ok = ErrorOr::from_value(5);
//! assert!(!ok.is_error());
//! assert_eq!(ok.value(), 5);
//!
//! let failed = ErrorOr::<i32>::from_errors([Error::validation(), Error::conflict()]);
//! assert!(failed.is_error());
//! assert_eq!(failed.errors().len(), 2);
//! assert_eq!(failed.first_error(), &Error::validation());
//! ```

use crate::types::alloc_type::{Cow, String};
use crate::types::error::Error;
use crate::types::error_formatter::{ErrorFormatConfig, ErrorListFormat};
use crate::types::ErrorVec;
use core::fmt::{self, Display};

pub(crate) mod ops;
mod traits;

/// The error list stored by a failed [`ErrorOr`]. Never empty inside a container.
pub type ErrorList = ErrorVec<Error>;

/// Returned by [`ErrorOr::first_error`] when the container holds a value.
pub static NO_FIRST_ERROR: Error = Error::from_parts(
    Cow::Borrowed("ErrorOr.NoFirstError"),
    Cow::Borrowed("First error cannot be retrieved from a successful ErrorOr."),
    1,
);

/// The single entry of [`ErrorOr::errors`] when the container holds a value.
pub static NO_ERRORS: Error = Error::from_parts(
    Cow::Borrowed("ErrorOr.NoErrors"),
    Cow::Borrowed("Error list cannot be retrieved from a successful ErrorOr."),
    1,
);

/// A value of type `T`, or the errors that prevented producing one.
///
/// The failure state always carries at least one error; the first one is the
/// primary cause. An `ErrorOr` is never mutated in place: every combinator
/// consumes it and returns a new container.
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ErrorOr<T> {
    pub(crate) state: State<T>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) enum State<T> {
    Value(T),
    Errors(ErrorList),
}

impl<T> ErrorOr<T> {
    /// Creates a successful container.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self { state: State::Value(value) }
    }

    /// Creates a failed container holding a single error.
    #[inline]
    pub fn from_error(error: Error) -> Self {
        let mut errors = ErrorList::new();
        errors.push(error);
        Self { state: State::Errors(errors) }
    }

    /// Creates a failed container from a list of errors, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `errors` yields nothing. Use
    /// [`try_from_errors`](Self::try_from_errors) when the list may be empty.
    #[inline]
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        match Self::try_from_errors(errors) {
            Ok(failed) => failed,
            Err(empty) => panic!("{}", empty),
        }
    }

    /// Creates a failed container, rejecting an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{EmptyErrors, Error, ErrorOr};
    ///
    /// assert_eq!(ErrorOr::<()>::try_from_errors(Vec::new()), Err(EmptyErrors));
    /// assert!(ErrorOr::<()>::try_from_errors([Error::failure()]).is_ok());
    /// ```
    pub fn try_from_errors<I>(errors: I) -> Result<Self, EmptyErrors>
    where
        I: IntoIterator<Item = Error>,
    {
        let errors: ErrorList = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(EmptyErrors);
        }
        Ok(Self { state: State::Errors(errors) })
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self.state, State::Errors(_))
    }

    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self.state, State::Value(_))
    }

    /// Returns a copy of the value, or `T::default()` when the container failed.
    ///
    /// Reading the value of a failed container is not a fault; combinators rely
    /// on this accessor never panicking. Prefer [`as_value`](Self::as_value)
    /// when the two cases must be told apart.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Clone + Default,
    {
        match &self.state {
            State::Value(value) => value.clone(),
            State::Errors(_) => T::default(),
        }
    }

    /// Consumes the container, returning the value or `T::default()`.
    #[inline]
    pub fn into_value(self) -> T
    where
        T: Default,
    {
        match self.state {
            State::Value(value) => value,
            State::Errors(_) => T::default(),
        }
    }

    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match &self.state {
            State::Value(value) => Some(value),
            State::Errors(_) => None,
        }
    }

    /// Returns the stored errors, or a one-element slice holding [`NO_ERRORS`]
    /// when the container holds a value. Never empty.
    #[inline]
    pub fn errors(&self) -> &[Error] {
        match &self.state {
            State::Value(_) => core::slice::from_ref(&NO_ERRORS),
            State::Errors(errors) => errors,
        }
    }

    /// Returns the stored errors, or an empty slice when the container holds a value.
    #[inline]
    pub fn errors_or_empty(&self) -> &[Error] {
        match &self.state {
            State::Value(_) => &[],
            State::Errors(errors) => errors,
        }
    }

    /// Returns the primary error, or [`NO_FIRST_ERROR`] when the container holds a value.
    #[inline]
    pub fn first_error(&self) -> &Error {
        match &self.state {
            State::Value(_) => &NO_FIRST_ERROR,
            State::Errors(errors) => &errors[0],
        }
    }

    #[inline]
    pub fn into_errors(self) -> Option<ErrorList> {
        match self.state {
            State::Value(_) => None,
            State::Errors(errors) => Some(errors),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorList> {
        match self.state {
            State::Value(value) => Ok(value),
            State::Errors(errors) => Err(errors),
        }
    }

    /// Borrows the container as `ErrorOr<&T>`, cloning the error list on failure.
    #[inline]
    pub fn as_ref(&self) -> ErrorOr<&T> {
        match &self.state {
            State::Value(value) => ErrorOr::from_value(value),
            State::Errors(errors) => ErrorOr { state: State::Errors(errors.clone()) },
        }
    }

    /// Returns a display builder over the stored errors (empty on success).
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let failed = ErrorOr::<()>::from_errors([Error::not_found(), Error::unauthorized()]);
    /// let text = failed.fmt_errors().show_kind(true).to_string();
    /// assert!(text.starts_with("[NotFound] General.NotFound"));
    /// assert!(text.contains("[Unauthorized]"));
    /// ```
    #[inline]
    pub fn fmt_errors(&self) -> ErrorListFormat<'_> {
        ErrorListFormat::new(self.errors_or_empty())
    }

    /// Renders the stored errors with `config`; empty on success.
    #[must_use]
    pub fn format_errors(&self, config: &ErrorFormatConfig) -> String {
        config.format_errors(self.errors_or_empty())
    }

    #[inline]
    pub(crate) fn failed(errors: ErrorList) -> Self {
        debug_assert!(!errors.is_empty());
        Self { state: State::Errors(errors) }
    }
}

/// A failed [`ErrorOr`] was requested from an empty error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyErrors;

impl Display for EmptyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot create a failed ErrorOr from an empty error list")
    }
}

impl core::error::Error for EmptyErrors {}
