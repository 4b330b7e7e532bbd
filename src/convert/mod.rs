//! Conversion helpers between `ErrorOr`, `Result` and `Option`.
//!
//! These adapters make it straightforward to adopt `error-or` incrementally:
//! wrap existing `Result`s at the boundary and unwrap back into plain
//! `Result`s when handing data to APIs that expect them.
//!
//! # Examples
//!
//! ```
//! use error_or::convert::*;
//! use error_or::{Error, ErrorOr};
//!
//! let result: Result<i32, Error> = Err(Error::conflict());
//! let lifted = result_to_error_or(result);
//! assert!(lifted.is_error());
//!
//! let back = error_or_to_first_error(lifted);
//! assert_eq!(back, Err(Error::conflict()));
//! ```

use crate::types::error::Error;
use crate::types::error_or::{ErrorList, ErrorOr};

/// Converts a `Result` whose error is already an [`Error`].
#[inline]
pub fn result_to_error_or<T>(result: Result<T, Error>) -> ErrorOr<T> {
    match result {
        Ok(value) => ErrorOr::from_value(value),
        Err(error) => ErrorOr::from_error(error),
    }
}

/// Converts into a `Result` carrying the full error list.
#[inline]
pub fn error_or_to_result<T>(error_or: ErrorOr<T>) -> Result<T, ErrorList> {
    error_or.into_result()
}

/// Converts into a `Result` carrying only the primary error.
///
/// # Examples
///
/// ```
/// use error_or::convert::error_or_to_first_error;
/// use error_or::{Error, ErrorOr};
///
/// let failed = ErrorOr::<()>::from_errors([Error::not_found(), Error::conflict()]);
/// assert_eq!(error_or_to_first_error(failed), Err(Error::not_found()));
/// ```
#[inline]
pub fn error_or_to_first_error<T>(error_or: ErrorOr<T>) -> Result<T, Error> {
    error_or.fold_first(Ok, Err)
}

/// Lifts an `Option`, using `error` when it is `None`.
///
/// # Examples
///
/// ```
/// use error_or::convert::option_to_error_or;
/// use error_or::{Error, ErrorKind};
///
/// let missing = option_to_error_or(None::<u8>, Error::not_found());
/// assert_eq!(missing.first_error().kind(), ErrorKind::NotFound);
/// ```
#[inline]
pub fn option_to_error_or<T>(option: Option<T>, error: Error) -> ErrorOr<T> {
    match option {
        Some(value) => ErrorOr::from_value(value),
        None => ErrorOr::from_error(error),
    }
}

/// Drops the errors, keeping only a possible value.
#[inline]
pub fn error_or_to_option<T>(error_or: ErrorOr<T>) -> Option<T> {
    error_or.into_result().ok()
}

impl<T> From<Result<T, Error>> for ErrorOr<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        result_to_error_or(result)
    }
}

impl<T> From<ErrorOr<T>> for Result<T, ErrorList> {
    #[inline]
    fn from(error_or: ErrorOr<T>) -> Self {
        error_or.into_result()
    }
}
