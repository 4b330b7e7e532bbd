//! Extension traits for wrapping foreign `Result` and `Option` values.
//!
//! Foreign error types are never converted implicitly: the caller decides
//! which [`Error`] a failure becomes.
//!
//! # Examples
//!
//! ```
//! use error_or::traits::ResultExt;
//! use error_or::{Error, ErrorOr};
//!
//! fn parse_port(input: &str) -> ErrorOr<u16> {
//!     input.parse::<u16>().or_error(|e| {
//!         Error::validation()
//!             .with_code("Config.Port")
//!             .with_meta("reason", e.to_string())
//!     })
//! }
//!
//! assert_eq!(parse_port("8080").value(), 8080);
//! assert_eq!(parse_port("http").first_error().code(), "Config.Port");
//! ```

use crate::types::{Error, ErrorOr};

/// Lifts a `Result<T, E>` into an [`ErrorOr<T>`], mapping `E` through a closure.
pub trait ResultExt<T, E> {
    /// Maps the error with `f`; the closure only runs on `Err`.
    fn or_error<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce(E) -> Error;

    /// Replaces any error with `error`.
    fn or_error_value(self, error: Error) -> ErrorOr<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn or_error<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => ErrorOr::from_value(value),
            Err(error) => ErrorOr::from_error(f(error)),
        }
    }

    #[inline]
    fn or_error_value(self, error: Error) -> ErrorOr<T> {
        self.or_error(|_| error)
    }
}

/// Lifts an `Option<T>` into an [`ErrorOr<T>`].
pub trait OptionExt<T> {
    /// Uses `error` when the option is `None`.
    fn ok_or_error(self, error: Error) -> ErrorOr<T>;

    /// Builds the error lazily when the option is `None`.
    fn ok_or_else_error<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce() -> Error;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_error(self, error: Error) -> ErrorOr<T> {
        self.ok_or_else_error(|| error)
    }

    #[inline]
    fn ok_or_else_error<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce() -> Error,
    {
        match self {
            Some(value) => ErrorOr::from_value(value),
            None => ErrorOr::from_error(f()),
        }
    }
}
