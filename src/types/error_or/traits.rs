use super::{EmptyErrors, ErrorList, ErrorOr, State};
use crate::types::alloc_type::Vec;
use crate::types::error::Error;
use crate::types::error_formatter::ErrorFormatConfig;
use core::fmt::{self, Debug, Display};

impl<T: Debug> Debug for ErrorOr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => f
                .debug_struct("ErrorOr")
                .field("is_error", &false)
                .field("value", value)
                .finish(),
            State::Errors(errors) => f
                .debug_struct("ErrorOr")
                .field("is_error", &true)
                .field("errors", &errors.as_slice())
                .finish(),
        }
    }
}

/// Displays the value, or the error list rendered with [`ErrorFormatConfig::default`].
impl<T: Display> Display for ErrorOr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Value(value) => Display::fmt(value, f),
            State::Errors(errors) => {
                let config = if f.alternate() {
                    ErrorFormatConfig::pretty()
                } else {
                    ErrorFormatConfig::default()
                };
                config.write_errors(f, errors)
            },
        }
    }
}

impl<T> From<Error> for ErrorOr<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

/// # Panics
///
/// Panics when `N == 0`.
impl<T, const N: usize> From<[Error; N]> for ErrorOr<T> {
    #[inline]
    fn from(errors: [Error; N]) -> Self {
        Self::from_errors(errors)
    }
}

impl<T> TryFrom<Vec<Error>> for ErrorOr<T> {
    type Error = EmptyErrors;

    #[inline]
    fn try_from(errors: Vec<Error>) -> Result<Self, Self::Error> {
        Self::try_from_errors(errors)
    }
}

impl<T> TryFrom<ErrorList> for ErrorOr<T> {
    type Error = EmptyErrors;

    #[inline]
    fn try_from(errors: ErrorList) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            return Err(EmptyErrors);
        }
        Ok(Self::failed(errors))
    }
}

/// Collects successful values, stopping at the first failed item.
///
/// The result carries that item's errors unchanged; items after it are not
/// pulled from the iterator.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorOr};
///
/// let all: ErrorOr<Vec<i32>> = vec![ErrorOr::from_value(1), ErrorOr::from_value(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all.value(), vec![1, 2]);
///
/// let first_failure: ErrorOr<Vec<i32>> = vec![
///     ErrorOr::from_value(1),
///     ErrorOr::from_error(Error::conflict()),
///     ErrorOr::from_error(Error::not_found()),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(first_failure.errors(), &[Error::conflict()]);
/// ```
impl<T, C> FromIterator<ErrorOr<T>> for ErrorOr<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = ErrorOr<T>>>(iter: I) -> Self {
        let mut failure: Option<ErrorList> = None;
        let collected: C = iter
            .into_iter()
            .map_while(|item| match item.state {
                State::Value(value) => Some(value),
                State::Errors(errors) => {
                    failure = Some(errors);
                    None
                },
            })
            .collect();

        match failure {
            Some(errors) => ErrorOr::failed(errors),
            None => ErrorOr::from_value(collected),
        }
    }
}
