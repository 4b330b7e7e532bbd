use crate::types::ErrorOr;

/// Fluent entry point for starting a chain from a bare value.
///
/// Implemented for every sized type. Errors are lifted with
/// [`Error::into_failure`](crate::Error::into_failure) or
/// [`ErrorOr::from_errors`] instead; calling `lift` on an [`Error`](crate::Error)
/// produces a *successful* `ErrorOr<Error>`.
///
/// # Examples
///
/// ```
/// use error_or::traits::Lift;
///
/// let doubled = "5"
///     .lift()
///     .map(|s| s.parse::<i32>().unwrap_or_default())
///     .map(|n| n * 2);
///
/// assert_eq!(doubled.value(), 10);
/// assert_eq!(5_i32.lift().value(), 5);
/// ```
pub trait Lift: Sized {
    /// Wraps `self` in a successful container.
    #[inline]
    fn lift(self) -> ErrorOr<Self> {
        ErrorOr::from_value(self)
    }
}

impl<T> Lift for T {}
