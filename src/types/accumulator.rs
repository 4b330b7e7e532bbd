use crate::types::error::Error;
use crate::types::error_or::{ErrorList, ErrorOr};

/// Collects independent errors before deciding the outcome of an operation.
///
/// Where a chain of [`ErrorOr::and_then`] stops at the first failing step,
/// an accumulator lets validation-style code check every rule and report all
/// violations at once. An empty accumulator finishes as a success.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorAccumulator};
///
/// let name = "";
/// let age = 7;
///
/// let mut errors = ErrorAccumulator::new();
/// errors.check(!name.is_empty(), || Error::validation().with_code("User.Name"));
/// errors.check(age >= 18, || Error::validation().with_code("User.Age"));
///
/// let result = errors.finish((name, age));
/// assert_eq!(result.errors().len(), 2);
/// assert_eq!(result.first_error().code(), "User.Name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ErrorAccumulator {
    items: ErrorList,
}

impl ErrorAccumulator {
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorList::new() }
    }

    #[inline]
    pub fn push(&mut self, error: Error) {
        self.items.push(error);
    }

    /// Records the error produced by `error` when `condition` is false.
    ///
    /// Returns `condition` so checks can gate later work.
    #[inline]
    pub fn check<F>(&mut self, condition: bool, error: F) -> bool
    where
        F: FnOnce() -> Error,
    {
        if !condition {
            self.items.push(error());
        }
        condition
    }

    /// Keeps the value of `result`, recording its errors on failure.
    #[inline]
    pub fn absorb<T>(&mut self, result: ErrorOr<T>) -> Option<T> {
        match result.into_result() {
            Ok(value) => Some(value),
            Err(errors) => {
                self.items.extend(errors);
                None
            },
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// Succeeds with `value` when nothing was recorded, otherwise fails with
    /// every recorded error in insertion order.
    #[inline]
    pub fn finish<T>(self, value: T) -> ErrorOr<T> {
        self.finish_with(|| value)
    }

    /// Like [`finish`](Self::finish), but only builds the value on success.
    #[inline]
    pub fn finish_with<T, F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce() -> T,
    {
        if self.items.is_empty() {
            ErrorOr::from_value(f())
        } else {
            ErrorOr::failed(self.items)
        }
    }

    #[inline]
    pub fn into_inner(self) -> ErrorList {
        self.items
    }
}

impl Extend<Error> for ErrorAccumulator {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<Error> for ErrorAccumulator {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl IntoIterator for ErrorAccumulator {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorAccumulator {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
