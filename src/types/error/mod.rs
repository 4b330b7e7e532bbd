//! Structured error value with a code, description, classification and metadata.
//!
//! [`Error`] is an immutable value: every "setter" consumes the error and
//! returns a new one. Errors are built through named factories, one per
//! built-in [`ErrorKind`], plus [`Error::custom`] for caller-defined
//! classifications.
//!
//! # Examples
//!
//! ```
//! use error_or::{Error, ErrorKind};
//!
//! let err = Error::validation()
//!     .with_code("User.Name")
//!     .with_description("Name is too short.")
//!     .with_meta("min_length", 3);
//!
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! assert_eq!(err.code(), "User.Name");
//! assert_eq!(err.metadata()["min_length"].as_int(), Some(3));
//! ```

use crate::types::alloc_type::{Cow, String};
use crate::types::ErrorOr;

mod kind;
mod metadata;
mod traits;

pub use kind::ErrorKind;
pub use metadata::{Metadata, MetadataValue};

/// A single failure cause.
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Error {
    pub(crate) code: Cow<'static, str>,
    pub(crate) description: Cow<'static, str>,
    pub(crate) numeric_kind: i32,
    pub(crate) metadata: Metadata,
}

impl Error {
    /// Creates an error with an explicit classification, code and description.
    #[inline]
    pub fn new<C, D>(kind: ErrorKind, code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::from_parts(code.into(), description.into(), kind.numeric())
    }

    #[inline]
    pub(crate) const fn from_parts(
        code: Cow<'static, str>,
        description: Cow<'static, str>,
        numeric_kind: i32,
    ) -> Self {
        Self { code, description, numeric_kind, metadata: Metadata::new() }
    }

    /// `General.Failure`: a failure has occurred.
    #[inline]
    pub const fn failure() -> Self {
        Self::builtin("General.Failure", "A failure has occurred.", ErrorKind::Failure)
    }

    /// `General.Unexpected`: an unexpected error has occurred.
    #[inline]
    pub const fn unexpected() -> Self {
        Self::builtin(
            "General.Unexpected",
            "An unexpected error has occurred.",
            ErrorKind::Unexpected,
        )
    }

    /// `General.Validation`: a validation error has occurred.
    #[inline]
    pub const fn validation() -> Self {
        Self::builtin(
            "General.Validation",
            "A validation error has occurred.",
            ErrorKind::Validation,
        )
    }

    /// `General.Conflict`: a conflict error has occurred.
    #[inline]
    pub const fn conflict() -> Self {
        Self::builtin("General.Conflict", "A conflict error has occurred.", ErrorKind::Conflict)
    }

    /// `General.NotFound`: a 'Not Found' error has occurred.
    #[inline]
    pub const fn not_found() -> Self {
        Self::builtin("General.NotFound", "A 'Not Found' error has occurred.", ErrorKind::NotFound)
    }

    /// `General.Unauthorized`: an 'Unauthorized' error has occurred.
    #[inline]
    pub const fn unauthorized() -> Self {
        Self::builtin(
            "General.Unauthorized",
            "An 'Unauthorized' error has occurred.",
            ErrorKind::Unauthorized,
        )
    }

    /// Creates an error with a caller-defined numeric classification.
    ///
    /// Any integer is accepted. [`numeric_kind`](Self::numeric_kind) returns it
    /// verbatim; [`kind`](Self::kind) maps it onto a built-in classification
    /// only when one matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorKind};
    ///
    /// let err = Error::custom(418, "Tea.Pot", "I'm a teapot.");
    /// assert_eq!(err.numeric_kind(), 418);
    /// assert_eq!(err.kind(), ErrorKind::Custom(418));
    ///
    /// let named = Error::custom(4, "Lookup.Missing", "Missing.");
    /// assert_eq!(named.kind(), ErrorKind::NotFound);
    /// ```
    #[inline]
    pub fn custom<C, D>(numeric_kind: i32, code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self::from_parts(code.into(), description.into(), numeric_kind)
    }

    #[inline]
    const fn builtin(code: &'static str, description: &'static str, kind: ErrorKind) -> Self {
        Self::from_parts(Cow::Borrowed(code), Cow::Borrowed(description), kind.numeric())
    }

    /// Returns a copy of this error with a different code.
    #[inline]
    pub fn with_code<C: Into<Cow<'static, str>>>(mut self, code: C) -> Self {
        self.code = code.into();
        self
    }

    /// Returns a copy of this error with a different description.
    #[inline]
    pub fn with_description<D: Into<Cow<'static, str>>>(mut self, description: D) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the whole metadata map.
    #[inline]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Adds (or overwrites) a single metadata entry.
    #[inline]
    pub fn with_meta<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Named classification, derived from [`numeric_kind`](Self::numeric_kind).
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::from_numeric(self.numeric_kind)
    }

    /// The exact integer this error was classified with.
    #[inline]
    pub const fn numeric_kind(&self) -> i32 {
        self.numeric_kind
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Looks up one metadata entry.
    #[inline]
    pub fn meta(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Lifts this error into a failed [`ErrorOr`].
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let failed: ErrorOr<i32> = Error::unauthorized().into_failure();
    /// assert_eq!(failed.first_error(), &Error::unauthorized());
    /// ```
    #[inline]
    pub fn into_failure<T>(self) -> ErrorOr<T> {
        ErrorOr::from_error(self)
    }
}
