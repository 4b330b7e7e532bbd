//! A value that is either a success payload or a non-empty list of structured errors.
//!
//! [`ErrorOr<T>`] carries the outcome of an operation without exceptions or
//! panics. A failure holds one or more [`Error`] values, each with a stable
//! code, a description, a numeric kind and free-form metadata. Combinators
//! chain work on the success path, recover on the failure path, and resolve
//! the container exhaustively with `branch` and `fold`.
//!
//! The same combinators exist in deferred form for async code (requires the
//! `async` feature), see [`async_ext`].
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use error_or::prelude::*;
//!
//! fn parse(input: &str) -> ErrorOr<i32> {
//!     input.parse::<i32>().or_error(|_| Error::validation().with_code("Input.NotANumber"))
//! }
//!
//! let doubled = parse("5").map(|n| n * 2).map(|n| n.to_string());
//! assert_eq!(doubled.value(), "10");
//!
//! let recovered = parse("x")
//!     .map(|n| n * 2)
//!     .map(|n| n.to_string())
//!     .recover_safe(|_| String::from("oh no"));
//! assert_eq!(recovered.value(), "oh no");
//! ```
//!
//! ## Accumulating validation errors
//!
//! ```
//! use error_or::prelude::*;
//!
//! let (name, age) = ("", 150);
//!
//! let mut errors = ErrorAccumulator::new();
//! errors.check(!name.is_empty(), || Error::validation().with_code("Name.Empty"));
//! errors.check(age <= 130, || Error::validation().with_code("Age.OutOfRange"));
//!
//! let created = errors.finish(result::CREATED);
//! assert_eq!(created.errors().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `ErrorOr`, `Result` and `Option`
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for lifting plain values into `ErrorOr`
pub mod traits;
/// Error, ErrorOr and their supporting types
pub mod types;

/// Deferred combinators (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub mod prelude_async;

/// Structured logging of failures (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use convert::*;
pub use traits::*;
pub use types::{
    markers, Created, Deleted, EmptyErrors, Error, ErrorAccumulator, ErrorFormatConfig, ErrorKind,
    ErrorList, ErrorListFormat, ErrorOr, ErrorVec, Metadata, MetadataValue, Success, Updated,
    NO_ERRORS, NO_FIRST_ERROR,
};
