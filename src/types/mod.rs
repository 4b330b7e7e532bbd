//! Value types: [`Error`], the [`ErrorOr`] container and their helpers.
//!
//! # Examples
//!
//! ```
//! use error_or::{Error, ErrorOr};
//!
//! let result = ErrorOr::<u32>::from_error(Error::not_found().with_code("User.NotFound"))
//!     .map(|id| id + 1)
//!     .fallback(0);
//!
//! assert_eq!(result.value(), 0);
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;
pub mod error;
pub mod error_formatter;
pub mod error_or;
pub mod markers;

pub use accumulator::ErrorAccumulator;
pub use error::{Error, ErrorKind, Metadata, MetadataValue};
pub use error_formatter::{ErrorFormatConfig, ErrorListFormat};
pub use error_or::{EmptyErrors, ErrorList, ErrorOr, NO_ERRORS, NO_FIRST_ERROR};
pub use markers::{Created, Deleted, Success, Updated};

/// SmallVec-backed collection used for error lists.
///
/// Uses inline storage for one element, so the common single-error failure
/// does not allocate for the list itself.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
