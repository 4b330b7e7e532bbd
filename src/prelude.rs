//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_or::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Error`], [`ErrorKind`], [`ErrorOr`], [`ErrorList`], [`ErrorAccumulator`]
//! - **Markers**: [`Success`], [`Created`], [`Deleted`], [`Updated`]
//! - **Traits**: [`Lift`], [`ResultExt`], [`OptionExt`]
//!
//! # Examples
//!
//! ```
//! use error_or::prelude::*;
//!
//! fn parse_age(input: &str) -> ErrorOr<u8> {
//!     input
//!         .parse::<u8>()
//!         .or_error(|_| Error::validation().with_code("Age.Invalid"))
//!         .and_then(|age| {
//!             if age >= 18 {
//!                 age.lift()
//!             } else {
//!                 Error::validation().with_code("Age.TooYoung").into_failure()
//!             }
//!         })
//! }
//!
//! assert_eq!(parse_age("42").value(), 42);
//! assert_eq!(parse_age("7").first_error().code(), "Age.TooYoung");
//! ```

// Core types
pub use crate::types::{
    Error, ErrorAccumulator, ErrorFormatConfig, ErrorKind, ErrorList, ErrorOr, MetadataValue,
};

// Marker tokens
pub use crate::types::markers::{result, Created, Deleted, Success, Updated};

// Traits
pub use crate::traits::{Lift, OptionExt, ResultExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::ErrorOrTraceExt;
