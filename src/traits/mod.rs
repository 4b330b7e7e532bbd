//! Extension traits for entering the `ErrorOr` world.
//!
//! - [`Lift`]: wraps any value in a successful [`ErrorOr`](crate::ErrorOr)
//! - [`ResultExt`]: lifts a foreign `Result`, mapping its error explicitly
//! - [`OptionExt`]: lifts an `Option` with a caller-chosen error
//!
//! # Examples
//!
//! ```
//! use error_or::traits::{Lift, OptionExt};
//! use error_or::Error;
//!
//! let found = Some(3).ok_or_error(Error::not_found());
//! assert_eq!(found, 3_i32.lift());
//! ```

pub mod lift;
pub mod result_ext;

pub use lift::Lift;
pub use result_ext::{OptionExt, ResultExt};
