//! Zero-data success tokens.
//!
//! Use these as the payload of an [`ErrorOr`](crate::ErrorOr) when an operation
//! has nothing to return beyond the fact that it succeeded. Every instance of a
//! token equals every other instance of the same token.
//!
//! # Examples
//!
//! ```
//! use error_or::markers::{result, Deleted};
//! use error_or::ErrorOr;
//!
//! fn delete_user(_id: u64) -> ErrorOr<Deleted> {
//!     ErrorOr::from_value(result::DELETED)
//! }
//!
//! assert_eq!(delete_user(7).value(), Deleted);
//! ```

use core::fmt::{self, Display};

macro_rules! marker_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name;

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

marker_token!(
    /// Generic success.
    Success
);
marker_token!(
    /// A resource was created.
    Created
);
marker_token!(
    /// A resource was deleted.
    Deleted
);
marker_token!(
    /// A resource was updated.
    Updated
);

/// Ready-made token values.
pub mod result {
    use super::{Created, Deleted, Success, Updated};

    pub const SUCCESS: Success = Success;
    pub const CREATED: Created = Created;
    pub const DELETED: Deleted = Deleted;
    pub const UPDATED: Updated = Updated;
}
