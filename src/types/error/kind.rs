use core::fmt::{self, Display};

/// Named view over an error's numeric classification.
///
/// The six built-in classifications occupy the integers `0..=5`. Any other
/// integer is a valid caller-defined classification and surfaces as
/// [`ErrorKind::Custom`], carrying the integer unchanged.
///
/// # Examples
///
/// ```
/// use error_or::ErrorKind;
///
/// assert_eq!(ErrorKind::from_numeric(2), ErrorKind::Validation);
/// assert_eq!(ErrorKind::from_numeric(42), ErrorKind::Custom(42));
/// assert_eq!(ErrorKind::Custom(7).numeric(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Failure,
    Unexpected,
    Validation,
    Conflict,
    NotFound,
    Unauthorized,
    /// A classification outside the built-in range.
    Custom(i32),
}

impl ErrorKind {
    /// Reinterprets an integer as a named classification when one matches.
    #[inline]
    pub const fn from_numeric(value: i32) -> Self {
        match value {
            0 => Self::Failure,
            1 => Self::Unexpected,
            2 => Self::Validation,
            3 => Self::Conflict,
            4 => Self::NotFound,
            5 => Self::Unauthorized,
            other => Self::Custom(other),
        }
    }

    /// Returns the integer backing this classification.
    #[inline]
    pub const fn numeric(self) -> i32 {
        match self {
            Self::Failure => 0,
            Self::Unexpected => 1,
            Self::Validation => 2,
            Self::Conflict => 3,
            Self::NotFound => 4,
            Self::Unauthorized => 5,
            Self::Custom(value) => value,
        }
    }

    /// Returns `true` for the six built-in classifications.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<i32> for ErrorKind {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_numeric(value)
    }
}

impl From<ErrorKind> for i32 {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        kind.numeric()
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failure => f.write_str("Failure"),
            Self::Unexpected => f.write_str("Unexpected"),
            Self::Validation => f.write_str("Validation"),
            Self::Conflict => f.write_str("Conflict"),
            Self::NotFound => f.write_str("NotFound"),
            Self::Unauthorized => f.write_str("Unauthorized"),
            Self::Custom(value) => write!(f, "Custom({})", value),
        }
    }
}
