use super::Error;
use core::fmt::{self, Debug, Display};

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("code", &self.code)
            .field("description", &self.description)
            .field("kind", &self.kind())
            .field("numeric_kind", &self.numeric_kind)
            .field("metadata", &self.metadata)
            .finish()
    }
}

impl core::error::Error for Error {}
