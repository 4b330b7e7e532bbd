//! Error list formatting utilities.

use crate::types::alloc_type::String;
use crate::types::error::Error;
use core::fmt::{self, Display, Write};

/// Controls how a list of [`Error`]s is rendered as text.
///
/// Rendering is for logs and diagnostics only; the output format carries no
/// compatibility guarantee.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorFormatConfig};
///
/// let errors = [Error::validation().with_code("Name"), Error::conflict().with_code("Id")];
///
/// let compact = ErrorFormatConfig::compact().format_errors(&errors);
/// assert_eq!(compact, "Name: A validation error has occurred. | Id: A conflict error has occurred.");
///
/// let verbose = ErrorFormatConfig::verbose().format_errors(&errors[..1]);
/// assert_eq!(verbose, "[Validation] Name: A validation error has occurred.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub item_prefix: Option<String>,
    pub last_prefix: Option<String>,
    pub show_kind: bool,
    pub show_metadata: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            item_prefix: None,
            last_prefix: None,
            show_kind: false,
            show_metadata: false,
        }
    }
}

impl ErrorFormatConfig {
    /// One error per line, tree-style, with classification.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            item_prefix: Some("├─ ".into()),
            last_prefix: Some("└─ ".into()),
            show_kind: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// Single line with classification and metadata.
    #[inline]
    pub fn verbose() -> Self {
        Self { show_kind: true, show_metadata: true, ..Default::default() }
    }

    /// Writes `errors` into any `fmt::Write` sink.
    pub fn write_errors<W: Write>(&self, out: &mut W, errors: &[Error]) -> fmt::Result {
        let last_idx = errors.len().saturating_sub(1);
        for (i, error) in errors.iter().enumerate() {
            if i > 0 {
                out.write_str(&self.separator)?;
            }

            let prefix = if i == last_idx {
                self.last_prefix.as_ref().or(self.item_prefix.as_ref())
            } else {
                self.item_prefix.as_ref()
            };
            if let Some(p) = prefix {
                out.write_str(p)?;
            }

            self.write_error(out, error)?;
        }
        Ok(())
    }

    fn write_error<W: Write>(&self, out: &mut W, error: &Error) -> fmt::Result {
        if self.show_kind {
            write!(out, "[{}] ", error.kind())?;
        }
        write!(out, "{}", error)?;
        if self.show_metadata && !error.metadata().is_empty() {
            out.write_str(" {")?;
            for (i, (key, value)) in error.metadata().iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write!(out, "{}: {}", key, value)?;
            }
            out.write_str("}")?;
        }
        Ok(())
    }

    /// Renders `errors` into a new string.
    #[must_use]
    pub fn format_errors(&self, errors: &[Error]) -> String {
        let mut result = String::with_capacity(errors.len() * 48);
        // Writing into a String cannot fail.
        let _ = self.write_errors(&mut result, errors);
        result
    }
}

/// Builder for customizing how an error list is displayed.
///
/// Obtained from [`ErrorOr::fmt_errors`](crate::ErrorOr::fmt_errors).
pub struct ErrorListFormat<'a> {
    pub(crate) errors: &'a [Error],
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorListFormat<'a> {
    pub fn new(errors: &'a [Error]) -> Self {
        Self { errors, config: ErrorFormatConfig::default() }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn show_kind(mut self, show: bool) -> Self {
        self.config.show_kind = show;
        self
    }

    pub fn show_metadata(mut self, show: bool) -> Self {
        self.config.show_metadata = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }
}

impl Display for ErrorListFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config.write_errors(f, self.errors)
    }
}
