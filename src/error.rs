//! `Error` and `Result` types for this crate.
use std::fmt::{self, Display, Formatter};

pub(crate) type CowStr = ::std::borrow::Cow<'static, str>;

/// Different kinds of errors reported by the adapter's faillible operations.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// The platform lacks a required capability.
    ///
    /// For instance, the OpenGL context is older than 2.0, or is 2.x without
    /// framebuffer object support.
    Unsupported,
    /// Some arguments were invalid; You could retry with different ones.
    InvalidArgument,
    /// Arguments were valid, but the native library failed for other
    /// reasons (e.g user-specific environment).
    ///
    /// For instance, GLFW could not be initialized, or window creation was
    /// refused by the windowing system.
    Failed,
}

/// An `ErrorKind` packed with an optional `reason` string.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Error {
    /// The error kind.
    pub kind: ErrorKind,
    /// A hopefully useful reason string, or `None` if unknown or not meaningful.
    pub reason: Option<CowStr>,
}

/// Alias to `Result<T, Error>`.
pub type Result<T> = ::std::result::Result<T, Error>;

impl ErrorKind {
    pub(crate) fn describe_quick(&self) -> &'static str {
        match *self {
            ErrorKind::InvalidArgument => "Invalid argument(s)",
            ErrorKind::Unsupported => "Unsupported by the current platform",
            ErrorKind::Failed => "Operation has failed",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.describe_quick())
    }
}

impl ::std::error::Error for ErrorKind {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.kind.describe_quick())?;
        match self.reason {
            None => write!(f, " (no reason given)"),
            Some(ref s) => write!(f, ": {}", s),
        }
    }
}

impl ::std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, reason: None, }
    }
}

impl Error {
    pub(crate) fn failed<S: Into<CowStr>>(s: S) -> Self {
        Self { kind: ErrorKind::Failed, reason: Some(s.into()), }
    }
}

pub(crate) fn unsupported<T, S: Into<CowStr>>(s: S) -> Result<T> {
    Err(Error { kind: ErrorKind::Unsupported, reason: Some(s.into()), })
}
// Only the native backend and the test backend report these.
#[cfg_attr(not(feature = "glfw"), allow(dead_code))]
pub(crate) fn invalid_arg<T, S: Into<CowStr>>(s: S) -> Result<T> {
    Err(Error { kind: ErrorKind::InvalidArgument, reason: Some(s.into()), })
}
#[cfg_attr(not(feature = "glfw"), allow(dead_code))]
pub(crate) fn failed<T, S: Into<CowStr>>(s: S) -> Result<T> {
    Err(Error::failed(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let e = Error::failed("Unable to create window: 640x480, fullscreen: false");
        assert_eq!(e.to_string(), "Operation has failed: Unable to create window: 640x480, fullscreen: false");
    }

    #[test]
    fn helpers_set_kind_and_reason() {
        let e = invalid_arg::<(), _>("No monitor at index 3").unwrap_err();
        assert_eq!(e.kind, ErrorKind::InvalidArgument);
        assert_eq!(e.reason.as_deref(), Some("No monitor at index 3"));
        assert_eq!(unsupported::<(), _>("GL 1.5").unwrap_err().kind, ErrorKind::Unsupported);
    }

    #[test]
    fn display_without_reason() {
        let e = Error::from(ErrorKind::Unsupported);
        assert_eq!(e.to_string(), "Unsupported by the current platform (no reason given)");
    }
}
