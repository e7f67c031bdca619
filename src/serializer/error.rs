use std::fmt;

use thiserror::Error;

use super::codes::ErrorCode;

/// A classified application failure.
///
/// `msg` is always safe to show to a client. `cause` may carry backend
/// internals (driver messages, file paths) and is only disclosed by the
/// response builder outside release mode.
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct AppError {
    /// Taxonomy code identifying the failure kind.
    pub code: ErrorCode,
    /// Human-readable message.
    pub msg: String,
    /// Underlying failure, if one was captured.
    pub cause: Option<ErrorCause>,
}

/// The failure underneath an [`AppError`].
///
/// Tagged so the response builder can tell an already-classified failure
/// from an opaque library error without downcasting.
#[derive(Debug)]
pub enum ErrorCause {
    /// A failure that was already classified further down the stack.
    App(Box<AppError>),
    /// Any other library or domain error.
    Other(anyhow::Error),
}

impl AppError {
    /// Create a classified failure. The code is taken as given; callers
    /// constructing directly are expected to use a real taxonomy member.
    pub fn new(code: ErrorCode, msg: impl Into<String>, cause: Option<ErrorCause>) -> Self {
        Self {
            code,
            msg: msg.into(),
            cause,
        }
    }

    /// Copy of this error with `cause` replaced. The original is left
    /// untouched.
    pub fn with_cause(&self, cause: impl Into<ErrorCause>) -> Self {
        Self {
            code: self.code,
            msg: self.msg.clone(),
            cause: Some(cause.into()),
        }
    }
}

impl ErrorCause {
    /// Wrap any library error as an opaque cause.
    pub fn other(err: impl Into<anyhow::Error>) -> Self {
        Self::Other(err.into())
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App(err) => write!(f, "{err}"),
            // {:#} keeps the context chain, e.g. "opening chunk: permission denied"
            Self::Other(err) => write!(f, "{err:#}"),
        }
    }
}

impl From<AppError> for ErrorCause {
    fn from(err: AppError) -> Self {
        Self::App(Box::new(err))
    }
}

impl From<anyhow::Error> for ErrorCause {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}
