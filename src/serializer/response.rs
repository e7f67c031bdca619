//! Client-facing response envelope and the error builders that fill it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

use crate::config::RunMode;

use super::codes::ErrorCode;
use super::error::{AppError, ErrorCause};

/// Wire envelope returned by every API handler.
///
/// Serializes with the contractual key names: `code`, `data` (omitted when
/// absent), `msg`, `error` (omitted when absent).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Response {
    /// Numeric taxonomy code.
    pub code: i32,
    /// Payload; present on success paths only, which the hosting service
    /// builds itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
    /// Human-readable message.
    pub msg: String,
    /// Diagnostic string from the underlying failure; populated only
    /// outside release mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// Generic error builder. Resolves the effective code, applies the
    /// disclosure policy for the current run mode and returns the envelope.
    /// This is the terminal translation step: it cannot fail.
    pub fn error(code: ErrorCode, msg: impl Into<String>, cause: Option<ErrorCause>) -> Self {
        // Re-read on every call; the hosting service owns the flag.
        Self::error_with_mode(code, msg, cause, RunMode::current())
    }

    /// Same as [`Response::error`] with the run mode supplied by the caller
    /// instead of read from process state.
    pub fn error_with_mode(
        code: ErrorCode,
        msg: impl Into<String>,
        cause: Option<ErrorCause>,
        mode: RunMode,
    ) -> Self {
        let (code, cause) = resolve_code(code, cause);

        // Raw diagnostics stay server-side in release mode.
        let error = match &cause {
            Some(cause) if !mode.is_release() => Some(cause.to_string()),
            _ => None,
        };

        Self {
            code: code.as_i32(),
            data: None,
            msg: msg.into(),
            error,
        }
    }

    /// Database failure with the fixed [`ErrorCode::DbError`] code. An empty
    /// message falls back to the code's default.
    pub fn db_error(msg: impl Into<String>, cause: Option<ErrorCause>) -> Self {
        let msg = msg_or_default(msg.into(), ErrorCode::DbError);
        Self::error(ErrorCode::DbError, msg, cause)
    }

    /// Parameter failure with the fixed [`ErrorCode::ParamErr`] code. An
    /// empty message falls back to the code's default.
    pub fn param_error(msg: impl Into<String>, cause: Option<ErrorCause>) -> Self {
        let msg = msg_or_default(msg.into(), ErrorCode::ParamErr);
        Self::error(ErrorCode::ParamErr, msg, cause)
    }
}

/// Recover the effective code when the caller deferred it to the cause.
///
/// The unwrap is a single level: when the cause is a classified error, its
/// code is adopted and its own cause becomes the disclosed diagnostic. Any
/// other cause leaves the sentinel in place (or, with the `strict-codes`
/// feature, substitutes [`ErrorCode::Unknown`]).
fn resolve_code(code: ErrorCode, cause: Option<ErrorCause>) -> (ErrorCode, Option<ErrorCause>) {
    if code != ErrorCode::NotSet {
        return (code, cause);
    }

    match cause {
        Some(ErrorCause::App(inner)) => {
            let AppError { code, cause, .. } = *inner;
            (code, cause)
        }
        cause => {
            warn!("error code left unresolved, cause is not a classified error");
            if cfg!(feature = "strict-codes") {
                (ErrorCode::Unknown, cause)
            } else {
                (ErrorCode::NotSet, cause)
            }
        }
    }
}

fn msg_or_default(msg: String, code: ErrorCode) -> String {
    if msg.is_empty() {
        code.default_message().map(str::to_owned).unwrap_or(msg)
    } else {
        msg
    }
}
