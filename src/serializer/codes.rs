use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Error codes for structured API responses
///
/// Three-digit codes reuse the meaning of the matching HTTP status.
/// Five-digit codes are application-defined: a leading 4 marks a
/// client-caused failure, a leading 5 a server-caused one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum ErrorCode {
    /// Authentication required
    CheckLogin = 401,

    /// Access forbidden
    NoRight = 403,

    /// Invalid request parameters
    ParamErr = 40001,

    /// Upload failed
    UploadFailed = 40002,

    /// Folder creation failed
    CreateFolderFailed = 40003,

    /// Object already exists
    ObjectExist = 40004,

    /// Generic server-side failure, emitted only by strict code resolution
    Unknown = 50000,

    /// Database operation failed
    DbError = 50001,

    /// Encryption or decryption failed
    EncryptError = 50002,

    /// Operation not allowed by the storage policy
    PolicyNotAllowed = 50003,

    /// I/O operation failed
    IoFailed = 50004,

    /// Code not decided yet; the builder resolves it from the cause
    NotSet = -1,
}

lazy_static! {
    /// Fallback messages for codes whose builders accept an empty message.
    static ref DEFAULT_MESSAGES: HashMap<ErrorCode, &'static str> = {
        let mut m = HashMap::new();
        m.insert(ErrorCode::DbError, "database operation failed");
        m.insert(ErrorCode::ParamErr, "parameter error");
        m.insert(ErrorCode::Unknown, "unknown error");
        m
    };
}

impl ErrorCode {
    /// Numeric wire value of this code.
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// True for five-digit codes in the client-caused range.
    pub const fn is_client_error(self) -> bool {
        let code = self.as_i32();
        code >= 40000 && code < 50000
    }

    /// True for five-digit codes in the server-caused range.
    pub const fn is_server_error(self) -> bool {
        let code = self.as_i32();
        code >= 50000 && code < 60000
    }

    /// True for three-digit codes that reuse HTTP status semantics.
    pub const fn is_http_status(self) -> bool {
        let code = self.as_i32();
        code >= 100 && code < 600
    }

    /// Default message for this code, if it has one.
    pub fn default_message(self) -> Option<&'static str> {
        DEFAULT_MESSAGES.get(&self).copied()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.as_i32()
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            401 => Ok(Self::CheckLogin),
            403 => Ok(Self::NoRight),
            40001 => Ok(Self::ParamErr),
            40002 => Ok(Self::UploadFailed),
            40003 => Ok(Self::CreateFolderFailed),
            40004 => Ok(Self::ObjectExist),
            50000 => Ok(Self::Unknown),
            50001 => Ok(Self::DbError),
            50002 => Ok(Self::EncryptError),
            50003 => Ok(Self::PolicyNotAllowed),
            50004 => Ok(Self::IoFailed),
            -1 => Ok(Self::NotSet),
            other => Err(format!("unknown error code: {other}")),
        }
    }
}
