//! Error classification and client-facing response envelopes

pub mod codes;
pub mod error;
pub mod response;

pub use codes::ErrorCode;
pub use error::{AppError, ErrorCause};
pub use response::Response;
