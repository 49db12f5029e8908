//! Error types for the static file server.

use thiserror::Error;

use crate::parser::{Error as ParserError, Method};
use crate::server::response::StatusCode;

/// Errors that can occur while serving a request.
///
/// Every variant except [`Error::IoError`] is a policy rejection that the
/// connection handler converts into an HTTP error response; none of them
/// propagate past a single connection.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing an HTTP request.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error on the socket or the listener.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Method other than GET.
    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),

    /// Target resolves outside the configured root directory.
    #[error("Path traversal attempt: {0}")]
    Traversal(String),

    /// Extension is not registered in the mime registry.
    #[error("File type not allowed: {0}")]
    TypeNotAllowed(String),

    /// No file backs the resolved target.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// The HTTP status code a client sees for this error.
    ///
    /// Traversal attempts and disallowed extensions map to the same generic
    /// 403; the distinction stays server-side.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::ParseError(_) => StatusCode::BadRequest,
            Error::MethodNotAllowed(_) => StatusCode::MethodNotAllowed,
            Error::Traversal(_) | Error::TypeNotAllowed(_) => StatusCode::Forbidden,
            Error::NotFound(_) => StatusCode::NotFound,
            Error::IoError(_) => StatusCode::InternalServerError,
        }
    }
}
