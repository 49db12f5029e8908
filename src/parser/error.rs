//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The request is empty: the peer opened a connection and closed it
    /// without sending any data. No response should be attempted.
    #[error("Empty request")]
    EmptyRequest,

    /// The request bytes are not valid UTF-8.
    #[error("Request is not valid UTF-8")]
    InvalidEncoding,

    /// The request line is malformed (fewer than three fields).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),
}
