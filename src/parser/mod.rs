//! HTTP request-line parser module.
//!
//! This module turns the raw bytes of a single socket read into a structured
//! request. Only the request line is interpreted; headers and bodies are
//! read past and ignored.

mod request;
mod method;
mod error;


// Re-export public items
pub use request::HttpRequest;
pub use method::Method;
pub use error::Error;

// Re-export the parsing functions
pub use request::{parse_request, percent_decode};
