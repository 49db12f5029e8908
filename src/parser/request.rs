//! HTTP request parsing and representation.

use crate::parser::error::Error;
use crate::parser::method::Method;

/// Represents a parsed HTTP request line.
///
/// Only the request line carries information the server acts on; headers and
/// bodies are not retained. The target is stored percent-decoded.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.), case-normalized to uppercase
    pub method: Method,
    /// The request target, percent-decoded
    pub target: String,
    /// The protocol version field, captured verbatim and not validated
    pub version: String,
}

/// Parse an HTTP request from a byte slice.
///
/// The slice is expected to hold everything a single bounded socket read
/// produced. A request line split across reads is out of scope and shows up
/// here as malformed or truncated input.
///
/// # Arguments
///
/// * `input` - A byte slice containing the raw request bytes
///
/// # Returns
///
/// The parsed request, or an error if the request line is absent or malformed
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, Error> {
    // A zero-length read means the peer closed without sending anything.
    if input.is_empty() {
        return Err(Error::EmptyRequest);
    }

    let text = std::str::from_utf8(input).map_err(|_| Error::InvalidEncoding)?;

    // Accept any of \r\n, \r, or \n as the line terminator to tolerate
    // non-conforming clients. The first line is the request line.
    let request_line = text
        .split(['\r', '\n'])
        .next()
        .unwrap_or_default();

    // Split the request line into method, target, and version. Runs of
    // whitespace are collapsed, tolerating clients that pad the request
    // line; the three fields themselves are still required.
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    }

    let method = Method::from(parts[0]);
    let target = percent_decode(parts[1]);
    let version = parts[2].to_string();

    Ok(HttpRequest {
        method,
        target,
        version,
    })
}

/// Percent-decode a request target.
///
/// `%XX` escape sequences are decoded; malformed escapes (a `%` not followed
/// by two hex digits) are kept literally rather than rejected.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                decoded.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
