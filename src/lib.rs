//! A minimal static file HTTP server built on raw TCP streams.
//!
//! This crate serves files from a single configured root directory over an
//! HTTP/1.0-style one-request-per-connection exchange. It is deliberately
//! small: no routing, no keep-alive, no TLS, no caching headers.
//!
//! # Features
//!
//! - Parse the HTTP request line from a single bounded socket read
//! - Percent-decoding of request targets
//! - Path resolution with double traversal protection (syntactic screen plus
//!   resolved-path prefix check)
//! - Strict extension allow-list backed by a fixed content-type registry
//! - HTML error pages for 400, 403, 404, 405, and 500
//! - One task per connection with graceful shutdown of the accept loop
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use statichttp_rs::parse_request;
//!
//! let request_bytes = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parse_request(request_bytes) {
//!     Ok(request) => {
//!         println!("Method: {}", request.method);
//!         println!("Target: {}", request.target);
//!     },
//!     Err(err) => {
//!         println!("Error parsing request: {}", err);
//!     }
//! }
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use statichttp_rs::{HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig {
//!         addr: "0.0.0.0:8080".parse()?,
//!         root_dir: std::fs::canonicalize("public")?,
//!         read_buffer_size: 4096,
//!     };
//!
//!     let server = HttpServer::new(config);
//!     server.start().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Limitations
//!
//! - The request line must arrive in the first socket read; requests split
//!   across TCP segments are treated as malformed.
//! - Connection reads have no timeout; a silent client holds its handler
//!   until it closes the connection.
//! - Files are read as UTF-8 text, which the allow-list restricts to
//!   text-safe types.

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, HttpRequest, Method};
pub use server::{
    Error as ServerError, HttpResponse, HttpServer, MimeRegistry, ServerConfig, ShutdownHandle,
    StatusCode,
};
