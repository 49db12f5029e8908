//! Static file server implementation for statichttp-rs.
//!
//! This module provides the serving side of the crate: the mime registry,
//! the path resolver with its traversal protection, response building, and
//! the accept loop with per-connection tasks.

mod mime;
mod resolver;
mod config;
mod error;
mod response;
mod http_server;


// Re-export public items
pub use mime::MimeRegistry;
pub use resolver::{resolve, ResolvedTarget};
pub use config::ServerConfig;
pub use error::Error;
pub use response::{HttpResponse, StatusCode};
pub use http_server::{HttpServer, ShutdownHandle};
