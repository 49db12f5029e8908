//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Static file server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The directory files are served from. Should be an absolute path;
    /// the resolver treats it as the outer boundary for every request.
    pub root_dir: PathBuf,
    /// The read buffer size. A request line that does not fit into a single
    /// read of this size is treated as malformed.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            root_dir: PathBuf::from("public"),
            read_buffer_size: 4096,
        }
    }
}
