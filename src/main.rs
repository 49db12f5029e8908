//! Command-line entry point for the static file server.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use statichttp_rs::{HttpServer, ServerConfig};

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html>\n\
    <html>\n\
    <head><title>statichttp-rs</title><link rel=\"stylesheet\" href=\"/styles.css\"></head>\n\
    <body><h1>It works</h1><p>Replace the files in the root directory to serve your own content.</p></body>\n\
    </html>\n";

const PLACEHOLDER_STYLES: &str = "body { font-family: sans-serif; margin: 2em; }\n";

/// Minimal static file HTTP server.
#[derive(Parser, Debug)]
#[command(name = "statichttp", version, about)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "STATICHTTP_PORT")]
    port: u16,

    /// Directory to serve files from (created with placeholder content if absent)
    #[arg(short, long, default_value = "public", env = "STATICHTTP_ROOT")]
    root: PathBuf,

    /// Socket read buffer size in bytes
    #[arg(long, default_value_t = 4096)]
    read_buffer_size: usize,
}

/// Create the root directory with placeholder content if it does not exist.
fn bootstrap_root(root: &Path) -> std::io::Result<()> {
    if root.exists() {
        return Ok(());
    }

    std::fs::create_dir_all(root)?;
    std::fs::write(root.join("index.html"), PLACEHOLDER_INDEX)?;
    std::fs::write(root.join("styles.css"), PLACEHOLDER_STYLES)?;
    info!(
        "Created root directory {root} with placeholder content",
        root = root.display()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    bootstrap_root(&args.root)?;
    let root_dir = args.root.canonicalize()?;

    let config = ServerConfig {
        addr: SocketAddr::from(([0, 0, 0, 0], args.port)),
        root_dir,
        read_buffer_size: args.read_buffer_size,
    };

    let server = HttpServer::new(config);
    server.start().await?;
    Ok(())
}
