//! Static file server: accept loop and per-connection handling.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use log::{debug, error, info, warn};

use crate::parser::parse_request;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::mime::MimeRegistry;
use crate::server::resolver;
use crate::server::response::HttpResponse;

/// A static file HTTP server.
///
/// One accept loop, one spawned task per accepted connection. The mime
/// registry and root directory are immutable after construction and shared
/// read-only across connection tasks.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The content-type registry, built once at construction.
    mime: Arc<MimeRegistry>,
    /// Whether the accept loop is currently running. Written by the shutdown
    /// path from another task, so observed with SeqCst ordering.
    running: Arc<AtomicBool>,
    /// Sender half of the shutdown channel.
    shutdown_tx: mpsc::Sender<()>,
    /// Receiver half, taken by the accept loop in `start`.
    shutdown_rx: Mutex<mpsc::Receiver<()>>,
}

/// A handle that requests graceful shutdown of a running server.
#[derive(Clone)]
pub struct ShutdownHandle {
    tx: mpsc::Sender<()>,
}

impl ShutdownHandle {
    /// Signal the accept loop to stop. Connections already dispatched run to
    /// completion; only accepting stops.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(()).await;
    }
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        Self {
            config,
            mime: Arc::new(MimeRegistry::new()),
            running: Arc::new(AtomicBool::new(false)),
            shutdown_tx,
            shutdown_rx: Mutex::new(shutdown_rx),
        }
    }

    /// Whether the accept loop is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Get a handle for requesting graceful shutdown from another task.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: self.shutdown_tx.clone(),
        }
    }

    /// Set up the TCP listener. A bind failure is fatal to startup and is
    /// propagated, not retried.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!(
            "Serving {root} on http://{addr}",
            root = self.config.root_dir.display(),
            addr = self.config.addr
        );
        Ok(listener)
    }

    /// Reap connection tasks that have already finished so the set only
    /// holds in-flight connections, not every connection ever served.
    pub(crate) fn reap_finished(tasks: &mut JoinSet<()>) {
        while let Some(res) = tasks.try_join_next() {
            if let Err(e) = res {
                error!("Connection task failed: {e}");
            }
        }
    }

    /// Wait for in-flight connection tasks to finish.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!(
            "Waiting for {len} active connections to complete...",
            len = tasks.len()
        );
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        info!("Server shutdown complete");
    }

    /// Start the server and accept connections until shutdown is requested.
    ///
    /// Each accepted connection is handled by its own task tracked in a
    /// `JoinSet`; there is no bound on concurrent connections. Ctrl+C and
    /// [`ShutdownHandle::shutdown`] both stop the accept loop.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = self.setup_listener().await?;
        self.running.store(true, Ordering::SeqCst);

        let mut shutdown_rx = self.shutdown_rx.lock().await;
        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    self.running.store(false, Ordering::SeqCst);
                    break;
                }

                // Ctrl+C triggers the same graceful shutdown
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    self.running.store(false, Ordering::SeqCst);
                    break;
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            debug!("Accepted connection from {addr}");
                            let root = self.config.root_dir.clone();
                            let mime = self.mime.clone();
                            let read_buffer_size = self.config.read_buffer_size;
                            tasks.spawn(async move {
                                if let Err(e) =
                                    Self::handle_connection(&mut socket, &root, &mime, read_buffer_size).await
                                {
                                    warn!("Connection from {addr} failed: {e}");
                                }
                            });
                            Self::reap_finished(&mut tasks);
                        }
                        Err(e) => {
                            // An accept failure after a stop request is the
                            // listener being closed, not an error to report.
                            if !self.running.load(Ordering::SeqCst) {
                                break;
                            }
                            error!("Error accepting connection: {e}");
                            tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                        }
                    }
                }
            }
        }

        // Stop accepting; in-flight handlers run to completion.
        drop(listener);
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Handle a single connection end-to-end: read, parse, resolve, respond,
    /// close.
    ///
    /// Every failure after a non-empty read is converted into an HTTP error
    /// response; only socket I/O failures propagate as errors. A zero-byte
    /// read closes the connection without writing anything back. No read
    /// timeout is applied: a silent client holds its handler until it closes
    /// (accepted limitation).
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        root: &Path,
        mime: &MimeRegistry,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        // The request line is expected to arrive in this single read;
        // fragmented request lines parse as malformed.
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            debug!("Peer closed without sending a request");
            return Ok(());
        }

        let request = match parse_request(&buf[..n]) {
            Ok(request) => request,
            Err(e) => {
                let e = Error::ParseError(e);
                debug!("Rejecting malformed request: {e}");
                let response = HttpResponse::error_page(e.status());
                socket.write_all(&response.to_bytes()).await?;
                return Ok(());
            }
        };

        let response = match resolver::resolve(&request, root, mime).await {
            Ok(target) => match tokio::fs::read_to_string(&target.path).await {
                Ok(contents) => HttpResponse::file(contents, target.content_type),
                Err(e) => {
                    // The file vanished, became unreadable, or is not UTF-8
                    // despite its allow-listed extension.
                    let e = Error::IoError(e);
                    error!("Failed to read {path}: {e}", path = target.path.display());
                    HttpResponse::error_page(e.status())
                }
            },
            Err(e) => {
                debug!("Rejecting request: {e}");
                HttpResponse::error_page(e.status())
            }
        };

        info!(
            "{method} {target} -> {status}",
            method = request.method,
            target = request.target,
            status = response.status as u16
        );

        socket.write_all(&response.to_bytes()).await?;
        socket.flush().await?;
        Ok(())
    }
}
