//! Development server with auto-rebuild support.

mod lifecycle;
mod path;
mod response;
mod watch;

use crate::{
    config::{SiteConfig, cfg},
    log,
};
use anyhow::Result;
use crossbeam::channel;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
    shutdown_rx: channel::Receiver<()>,
}

/// Bind the HTTP server without starting the request loop.
///
/// Binding before the initial build lets Ctrl+C interrupt a long first
/// build with the graceful shutdown path already wired up.
pub fn bind_server() -> Result<BoundServer> {
    let config = cfg();
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    let (shutdown_tx, shutdown_rx) = channel::unbounded::<()>();
    crate::core::register_server(Arc::clone(&server), shutdown_tx);

    log!("serve"; "http://{}", addr);

    Ok(BoundServer {
        server,
        addr,
        shutdown_rx,
    })
}

impl BoundServer {
    /// Get the bound address.
    #[allow(dead_code)]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the watcher (when enabled) and the request loop (blocking).
    pub fn run(self) -> Result<()> {
        let config = cfg();
        let watcher = lifecycle::spawn_watcher(config.serve.watch, self.shutdown_rx);
        run_request_loop(&self.server);
        lifecycle::wait_for_shutdown(watcher);
        Ok(())
    }
}

fn run_request_loop(server: &Server) {
    // Thread pool so a slow client can't block other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        pool.spawn(move || {
            let config = cfg();
            if let Err(e) = handle_request(request, &config) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request.
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    if let Some(path) = path::resolve_path(request.url(), &config.build.output) {
        return response::respond_file(request, &path);
    }

    response::respond_not_found(request, config)
}
