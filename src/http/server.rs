//! Server runner for a bound dispatch router.
//!
//! # Responsibilities
//! - Wrap the dispatch router with middleware (request tracing)
//! - Serve it on a TCP listener until shutdown
//!
//! # Design Decisions
//! - Graceful shutdown on ctrl-c
//! - No timeout or concurrency limit on handler execution; each request
//!   is independent and the dispatch layer holds no per-request state

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Runs a bound dispatch router on a listener.
pub struct DispatchServer {
    router: Router,
}

impl DispatchServer {
    /// Wrap a router produced by [`Dispatcher::bind`](crate::Dispatcher::bind).
    pub fn new(router: Router) -> Self {
        Self {
            router: router.layer(TraceLayer::new_for_http()),
        }
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "dispatch server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("dispatch server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
