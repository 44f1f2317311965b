//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use switchboard::{Dispatcher, FallbackConfig, RouteTable};
use tokio::net::TcpListener;

/// Bind a dispatcher on an ephemeral port and serve it in the background.
///
/// Returns the address the listener ended up on.
pub async fn spawn_dispatcher(table: RouteTable, fallback: Option<FallbackConfig>) -> SocketAddr {
    let mut dispatcher = Dispatcher::new(Arc::new(table));
    if let Some(fallback) = fallback {
        dispatcher = dispatcher.with_fallback(fallback);
    }
    let router = dispatcher.bind();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}
