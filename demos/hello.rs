//! Minimal dispatch demo: three routes in front of an axum listener.
//!
//! Run with `cargo run --example hello`, then try:
//!   curl http://127.0.0.1:8080/hello
//!   curl http://127.0.0.1:8080/users/42
//!   curl -X POST http://127.0.0.1:8080/submit
//!   curl http://127.0.0.1:8080/nowhere

use std::sync::Arc;

use axum::http::Method;
use switchboard::{DispatchServer, Dispatcher, Handler, RouteDef, RouteTable};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "switchboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut builder = RouteTable::builder();
    builder.register_all([
        RouteDef::new(
            "/hello",
            Method::GET,
            Handler::new(|_req| async { "Hello, world!\n" }),
        ),
        RouteDef::new(
            "/users/[0-9]+",
            Method::GET,
            Handler::new(|req| async move { format!("user resource at {}\n", req.uri().path()) }),
        ),
        RouteDef::new(
            "/submit",
            Method::POST,
            Handler::new(|_req| async { "accepted\n" }),
        ),
    ])?;
    let table = Arc::new(builder.build());

    tracing::info!(routes = table.len(), "route table frozen");

    let router = Dispatcher::new(table).bind();

    let listener = TcpListener::bind("127.0.0.1:8080").await?;
    DispatchServer::new(router).run(listener).await?;

    Ok(())
}
