//! HTTP listener glue.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → axum/hyper (accept, framing, parsing)
//!     → TraceLayer (request/response tracing)
//!     → dispatch callbacks (installed by Dispatcher::bind)
//! ```
//!
//! The accept loop, protocol handling, and TLS belong to axum; this
//! module only wires a bound dispatch router into them.

pub mod server;

pub use server::DispatchServer;
