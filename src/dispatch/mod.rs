//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Binding (at startup):
//!     Dispatcher::new(Arc<RouteTable>)
//!     → one callback installed per supported HTTP method
//!     → axum::Router (the listener's callback slots)
//!
//! Per request:
//!     listener invokes the method's callback
//!     → extract (path, method) → RouteTable::lookup
//!     → matched: forward request to handler, return its reply
//!     → no match: produce the configured fallback reply
//! ```
//!
//! # Design Decisions
//! - Exactly one reply per request, by the handler or the fallback
//! - The dispatcher never inspects or rewrites matched requests
//! - bind() consumes the dispatcher; the installed callbacks own its state

pub mod dispatcher;

pub use dispatcher::Dispatcher;
