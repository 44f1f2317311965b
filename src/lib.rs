//! Request dispatch in front of an axum HTTP listener.
//!
//! An ordered table of (pattern, method, handler) routes, built once at
//! startup and frozen, plus a dispatcher that installs one callback per
//! HTTP method into an [`axum::Router`] and resolves every inbound
//! request with a first-match-wins linear scan. Requests that match no
//! route get a configurable fallback reply.
//!
//! Transport concerns (accept loop, TLS, framing, body parsing) stay in
//! axum/hyper; this crate only decides which handler services a request.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod routing;

pub use config::{DispatchConfig, FallbackConfig};
pub use dispatch::Dispatcher;
pub use http::DispatchServer;
pub use routing::{Handler, PathMatcher, PatternError, RouteDef, RouteTable, RouteTableBuilder};
