//! Request dispatch into the route table.
//!
//! # Responsibilities
//! - Install one callback per supported HTTP method on the listener router
//! - Resolve each inbound request via RouteTable::lookup
//! - Forward matched requests to their handler, untouched
//! - Produce the fallback reply when nothing matches
//!
//! # Design Decisions
//! - Fallback status and body are configurable; the defaults keep the
//!   legacy contract (200 + fixed diagnostic body) that existing clients
//!   may depend on, rather than the conventional 404
//! - Methods outside the supported set are answered by the listener
//!   itself (405), not by this layer

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodFilter, MethodRouter};
use axum::Router;

use crate::config::FallbackConfig;
use crate::routing::RouteTable;

/// Methods that get a callback slot unless overridden.
const DEFAULT_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// State moved into the per-method callbacks at bind time.
#[derive(Clone)]
struct DispatchState {
    table: Arc<RouteTable>,
    fallback_status: StatusCode,
    fallback_body: String,
}

/// Translates inbound (path, method) pairs into handler invocations.
///
/// Created once per listener. Not clonable: [`bind`](Self::bind) consumes
/// the dispatcher and transfers its state into the installed callbacks.
pub struct Dispatcher {
    table: Arc<RouteTable>,
    fallback: FallbackConfig,
    methods: Vec<Method>,
}

impl Dispatcher {
    /// Create a dispatcher over a frozen table with the default fallback
    /// reply and the default method set (GET, POST, PUT, DELETE).
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self {
            table,
            fallback: FallbackConfig::default(),
            methods: DEFAULT_METHODS.to_vec(),
        }
    }

    /// Replace the fallback reply.
    ///
    /// Configs loaded from disk are validated before they get here; a
    /// hand-built config with an out-of-range status falls back to 200
    /// at bind time.
    pub fn with_fallback(mut self, fallback: FallbackConfig) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replace the supported method set.
    pub fn with_methods(mut self, methods: &[Method]) -> Self {
        self.methods = methods.to_vec();
        self
    }

    /// Install one dispatch callback per supported method and hand back
    /// the listener router.
    ///
    /// The callbacks are registered on `/` and the catch-all `/{*path}`,
    /// so every path reaches the table. A method the listener has no
    /// filter for is skipped with a warning.
    pub fn bind(self) -> Router {
        let state = DispatchState {
            table: self.table,
            fallback_status: StatusCode::from_u16(self.fallback.status)
                .unwrap_or(StatusCode::OK),
            fallback_body: self.fallback.body,
        };

        let mut slots: MethodRouter<DispatchState> = MethodRouter::new();
        for method in self.methods {
            match MethodFilter::try_from(method.clone()) {
                Ok(filter) => slots = slots.on(filter, dispatch),
                Err(_) => {
                    tracing::warn!(method = %method, "no callback slot available for method, skipping");
                }
            }
        }

        Router::new()
            .route("/{*path}", slots.clone())
            .route("/", slots)
            .with_state(state)
    }
}

/// Per-request entry point; one instance bound per supported method.
async fn dispatch(State(state): State<DispatchState>, request: Request) -> Response {
    let path = request.uri().path().to_string();
    let method = request.method().clone();

    tracing::debug!(method = %method, path = %path, "dispatching request");

    match state.table.lookup(&path, &method) {
        Some(handler) => handler.call(request).await,
        None => {
            tracing::warn!(method = %method, path = %path, "no route matched");
            (state.fallback_status, state.fallback_body.clone()).into_response()
        }
    }
}
