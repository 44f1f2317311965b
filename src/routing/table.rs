//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Look up the handler for a (path, method) pair
//! - Make the registration/traffic phase boundary explicit via build()
//!
//! # Design Decisions
//! - Append-only builder, frozen table: no synchronization needed for
//!   concurrent lookups once traffic starts
//! - Method compared before the pattern (cheap rejection first)
//! - First match wins; a later entry shadowed by an earlier one is legal
//!   and simply unreachable
//! - Bulk registration takes uniform three-field records, so a malformed
//!   triple is a type error rather than a runtime arity check

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::Method;
use axum::response::{IntoResponse, Response};

use crate::routing::matcher::{PathMatcher, PatternError};

/// Boxed future produced by a handler invocation.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// A route handler: takes ownership of the request, produces its reply.
///
/// The dispatcher forwards the request and returns whatever the handler
/// produced, unmodified — the handler owns the reply entirely. Handler
/// panics and failures are not caught at this layer; that belongs to the
/// listener runtime or a middleware above it, so write handlers
/// defensively.
#[derive(Clone)]
pub struct Handler {
    func: Arc<dyn Fn(Request) -> HandlerFuture + Send + Sync>,
}

impl Handler {
    /// Wrap an async function as a route handler.
    pub fn new<F, Fut, R>(func: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        Self {
            func: Arc::new(move |request| {
                let fut = func(request);
                Box::pin(async move { fut.await.into_response() })
            }),
        }
    }

    /// Invoke the handler, transferring ownership of the request.
    pub fn call(&self, request: Request) -> HandlerFuture {
        (self.func)(request)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler")
    }
}

/// One (pattern, method, handler) registration record.
#[derive(Debug, Clone)]
pub struct RouteDef {
    /// Path pattern, compiled at registration.
    pub pattern: String,
    /// HTTP method this route answers.
    pub method: Method,
    /// Handler invoked on a match.
    pub handler: Handler,
}

impl RouteDef {
    pub fn new(pattern: impl Into<String>, method: Method, handler: Handler) -> Self {
        Self {
            pattern: pattern.into(),
            method,
            handler,
        }
    }
}

/// A compiled route. Immutable once registered.
#[derive(Debug, Clone)]
struct RouteEntry {
    matcher: PathMatcher,
    method: Method,
    handler: Handler,
}

/// Registration-phase builder for a [`RouteTable`].
///
/// Append-only; entries keep registration order, and order is
/// semantically significant. No deduplication and no reachability
/// checks are performed.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern` and append the route at the end of the table.
    ///
    /// Fails with [`PatternError`] on invalid pattern syntax; nothing is
    /// appended in that case.
    pub fn register(
        &mut self,
        pattern: &str,
        method: Method,
        handler: Handler,
    ) -> Result<&mut Self, PatternError> {
        let matcher = PathMatcher::new(pattern)?;
        self.entries.push(RouteEntry {
            matcher,
            method,
            handler,
        });
        Ok(self)
    }

    /// Register an ordered sequence of route records.
    ///
    /// Equivalent to calling [`register`](Self::register) once per record
    /// in order; dispatch outcome depends only on the final table order.
    /// Stops at the first pattern that fails to compile.
    pub fn register_all(
        &mut self,
        routes: impl IntoIterator<Item = RouteDef>,
    ) -> Result<&mut Self, PatternError> {
        for route in routes {
            self.register(&route.pattern, route.method, route.handler)?;
        }
        Ok(self)
    }

    /// Freeze the table.
    ///
    /// This is the registration/traffic phase boundary: after build() the
    /// entry sequence is never mutated, which is what makes lock-free
    /// concurrent lookup sound.
    pub fn build(self) -> RouteTable {
        RouteTable {
            entries: self.entries,
        }
    }
}

/// Frozen, ordered route table. Read-only for its lifetime; share it via
/// `Arc` across request tasks.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Find the handler for a (path, method) pair.
    ///
    /// Linear scan in registration order: reject on method mismatch
    /// first, then attempt a full-string pattern match. The first entry
    /// passing both wins; `None` if nothing matches.
    pub fn lookup(&self, path: &str, method: &Method) -> Option<&Handler> {
        self.entries
            .iter()
            .find(|entry| entry.method == *method && entry.matcher.matches(path))
            .map(|entry| &entry.handler)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};

    fn tagged(tag: &'static str) -> Handler {
        Handler::new(move |_req| async move { tag })
    }

    fn request(method: Method, path: &str) -> Request {
        axum::http::Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    async fn invoke(handler: &Handler, method: Method, path: &str) -> String {
        let response = handler.call(request(method, path)).await;
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn lookup_on_empty_table_finds_nothing() {
        let table = RouteTable::builder().build();
        assert!(table.is_empty());
        assert!(table.lookup("/users", &Method::GET).is_none());
    }

    #[test]
    fn method_mismatch_rejects_matching_path() {
        let mut builder = RouteTable::builder();
        builder
            .register("/users", Method::GET, tagged("h1"))
            .unwrap();
        let table = builder.build();

        assert!(table.lookup("/users", &Method::GET).is_some());
        assert!(table.lookup("/users", &Method::POST).is_none());
        assert!(table.lookup("/users", &Method::DELETE).is_none());
    }

    #[test]
    fn partial_path_match_is_not_a_match() {
        let mut builder = RouteTable::builder();
        builder
            .register("/users", Method::GET, tagged("h1"))
            .unwrap();
        let table = builder.build();

        assert!(table.lookup("/users/42", &Method::GET).is_none());
        assert!(table.lookup("/user", &Method::GET).is_none());
    }

    #[tokio::test]
    async fn earliest_registered_entry_wins() {
        let mut builder = RouteTable::builder();
        builder
            .register("/items/.*", Method::GET, tagged("general"))
            .unwrap()
            .register("/items/5", Method::GET, tagged("specific"))
            .unwrap();
        let table = builder.build();

        let handler = table.lookup("/items/5", &Method::GET).unwrap();
        assert_eq!(invoke(handler, Method::GET, "/items/5").await, "general");
    }

    #[tokio::test]
    async fn identical_entries_resolve_to_the_first() {
        let mut builder = RouteTable::builder();
        builder
            .register("/dup", Method::GET, tagged("first"))
            .unwrap()
            .register("/dup", Method::GET, tagged("second"))
            .unwrap();
        let table = builder.build();

        let handler = table.lookup("/dup", &Method::GET).unwrap();
        assert_eq!(invoke(handler, Method::GET, "/dup").await, "first");
    }

    #[tokio::test]
    async fn bulk_registration_preserves_record_order() {
        let mut individual = RouteTable::builder();
        individual
            .register("/items/.*", Method::GET, tagged("general"))
            .unwrap()
            .register("/items/5", Method::GET, tagged("specific"))
            .unwrap();
        let individual = individual.build();

        let mut bulk = RouteTable::builder();
        bulk.register_all([
            RouteDef::new("/items/.*", Method::GET, tagged("general")),
            RouteDef::new("/items/5", Method::GET, tagged("specific")),
        ])
        .unwrap();
        let bulk = bulk.build();

        assert_eq!(individual.len(), bulk.len());
        for (table, label) in [(&individual, "individual"), (&bulk, "bulk")] {
            let handler = table.lookup("/items/7", &Method::GET).unwrap();
            assert_eq!(
                invoke(handler, Method::GET, "/items/7").await,
                "general",
                "{label} table picked the wrong entry"
            );
        }
    }

    #[test]
    fn malformed_pattern_fails_registration_and_appends_nothing() {
        let mut builder = RouteTable::builder();
        let err = builder
            .register("(", Method::GET, tagged("h1"))
            .unwrap_err();
        assert_eq!(err.pattern, "(");

        let table = builder.build();
        assert!(table.is_empty());
    }
}
