//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     (pattern, method, handler) records
//!     → matcher.rs (compile pattern, fail fast on bad syntax)
//!     → RouteTableBuilder (append in registration order)
//!     → build() → frozen RouteTable, shared via Arc
//!
//! Lookup (per request):
//!     (path, method)
//!     → table.rs (linear scan in registration order)
//!     → Return: matched Handler or None
//! ```
//!
//! # Design Decisions
//! - Table is immutable after build() (thread-safe without locks)
//! - O(n) linear scan per lookup; fine for small tables, and the known
//!   scaling limit if route counts ever grow large
//! - First match wins (earliest-registered entry, always)
//! - Full-string pattern match only; no captures reach handlers

pub mod matcher;
pub mod table;

pub use matcher::{PathMatcher, PatternError};
pub use table::{Handler, RouteDef, RouteTable, RouteTableBuilder};
