//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so a minimal (or empty) config is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the dispatch layer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DispatchConfig {
    /// Reply produced when no route matches.
    pub fallback: FallbackConfig,
}

/// Fallback reply configuration.
///
/// The defaults reproduce the historical observable contract: status 200
/// with a fixed diagnostic body. 404 is the conventional status for a
/// no-match reply, but existing clients may depend on the 200, so
/// changing it is opt-in.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// HTTP status code of the fallback reply.
    pub status: u16,

    /// Body of the fallback reply.
    pub body: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            status: 200,
            body: "Could not find route in table.".to_string(),
        }
    }
}
