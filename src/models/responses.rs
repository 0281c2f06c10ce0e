//! Response DTOs for the auxiliary API endpoints
//!
//! Pokemon entities serialize directly; these cover errors, health and stats.

use serde::Serialize;

use crate::cache::CacheStatsSnapshot;

// == Error Response ==
/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Short category label
    pub error: String,
    /// Human-readable detail
    pub message: String,
    /// HTTP status code, mirrored into the body
    pub code: u16,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>, message: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            code,
        }
    }
}

// == Health Response ==
/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

impl HealthResponse {
    /// Creates a healthy HealthResponse with the crate version.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Pokemon API is running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// == Stats Response ==
/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed by the background sweep
    pub swept: u64,
    /// Current number of entries in cache
    pub entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache statistics snapshot
    pub fn new(snapshot: CacheStatsSnapshot) -> Self {
        Self {
            hits: snapshot.hits,
            misses: snapshot.misses,
            swept: snapshot.swept,
            entries: snapshot.entries,
            hit_rate: snapshot.hit_rate(),
        }
    }
}
