//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing RPC response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, Entry};

/// Response body for every value-returning operation
/// (Add*, Unshift*, Get*, Shift*, Pop*)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemResponse<V> {
    /// The entry's key
    pub key: String,
    /// The entry's value
    pub value: V,
}

impl<V> ItemResponse<V> {
    /// Creates a new ItemResponse
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl<V> From<Entry<V>> for ItemResponse<V> {
    fn from(entry: Entry<V>) -> Self {
        Self::new(entry.key, entry.value)
    }
}

/// Response body for the Delete* operations
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Entries in the string store
    pub strings: usize,
    /// Entries in the int store
    pub ints: usize,
    /// Entries in the float store
    pub floats: usize,
    /// Entries across all stores
    pub total_entries: usize,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            strings: stats.strings,
            ints: stats.ints,
            floats: stats.floats,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the method listing (GET /rpc)
#[derive(Debug, Clone, Serialize)]
pub struct MethodsResponse {
    /// Service name
    pub service: String,
    /// Every callable RPC method
    pub methods: Vec<String>,
}

impl MethodsResponse {
    pub fn new(service: impl Into<String>, methods: Vec<String>) -> Self {
        Self {
            service: service.into(),
            methods,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
