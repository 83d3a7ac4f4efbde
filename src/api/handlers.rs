//! API Handlers
//!
//! RPC handlers for the typed cache operations, written once and
//! instantiated per value type by the router.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::extract::RpcJson;
use crate::cache::{CacheStore, CacheValue, ValueKind};
use crate::error::{CacheError, Result};
use crate::models::{
    HealthResponse, ItemRequest, ItemResponse, KeyRequest, MethodsResponse, StatsResponse,
    SuccessResponse,
};

/// Name reported by the method listing.
pub const SERVICE_NAME: &str = "stricache";

/// Operation prefixes of the RPC method names, one set per value kind.
pub const OPERATIONS: [&str; 6] = ["Add", "Unshift", "Get", "Delete", "Shift", "Pop"];

/// Application state shared across all handlers.
///
/// The cache does its own locking, so handlers only need a shared handle.
#[derive(Clone, Default)]
pub struct AppState {
    pub cache: Arc<CacheStore>,
}

impl AppState {
    /// Creates a new AppState around the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }
}

/// Every RPC method name, e.g. `AddString` or `PopFloat`.
pub fn method_names() -> Vec<String> {
    ValueKind::ALL
        .iter()
        .flat_map(|kind| {
            OPERATIONS
                .iter()
                .map(move |op| format!("{}{}", op, kind.method_suffix()))
        })
        .collect()
}

fn validated<T>(problem: Option<String>, value: T) -> Result<T> {
    match problem {
        Some(msg) => Err(CacheError::InvalidRequest(msg)),
        None => Ok(value),
    }
}

/// Handler for POST /rpc/Add{String,Int,Float}
///
/// Appends an entry, or overwrites an existing key in place.
pub async fn add_handler<V>(
    State(state): State<AppState>,
    RpcJson(req): RpcJson<ItemRequest<V>>,
) -> Result<Json<ItemResponse<V>>>
where
    V: CacheValue + Serialize + DeserializeOwned,
{
    let req = validated(req.validate(), req)?;
    debug!(kind = %V::KIND, key = %req.key, "add");

    let entry = state.cache.add(req.key, req.value);
    Ok(Json(entry.into()))
}

/// Handler for POST /rpc/Unshift{String,Int,Float}
///
/// Prepends an entry, moving an existing key to the front.
pub async fn unshift_handler<V>(
    State(state): State<AppState>,
    RpcJson(req): RpcJson<ItemRequest<V>>,
) -> Result<Json<ItemResponse<V>>>
where
    V: CacheValue + Serialize + DeserializeOwned,
{
    let req = validated(req.validate(), req)?;
    debug!(kind = %V::KIND, key = %req.key, "unshift");

    let entry = state.cache.unshift(req.key, req.value);
    Ok(Json(entry.into()))
}

/// Handler for POST /rpc/Get{String,Int,Float}
pub async fn get_handler<V>(
    State(state): State<AppState>,
    RpcJson(req): RpcJson<KeyRequest>,
) -> Result<Json<ItemResponse<V>>>
where
    V: CacheValue + Serialize,
{
    let req = validated(req.validate(), req)?;

    let value = state.cache.get::<V>(&req.key)?;
    Ok(Json(ItemResponse::new(req.key, value)))
}

/// Handler for POST /rpc/Delete{String,Int,Float}
///
/// Succeeds whether or not the key existed.
pub async fn delete_handler<V>(
    State(state): State<AppState>,
    RpcJson(req): RpcJson<KeyRequest>,
) -> Result<Json<SuccessResponse>>
where
    V: CacheValue,
{
    let req = validated(req.validate(), req)?;

    let removed = state.cache.delete::<V>(&req.key);
    debug!(kind = %V::KIND, key = %req.key, removed, "delete");

    Ok(Json(SuccessResponse::ok()))
}

/// Handler for POST /rpc/Shift{String,Int,Float}
///
/// Removes and returns the oldest entry.
pub async fn shift_handler<V>(State(state): State<AppState>) -> Result<Json<ItemResponse<V>>>
where
    V: CacheValue + Serialize,
{
    let entry = state.cache.shift::<V>().inspect_err(|err| {
        debug!(kind = %V::KIND, error = %err, "shift failed");
    })?;
    Ok(Json(entry.into()))
}

/// Handler for POST /rpc/Pop{String,Int,Float}
///
/// Removes and returns the newest entry.
pub async fn pop_handler<V>(State(state): State<AppState>) -> Result<Json<ItemResponse<V>>>
where
    V: CacheValue + Serialize,
{
    let entry = state.cache.pop::<V>().inspect_err(|err| {
        debug!(kind = %V::KIND, error = %err, "pop failed");
    })?;
    Ok(Json(entry.into()))
}

/// Handler for GET /rpc
///
/// Lists the callable methods.
pub async fn methods_handler() -> Json<MethodsResponse> {
    Json(MethodsResponse::new(SERVICE_NAME, method_names()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item<V>(key: &str, value: V) -> RpcJson<ItemRequest<V>> {
        RpcJson(ItemRequest {
            key: key.to_string(),
            value,
        })
    }

    fn key(key: &str) -> RpcJson<KeyRequest> {
        RpcJson(KeyRequest {
            key: key.to_string(),
        })
    }

    #[tokio::test]
    async fn test_add_and_get_handler() {
        let state = AppState::default();

        let result = add_handler(State(state.clone()), item("test1", "test".to_string())).await;
        assert!(result.is_ok());

        let response = get_handler::<String>(State(state.clone()), key("test1"))
            .await
            .unwrap();
        assert_eq!(response.value, "test");
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = AppState::default();

        let result = get_handler::<i64>(State(state), key("nonexistent")).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_handler_idempotent() {
        let state = AppState::default();
        add_handler(State(state.clone()), item("to_delete", 1.5f64))
            .await
            .unwrap();

        let first = delete_handler::<f64>(State(state.clone()), key("to_delete")).await;
        let second = delete_handler::<f64>(State(state.clone()), key("to_delete")).await;
        assert!(first.unwrap().success);
        assert!(second.unwrap().success);

        let result = get_handler::<f64>(State(state), key("to_delete")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unshift_then_shift_handler() {
        let state = AppState::default();
        add_handler(State(state.clone()), item("a", 1i64)).await.unwrap();
        unshift_handler(State(state.clone()), item("b", 2i64))
            .await
            .unwrap();

        let response = shift_handler::<i64>(State(state)).await.unwrap();
        assert_eq!(response.key, "b");
        assert_eq!(response.value, 2);
    }

    #[tokio::test]
    async fn test_pop_empty_handler() {
        let state = AppState::default();

        let result = pop_handler::<String>(State(state)).await;
        assert!(matches!(result, Err(CacheError::EmptyStore(ValueKind::String))));
    }

    #[tokio::test]
    async fn test_add_invalid_request() {
        let state = AppState::default();

        let result = add_handler(State(state.clone()), item("", "value".to_string())).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
        assert_eq!(state.cache.stats().total_entries, 0);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::default();
        add_handler(State(state.clone()), item("n", 7i64)).await.unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.ints, 1);
        assert_eq!(response.total_entries, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_method_names() {
        let names = method_names();
        assert_eq!(names.len(), 18);
        assert_eq!(names[0], "AddString");
        assert!(names.contains(&"UnshiftInt".to_string()));
        assert!(names.contains(&"PopFloat".to_string()));
    }
}
