//! API Routes
//!
//! Configures the Axum router with the RPC methods and service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_handler, delete_handler, get_handler, health_handler, methods_handler, pop_handler,
    shift_handler, stats_handler, unshift_handler, AppState,
};
use crate::cache::CacheValue;

/// Default cap on requests handled at once.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 200;

/// Registers the six operations for one value type under `/rpc/<Op><Type>`.
fn typed_routes<V>(router: Router<AppState>) -> Router<AppState>
where
    V: CacheValue + Serialize + DeserializeOwned,
{
    let suffix = V::KIND.method_suffix();

    router
        .route(&format!("/rpc/Add{}", suffix), post(add_handler::<V>))
        .route(&format!("/rpc/Unshift{}", suffix), post(unshift_handler::<V>))
        .route(&format!("/rpc/Get{}", suffix), post(get_handler::<V>))
        .route(&format!("/rpc/Delete{}", suffix), post(delete_handler::<V>))
        .route(&format!("/rpc/Shift{}", suffix), post(shift_handler::<V>))
        .route(&format!("/rpc/Pop{}", suffix), post(pop_handler::<V>))
}

/// Creates the main router with the default concurrency cap.
pub fn create_router(state: AppState) -> Router {
    create_router_with_limit(state, DEFAULT_MAX_CONCURRENT_REQUESTS)
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /rpc/{Add,Unshift,Get,Delete,Shift,Pop}{String,Int,Float}`
/// - `GET /rpc` - List the RPC methods
/// - `GET /stats` - Entry counts per store
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Concurrency: at most `max_concurrent_requests` in flight across all routes
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router_with_limit(state: AppState, max_concurrent_requests: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/rpc", get(methods_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler));
    let router = typed_routes::<String>(router);
    let router = typed_routes::<i64>(router);
    let router = typed_routes::<f64>(router);

    router
        .layer(GlobalConcurrencyLimitLayer::new(max_concurrent_requests.max(1)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
