//! API Module
//!
//! RPC handlers and routing for the cache server.
//!
//! # Endpoints
//! - `POST /rpc/<Op><Type>` - One route per typed cache operation, e.g.
//!   `AddString`, `GetInt`, `PopFloat`
//! - `GET /rpc` - List the RPC methods
//! - `GET /stats` - Entry counts per store
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::RpcJson;
pub use handlers::*;
pub use routes::{create_router, create_router_with_limit};
