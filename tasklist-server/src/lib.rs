//! tasklist-server: HTTP CRUD service for todo records
//!
//! Exposes a paginated todo API over PostgreSQL: list, create, get,
//! full/partial update, delete. Validation happens before any store
//! access; errors map to 422/404/500 at the HTTP boundary.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::ValidationError;
