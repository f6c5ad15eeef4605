//! Database layer - connection pool, migrations, and the todo repository
//!
//! # Design Principles
//!
//! - Connection pool with a small cap - no Arc<Mutex<Connection>>
//! - Every write is a single statement, so per-call atomicity comes
//!   from the store
//! - Not-found is detected via fetch_optional/RETURNING, never
//!   check-then-write

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{DbError, Todo, TodoRepo};
