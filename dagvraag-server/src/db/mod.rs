//! Database layer - connection pool, repositories and the store seam
//!
//! - Connection pool (max 5 connections by default)
//! - Parameterized queries only, schema is managed externally
//! - Single-row inserts rely on autocommit, no explicit transactions

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{DbError, Question};
pub use store::DailyStore;
