//! Landing Store - SQLite persistence for landing page content
//!
//! Provides:
//! - Connection management (`db::connect` opens, configures and migrates)
//! - Embedded, checksummed schema migrations
//! - `SqliteRepo`, the SQLite implementation of `ContentStore`

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
