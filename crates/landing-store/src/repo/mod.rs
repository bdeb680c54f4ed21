//! Repository layer mapping landing content to SQLite rows

mod rows;
pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
