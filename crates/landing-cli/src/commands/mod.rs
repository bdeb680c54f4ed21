pub mod seed;
pub mod show;
pub mod theme;

use std::path::PathBuf;

use landing_engine::config::{self, LandingConfig};
use rusqlite::Connection;
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Loaded configuration plus the database it points at
pub struct Context {
    pub config: LandingConfig,
    pub db_path: PathBuf,
}

impl Context {
    /// Load configuration from the working directory; `db` wins over it
    pub fn load(db: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let root = std::env::current_dir()?;
        let config = config::load(&root)?;
        let db_path = db.unwrap_or_else(|| config.database_path_in(&root));
        Ok(Self { config, db_path })
    }

    pub fn connect(&self) -> Result<Connection, Box<dyn std::error::Error>> {
        Ok(landing_store::db::connect(&self.db_path)?)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
