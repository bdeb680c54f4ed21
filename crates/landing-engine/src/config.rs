//! Layered configuration
//!
//! Precedence, lowest first: built-in defaults, `landing.toml` in the working
//! root (optional), then `LANDING_*` environment variables.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use landing_core::errors::{ExError, ExErrorKind};
use landing_core::logging_facility::Profile;
use landing_store::errors::Result;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "landing.toml";
pub const ENV_PREFIX: &str = "LANDING";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LandingConfig {
    /// SQLite file; relative paths resolve against the working root
    pub database_path: PathBuf,
    /// Page served when no slug is given
    pub home_slug: String,
    pub default_theme: String,
    /// Generate the sample page the first time the home page is requested
    pub seed_when_missing: bool,
    pub log_profile: Profile,
}

impl LandingConfig {
    /// Database path, anchored at `root` when relative
    pub fn database_path_in(&self, root: &Path) -> PathBuf {
        if self.database_path.is_absolute() {
            self.database_path.clone()
        } else {
            root.join(&self.database_path)
        }
    }
}

/// Create a Config builder with the built-in defaults applied
pub fn builder_with_defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("database_path", ".landing/landing.db")?
        .set_default("home_slug", "home")?
        .set_default("default_theme", "default")?
        .set_default("seed_when_missing", true)?
        .set_default("log_profile", "development")
}

/// Defaults plus the optional config file under `root`, without environment
pub fn builder_for_root(
    root: &Path,
) -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder_with_defaults()?.add_source(File::from(root.join(CONFIG_FILE)).required(false)))
}

/// Load the full layered configuration for `root`
///
/// # Errors
/// * `InvalidInput` - The config file is malformed or a value has the wrong type
pub fn load(root: &Path) -> Result<LandingConfig> {
    let settings = builder_for_root(root)
        .and_then(|b| b.add_source(Environment::with_prefix(ENV_PREFIX)).build())
        .map_err(config_error)?;
    settings.try_deserialize().map_err(config_error)
}

fn config_error(err: ConfigError) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("load_config")
        .with_message(err.to_string())
}
