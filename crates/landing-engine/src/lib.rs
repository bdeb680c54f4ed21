//! Landing Engine - Orchestration layer
//!
//! Provides the command handlers that outer surfaces call. Each handler opens
//! a repository over the caller's connection, runs the core operation and owns
//! the lifecycle logging for it. Configuration loading lives here too.

pub mod commands;
pub mod config;

pub use self::config::LandingConfig;
