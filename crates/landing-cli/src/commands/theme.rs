//! Theme commands
//!
//! Usage: landing theme get [NAME]
//!        landing theme create <NAME> --primary <C> --secondary <C> --accent <C>

use clap::{Args, Subcommand};
use landing_core::model::ThemeCreate;
use landing_engine::commands::theme::{theme_create, theme_get};

use super::{print_json, CmdResult, Context};

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print an active theme (defaults to the configured default theme)
    Get { name: Option<String> },
    /// Create a theme with stock typography and spacing
    Create(CreateArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    pub name: String,

    #[arg(long)]
    pub primary: String,

    #[arg(long)]
    pub secondary: String,

    #[arg(long)]
    pub accent: String,

    #[arg(long)]
    pub description: Option<String>,
}

/// Execute theme command
pub fn execute(ctx: &Context, args: ThemeArgs) -> CmdResult {
    let conn = ctx.connect()?;
    match args.command {
        ThemeCommand::Get { name } => {
            let name = name.unwrap_or_else(|| ctx.config.default_theme.clone());
            match theme_get(&conn, &name)? {
                Some(theme) => print_json(&theme),
                None => Err(format!("No active theme named '{}'", name).into()),
            }
        }
        ThemeCommand::Create(create) => {
            let input = ThemeCreate {
                description: create.description,
                ..ThemeCreate::new(create.name, create.primary, create.secondary, create.accent)
            };
            print_json(&theme_create(&conn, input)?)
        }
    }
}
