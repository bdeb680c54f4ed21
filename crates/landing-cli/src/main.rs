//! Landing CLI
//!
//! Command-line interface for landing page content. Results are printed as
//! JSON on stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use landing_core::logging_facility;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "landing")]
#[command(about = "Landing page content store", long_about = None)]
struct Cli {
    /// SQLite database file (overrides `database_path` from configuration)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate the sample landing page
    Seed,
    /// Print an assembled landing page
    Show(commands::show::ShowArgs),
    /// Theme operations
    Theme(commands::theme::ThemeArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = commands::Context::load(cli.db).and_then(|ctx| {
        logging_facility::init(ctx.config.log_profile);
        match cli.command {
            Commands::Seed => commands::seed::execute(&ctx),
            Commands::Show(args) => commands::show::execute(&ctx, args),
            Commands::Theme(args) => commands::theme::execute(&ctx, args),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
