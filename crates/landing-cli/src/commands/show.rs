//! Show command
//!
//! Usage: landing show [SLUG] [--no-seed] [--partition]

use clap::Args;
use landing_engine::commands::page::show_landing_page;
use serde_json::json;

use super::{print_json, CmdResult, Context};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Page slug (defaults to the configured home slug)
    pub slug: Option<String>,

    /// Never generate sample content, even for a missing home page
    #[arg(long)]
    pub no_seed: bool,

    /// Print features split into the featured slot and the rest
    #[arg(long)]
    pub partition: bool,
}

/// Execute show command
pub fn execute(ctx: &Context, args: ShowArgs) -> CmdResult {
    let slug = args.slug.unwrap_or_else(|| ctx.config.home_slug.clone());
    let seed = ctx.config.seed_when_missing && !args.no_seed;

    let conn = ctx.connect()?;
    let Some(assembled) = show_landing_page(&conn, &slug, seed)? else {
        return Err(format!("No active landing page with slug '{}'", slug).into());
    };

    if args.partition {
        let partition = assembled.feature_partition();
        print_json(&json!({
            "page": &assembled.page,
            "hero_sections": &assembled.hero_sections,
            "featured": partition.featured,
            "others": partition.others,
            "cta_sections": &assembled.cta_sections,
        }))
    } else {
        print_json(&assembled)
    }
}
