//! Sample content command
//!
//! Usage: landing seed [--db <PATH>]

use landing_engine::commands::page::seed_sample_content;

use super::{print_json, CmdResult, Context};

/// Execute seed command
pub fn execute(ctx: &Context) -> CmdResult {
    let conn = ctx.connect()?;
    let page = seed_sample_content(&conn)?;
    print_json(&page)
}
