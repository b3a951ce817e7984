//! # Status Command Implementation
//!
//! Renders the per-submodule state table: branch, working-tree
//! cleanliness, and latest-commit summary, in registry order. A safe,
//! read-only operation.

use anyhow::Result;

use submod::process::SystemRunner;
use submod::status;
use submod::workspace;

use super::CommandContext;

/// Execute the `status` command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let root = workspace::find_root()?;

    let rows = status::collect(&ctx.registry, &root, &SystemRunner);
    print!("{}", status::render(&rows, &ctx.output));
    Ok(())
}
