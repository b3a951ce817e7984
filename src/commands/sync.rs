//! # Sync Command Implementation
//!
//! Runs `git pull --rebase` in every existing checkout, in registry order.
//! Absent checkouts are skipped (reported, not an error) and individual
//! pull failures do not stop the pass.

use anyhow::Result;
use console::Color;

use submod::lifecycle::{self, OutcomeKind};
use submod::output::tag;
use submod::process::SystemRunner;
use submod::workspace;

use super::CommandContext;

/// Execute the `sync` command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let root = workspace::find_root()?;

    println!("Syncing submodules...");
    let outcomes = lifecycle::sync(&ctx.registry, &root, &SystemRunner);

    for outcome in &outcomes {
        match &outcome.kind {
            OutcomeKind::Done => {
                println!("  {} {}", tag(&ctx.output, "done", Color::Green), outcome.name)
            }
            OutcomeKind::Skipped => println!(
                "  {} {} not found",
                tag(&ctx.output, "skip", Color::Yellow),
                outcome.name
            ),
            OutcomeKind::Failed(error) => println!(
                "  {} {}: {error}",
                tag(&ctx.output, "error", Color::Red),
                outcome.name
            ),
        }
    }
    Ok(())
}
