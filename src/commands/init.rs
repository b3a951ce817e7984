//! # Init Command Implementation
//!
//! Clones every registry entry whose checkout is absent, then rebuilds both
//! navigation views. Entries that already exist are skipped, and individual
//! clone failures do not stop the pass; the command only fails outright
//! when the workspace root cannot be found or a base directory cannot be
//! created.

use anyhow::Result;
use console::Color;

use submod::lifecycle::{self, OutcomeKind};
use submod::output::tag;
use submod::process::SystemRunner;
use submod::workspace;

use super::CommandContext;

/// Execute the `init` command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let root = workspace::find_root()?;

    println!("Initializing submodules...");
    let report = lifecycle::init(&ctx.registry, &root, &SystemRunner)?;

    for outcome in &report.clones {
        match &outcome.kind {
            OutcomeKind::Done => {
                println!("  {} {}", tag(&ctx.output, "done", Color::Green), outcome.name)
            }
            OutcomeKind::Skipped => println!(
                "  {} {} already exists",
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

    println!("\nCreating symlinks...");
    let mut failed = 0;
    for link in &report.links {
        match &link.error {
            None => println!(
                "  {} {} -> {}",
                tag(&ctx.output, "link", Color::Green),
                link.link.display(),
                link.target.display()
            ),
            Some(error) => {
                failed += 1;
                println!(
                    "  {} {}: {error}",
                    tag(&ctx.output, "error", Color::Red),
                    link.link.display()
                );
            }
        }
    }

    if failed == 0 {
        println!("Symlinks created successfully");
    } else {
        println!("{failed} symlink(s) could not be created");
    }
    Ok(())
}
