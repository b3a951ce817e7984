//! # Links Command Implementation
//!
//! Rebuilds both navigation views from the registry without touching the
//! checkouts. The views are fully derived, so this is always safe to run;
//! stale links are replaced and per-link failures are reported without
//! aborting the rest.

use anyhow::Result;
use console::Color;

use submod::links;
use submod::output::tag;
use submod::workspace;

use super::CommandContext;

/// Execute the `links` command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let root = workspace::find_root()?;

    println!("Creating symlinks...");
    let reports = links::build_views(&ctx.registry, &root)?;

    let mut failed = 0;
    for report in &reports {
        match &report.error {
            None => println!(
                "  {} {} -> {}",
                tag(&ctx.output, "link", Color::Green),
                report.link.display(),
                report.target.display()
            ),
            Some(error) => {
                failed += 1;
                println!(
                    "  {} {}: {error}",
                    tag(&ctx.output, "error", Color::Red),
                    report.link.display()
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
