//! # Run Command Implementation
//!
//! Dispatches a command into one project, or into every project of a
//! product line, auto-detecting each project's build tool:
//!
//! - `justfile` -> `just <command>`
//! - `package.json` -> `npm run <command>`
//! - `Makefile` -> `make <command>`
//!
//! The external command inherits this process's stdin/stdout/stderr, so
//! interactive dev servers behave as if launched directly. Product-wide
//! dispatch continues past individual failures and reports them at the
//! end; only an unknown product is a hard error.

use anyhow::{bail, Result};
use console::Color;

use submod::dispatch;
use submod::output::tag;
use submod::process::SystemRunner;
use submod::runner::RunnerKind;
use submod::workspace;

use super::CommandContext;

/// Run a command in a project (auto-detects just/npm/make)
#[derive(clap::Args, Debug)]
#[command(after_help = "\
Examples:
  sm run lingbo-desktop dev     # Run 'just dev' in lingbo-desktop
  sm run lingbo-web dev         # Run 'npm run dev' in lingbo-web
  sm run --product lingbo dev   # Run 'dev' in all lingbo projects
  sm run --list                 # List all projects and their runners")]
pub struct RunArgs {
    /// Project name, or the command when --product is given
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,

    /// Command, script, or target name to run
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// List all projects and their runners
    #[arg(short, long)]
    pub list: bool,

    /// Run the command in all projects of a product line
    #[arg(short, long, value_name = "PRODUCT", conflicts_with = "list")]
    pub product: Option<String>,
}

/// Execute the `run` command.
pub fn execute(args: RunArgs, ctx: &CommandContext) -> Result<()> {
    let root = workspace::find_root()?;

    if args.list {
        print_runnable(ctx, &root);
        return Ok(());
    }

    if let Some(product) = &args.product {
        let Some(command) = &args.project else {
            bail!("command required: sm run --product <product> <command>");
        };
        let outcomes =
            dispatch::run_for_product(&ctx.registry, &root, &SystemRunner, product, command)?;

        let failed: Vec<_> = outcomes.iter().filter(|o| o.result.is_err()).collect();
        for outcome in &failed {
            if let Err(error) = &outcome.result {
                println!(
                    "  {} {}: {error}",
                    tag(&ctx.output, "error", Color::Red),
                    outcome.name
                );
            }
        }
        println!(
            "{} of {} projects succeeded",
            outcomes.len() - failed.len(),
            outcomes.len()
        );
        return Ok(());
    }

    let (Some(project), Some(command)) = (&args.project, &args.command) else {
        bail!("usage: sm run <project> <command>");
    };
    Ok(dispatch::run_in_project(
        &ctx.registry,
        &root,
        &SystemRunner,
        project,
        command,
    )?)
}

fn print_runnable(ctx: &CommandContext, root: &std::path::Path) {
    println!("{:<20} {:<12} {:<10}", "PROJECT", "PRODUCT", "RUNNER");
    println!("{}", "-".repeat(44));

    for row in dispatch::list_runnable(&ctx.registry, root) {
        let runner = match row.runner {
            RunnerKind::Unknown => "-",
            kind => kind.as_str(),
        };
        println!("{:<20} {:<12} {:<10}", row.name, row.product, runner);
    }
}
