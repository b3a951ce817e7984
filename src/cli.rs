//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use submod::config::Registry;
use submod::output::OutputConfig;
use submod::{config, defaults};

use crate::commands::{self, CommandContext};

/// Submodule Manager - flat checkouts, derived views, build-tool dispatch
#[derive(Parser, Debug)]
#[command(name = "sm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Path to a YAML registry file overriding the built-in catalog
    #[arg(long, global = true, value_name = "FILE", env = defaults::REGISTRY_ENV)]
    registry: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone all missing submodules and rebuild the navigation views
    Init,

    /// Sync all submodules (git pull --rebase)
    Sync,

    /// Show branch, working-tree state, and latest commit per submodule
    Status,

    /// Rebuild the by-type and by-product symlink views
    Links,

    /// Run a command in a project (auto-detects just/npm/make)
    Run(commands::run::RunArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let level = self
            .log_level
            .parse()
            .with_context(|| format!("invalid log level '{}'", self.log_level))?;
        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .init();

        let output = OutputConfig::from_env_and_flag(&self.color);
        let registry = self.load_registry()?;
        let ctx = CommandContext { registry, output };

        match self.command {
            Commands::Init => commands::init::execute(&ctx),
            Commands::Sync => commands::sync::execute(&ctx),
            Commands::Status => commands::status::execute(&ctx),
            Commands::Links => commands::links::execute(&ctx),
            Commands::Run(args) => commands::run::execute(args, &ctx),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }

    fn load_registry(&self) -> Result<Registry> {
        match &self.registry {
            Some(path) => config::from_file(path)
                .with_context(|| format!("failed to load registry from {}", path.display())),
            None => Ok(defaults::default_registry()),
        }
    }
}
