//! CLI for building avtr.io avatar URLs.

mod commands;

use anyhow::Result;
use avtr_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub use commands::UrlArgs;
use commands::{run_completions, run_config, run_man, run_url};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "avtr")]
#[command(about = "Build avatar image URLs for the avtr.io rendering service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the avatar URL for an identity (email, "First Last" or initials).
    Url(UrlArgs),

    /// Show the config file location and effective settings.
    Config,

    /// Write shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Write a roff man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Url(args) => {
                let cfg = config::load_or_init()?;
                println!("{}", run_url(&cfg, &args)?);
            }
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
