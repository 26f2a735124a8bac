//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::members::{self, MembersArgs};
use super::output::{Output, OutputFormat};
use super::session::Session;
use super::tasks::{self, TasksArgs};

#[derive(Parser)]
#[command(name = "lptools")]
#[command(
    author,
    version,
    about = "Show LiquidPlanner tasks and members according to various criteria"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Log every API request URL to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// LiquidPlanner workspace (overrides the configured one)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<String>,

    /// Configuration file (defaults to ~/.lptools)
    #[arg(long, global = true, env = "LPTOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show tasks according to when they were last updated
    Tasks(TasksArgs),

    /// Show members according to whether they updated anything recently
    Members(MembersArgs),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("lptools starting");
    let session = Session::open(cli.config, cli.workspace, &output)?;

    match cli.command {
        Commands::Tasks(args) => tasks::run(args, &session, &output)?,
        Commands::Members(args) => members::run(args, &session, &output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
