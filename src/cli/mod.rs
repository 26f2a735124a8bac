//! # Command-Line Interface
//!
//! User-facing report commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Mode flags |
//! |---------|---------|------------|
//! | `tasks --days N` | Tasks by last update | `--updated`, `--notupdated` |
//! | `members --days N` | Member activity | `--updating`, `--notupdating` |
//!
//! Without a mode flag every task (or member) is listed. Mode flags are
//! mutually exclusive.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - fixed-width columns, one record per line
//! - `json` - a single JSON array
//!
//! ## Verbose Mode
//!
//! `--verbose` (or `-v`) logs configuration, counts and every request URL to
//! stderr:
//! ```bash
//! lptools --verbose tasks --days 14 --notupdated
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod session;
mod tasks;
mod members;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
