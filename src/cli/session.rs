//! Workspace session shared by the report commands
//!
//! Resolves configuration, builds the authenticated API client and runs the
//! fetch → filter part of the pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};

use super::output::Output;
use crate::api::{BasicAuthClient, LpApi};
use crate::config::Config;
use crate::domain::{cutoff, filter_members, Members, Task};

/// Everything a report needs, fetched in one pass
pub struct Snapshot {
    pub members: Members,
    pub tasks: Vec<Task>,
}

/// An authenticated connection to one workspace
pub struct Session {
    api: LpApi<BasicAuthClient>,
    ignore_users: Vec<String>,
}

impl Session {
    /// Loads configuration and connects to the chosen workspace
    ///
    /// `workspace` overrides the configured default.
    pub fn open(
        config_path: Option<PathBuf>,
        workspace: Option<String>,
        output: &Output,
    ) -> Result<Self> {
        let path = match config_path {
            Some(path) => path,
            None => Config::default_path()?,
        };
        output.verbose_ctx("config", &format!("Reading {}", path.display()));

        let config = Config::load(&path)?;
        let workspace = workspace.unwrap_or_else(|| config.workspace.clone());
        output.verbose_ctx(
            "config",
            &format!(
                "Workspace {}, {} ignored user(s)",
                workspace,
                config.ignore_users.len()
            ),
        );

        let client = BasicAuthClient::new(&config.username, &config.password)
            .verbose(output.is_verbose());
        let api = LpApi::with_base_url(client, config.api_url(), &workspace);

        Ok(Self {
            api,
            ignore_users: config.ignore_users,
        })
    }

    /// Fetches members then tasks, and drops ignored members
    pub fn fetch(&self, include_done: bool, output: &Output) -> Result<Snapshot> {
        let raw = self.api.members().context("Failed to fetch members")?;
        let members = filter_members(raw, self.ignore_users.as_slice());
        output.verbose_ctx("fetch", &format!("{} member(s) after filtering", members.len()));

        let tasks = self.api.tasks(include_done).context("Failed to fetch tasks")?;
        output.verbose_ctx("fetch", &format!("{} task(s)", tasks.len()));

        Ok(Snapshot { members, tasks })
    }
}

/// Cutoff `days` before the current UTC time
pub fn since_days_ago(days: u32) -> Result<NaiveDateTime> {
    cutoff(Utc::now().naive_utc(), days)
        .with_context(|| format!("--days {} reaches past the supported date range", days))
}
