//! `lptools tasks` - tasks by last update

use anyhow::Result;
use clap::Args;

use super::output::Output;
use super::session::{since_days_ago, Session};
use crate::domain::{task_report, TaskReportMode};

#[derive(Args, Debug)]
pub struct TasksArgs {
    /// The number of days since task was updated
    #[arg(long, short)]
    pub days: u32,

    /// Show tasks that were updated in the last N days
    #[arg(long, short, conflicts_with = "notupdated")]
    pub updated: bool,

    /// Show tasks that were NOT updated in the last N days
    #[arg(long, short)]
    pub notupdated: bool,

    /// Include tasks that are already done
    #[arg(long)]
    pub include_done: bool,
}

impl TasksArgs {
    pub fn mode(&self) -> TaskReportMode {
        if self.updated {
            TaskReportMode::UpdatedSince
        } else if self.notupdated {
            TaskReportMode::NotUpdatedSince
        } else {
            TaskReportMode::All
        }
    }
}

pub fn run(args: TasksArgs, session: &Session, output: &Output) -> Result<()> {
    let since = since_days_ago(args.days)?;
    let mode = args.mode();
    output.verbose_ctx("tasks", &format!("Mode {:?}, since {}", mode, since));

    let snapshot = session.fetch(args.include_done, output)?;
    let lines = task_report(&snapshot.tasks, &snapshot.members, since, mode);
    output.verbose_ctx("tasks", &format!("{} task(s) match", lines.len()));

    if output.is_json() {
        let items: Vec<_> = lines
            .iter()
            .map(|line| {
                serde_json::json!({
                    "id": line.task.id,
                    "owner": line.owner.label(),
                    "updated_at": line.updated_at(),
                    "name": line.task.name,
                    "is_done": line.task.is_done,
                })
            })
            .collect();
        output.data(&items);
    } else {
        output.lines(&lines);
    }

    Ok(())
}
