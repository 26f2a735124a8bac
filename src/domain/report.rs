//! Report generators
//!
//! Pure views over fetched tasks and members. Nothing here talks to the
//! network or mutates its input; the CLI decides how lines are printed.

use std::collections::HashSet;
use std::fmt;

use chrono::{Duration, NaiveDateTime};

use super::member::{Member, MemberId, Members};
use super::task::{Task, DISPLAY_FORMAT};

/// Label printed for tasks whose owner is not in the member mapping
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Returns the cutoff `days` before `now`
///
/// `None` when the result falls outside the representable date range.
pub fn cutoff(now: NaiveDateTime, days: u32) -> Option<NaiveDateTime> {
    Duration::try_days(i64::from(days)).and_then(|delta| now.checked_sub_signed(delta))
}

/// Which tasks the task report keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskReportMode {
    #[default]
    All,
    /// `updated_at >= since`
    UpdatedSince,
    /// `updated_at < since`
    NotUpdatedSince,
}

impl TaskReportMode {
    pub fn keeps(&self, task: &Task, since: NaiveDateTime) -> bool {
        match self {
            TaskReportMode::All => true,
            TaskReportMode::UpdatedSince => task.updated_since(since),
            TaskReportMode::NotUpdatedSince => !task.updated_since(since),
        }
    }
}

/// Which members the activity report keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberReportMode {
    #[default]
    All,
    /// Members who updated at least one task since the cutoff
    Updating,
    /// Members who updated nothing since the cutoff
    NotUpdating,
}

/// Resolved owner of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner<'a> {
    Known(&'a Member),
    Unknown,
}

impl<'a> Owner<'a> {
    pub fn resolve(id: Option<MemberId>, members: &'a Members) -> Self {
        id.and_then(|id| members.get(&id))
            .map_or(Owner::Unknown, Owner::Known)
    }

    /// Name shown in reports
    pub fn label(&self) -> &'a str {
        match *self {
            Owner::Known(member) => &member.user_name,
            Owner::Unknown => UNKNOWN_OWNER,
        }
    }
}

/// One row of the task report
#[derive(Debug, Clone, Copy)]
pub struct TaskLine<'a> {
    pub owner: Owner<'a>,
    pub task: &'a Task,
}

impl TaskLine<'_> {
    pub fn updated_at(&self) -> String {
        self.task.updated_at.format(DISPLAY_FORMAT).to_string()
    }
}

impl fmt::Display for TaskLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>20}   {:>20}   {}",
            self.owner.label(),
            self.updated_at(),
            self.task.name
        )
    }
}

/// One row of the member-activity report
#[derive(Debug, Clone, Copy)]
pub struct MemberLine<'a>(pub &'a Member);

impl fmt::Display for MemberLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>40}   {:<30}", self.0.email, self.0.user_name)
    }
}

/// Builds the task report, keeping fetch order
pub fn task_report<'a>(
    tasks: &'a [Task],
    members: &'a Members,
    since: NaiveDateTime,
    mode: TaskReportMode,
) -> Vec<TaskLine<'a>> {
    tasks
        .iter()
        .filter(|task| mode.keeps(task, since))
        .map(|task| TaskLine {
            owner: Owner::resolve(task.owner_id, members),
            task,
        })
        .collect()
}

/// Ids of everyone who updated a task at or after `since`
///
/// Updaters missing from any member mapping are included; callers intersect
/// with their own mapping.
pub fn active_member_ids(tasks: &[Task], since: NaiveDateTime) -> HashSet<MemberId> {
    tasks
        .iter()
        .filter(|task| task.updated_since(since))
        .filter_map(|task| task.updated_by)
        .collect()
}

/// Builds the member-activity report
///
/// Only members present in `members` are reported. Lines are ordered by
/// email, then user name.
pub fn member_report<'a>(
    tasks: &[Task],
    members: &'a Members,
    since: NaiveDateTime,
    mode: MemberReportMode,
) -> Vec<MemberLine<'a>> {
    let active = active_member_ids(tasks, since);

    let mut lines: Vec<_> = members
        .values()
        .filter(|member| match mode {
            MemberReportMode::All => true,
            MemberReportMode::Updating => active.contains(&member.id),
            MemberReportMode::NotUpdating => !active.contains(&member.id),
        })
        .map(MemberLine)
        .collect();

    lines.sort_by(|a, b| {
        (&a.0.email, &a.0.user_name, a.0.id).cmp(&(&b.0.email, &b.0.user_name, b.0.id))
    });
    lines
}
