//! `lptools members` - member activity

use anyhow::Result;
use clap::Args;

use super::output::Output;
use super::session::{since_days_ago, Session};
use crate::domain::{member_report, MemberReportMode};

#[derive(Args, Debug)]
pub struct MembersArgs {
    /// The number of days to look back for updates
    #[arg(long, short)]
    pub days: u32,

    /// Show members who updated something in the last N days
    #[arg(long, short, conflicts_with = "notupdating")]
    pub updating: bool,

    /// Show members who did NOT update anything in the last N days
    #[arg(long, short)]
    pub notupdating: bool,

    /// Count updates on tasks that are already done
    #[arg(long)]
    pub include_done: bool,
}

impl MembersArgs {
    pub fn mode(&self) -> MemberReportMode {
        if self.updating {
            MemberReportMode::Updating
        } else if self.notupdating {
            MemberReportMode::NotUpdating
        } else {
            MemberReportMode::All
        }
    }
}

pub fn run(args: MembersArgs, session: &Session, output: &Output) -> Result<()> {
    let since = since_days_ago(args.days)?;
    let mode = args.mode();
    output.verbose_ctx("members", &format!("Mode {:?}, since {}", mode, since));

    let snapshot = session.fetch(args.include_done, output)?;
    let lines = member_report(&snapshot.tasks, &snapshot.members, since, mode);
    output.verbose_ctx("members", &format!("{} member(s) match", lines.len()));

    if output.is_json() {
        let items: Vec<_> = lines
            .iter()
            .map(|line| {
                serde_json::json!({
                    "id": line.0.id,
                    "email": line.0.email,
                    "user_name": line.0.user_name,
                })
            })
            .collect();
        output.data(&items);
    } else {
        output.lines(&lines);
    }

    Ok(())
}
