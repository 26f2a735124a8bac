//! Domain models for lptools
//!
//! Members, tasks, the membership filter and the report generators. Nothing
//! in here performs I/O.

mod member;
mod task;
mod filter;
mod report;

pub use member::{index_members, Member, MemberId, Members};
pub use task::{normalize_timestamp, Task, TimestampError, DISPLAY_FORMAT, UTC_SUFFIX};
pub use filter::{filter_members, is_ignored, ALWAYS_IGNORED};
pub use report::{
    active_member_ids, cutoff, member_report, task_report, MemberLine, MemberReportMode, Owner,
    TaskLine, TaskReportMode, UNKNOWN_OWNER,
};
