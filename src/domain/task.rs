//! Task domain model
//!
//! The remote API reports `updated_at` as an ISO-8601 string carrying a
//! `+00:00` offset. [`normalize_timestamp`] strips the offset and keeps the
//! remainder as a naive UTC datetime.

use chrono::NaiveDateTime;
use thiserror::Error;

use super::member::MemberId;

/// Offset suffix the API appends to every timestamp
pub const UTC_SUFFIX: &str = "+00:00";

/// Timestamp layout left once the offset is stripped
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Layout used when printing timestamps
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp '{0}' does not end with +00:00")]
    MissingUtcSuffix(String),

    #[error("invalid timestamp '{value}': {reason}")]
    Invalid { value: String, reason: String },
}

/// Normalizes an API timestamp into a naive UTC datetime
///
/// The last `+00:00` in the string marks the end of the datetime part;
/// everything from it on is dropped before parsing.
pub fn normalize_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let end = raw
        .rfind(UTC_SUFFIX)
        .ok_or_else(|| TimestampError::MissingUtcSuffix(raw.to_string()))?;

    let trimmed = &raw[..end];
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|e| TimestampError::Invalid {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// A task fetched from the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,

    /// Member owning the task; `None` for unassigned tasks
    pub owner_id: Option<MemberId>,

    /// Member who last touched the task
    pub updated_by: Option<MemberId>,

    pub updated_at: NaiveDateTime,

    pub name: String,

    pub is_done: bool,
}

impl Task {
    /// Returns true if the task was touched at or after `since`
    pub fn updated_since(&self, since: NaiveDateTime) -> bool {
        self.updated_at >= since
    }
}
