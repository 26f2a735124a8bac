//! Workspace member model

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a workspace member, as assigned by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A user account within a workspace
///
/// Only the fields the reports need are kept; anything else the API sends
/// is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,

    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub email: String,
}

impl Member {
    pub fn new(id: u64, user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: MemberId(id),
            user_name: user_name.into(),
            email: email.into(),
        }
    }
}

/// Members keyed by their identifier
pub type Members = HashMap<MemberId, Member>;

/// Builds the member mapping from a fetched list
///
/// A later record with a duplicate id replaces the earlier one.
pub fn index_members(members: impl IntoIterator<Item = Member>) -> Members {
    members.into_iter().map(|m| (m.id, m)).collect()
}
