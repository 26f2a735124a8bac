//! Resource fetcher for one LiquidPlanner workspace

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;
use super::http::HttpClient;
use crate::domain::{index_members, normalize_timestamp, Member, MemberId, Members, Task};

/// Workspace API root; `{workspace}` is replaced with the workspace id
pub const DEFAULT_API_URL: &str = "https://app.liquidplanner.com/api/workspaces/{workspace}/";

/// Server-side filter that leaves done tasks out
pub const NOT_DONE_FILTER: &str = "filter[]=is_done%20is%20false";

/// Task record as the API sends it, before timestamp normalization
#[derive(Debug, Deserialize)]
struct RawTask {
    id: u64,
    #[serde(default)]
    owner_id: Option<MemberId>,
    #[serde(default)]
    updated_by: Option<MemberId>,
    updated_at: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    is_done: bool,
}

impl TryFrom<RawTask> for Task {
    type Error = ApiError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let updated_at = normalize_timestamp(&raw.updated_at).map_err(|source| ApiError::Timestamp {
            task_id: raw.id,
            source,
        })?;

        Ok(Task {
            id: raw.id,
            owner_id: raw.owner_id,
            updated_by: raw.updated_by,
            updated_at,
            name: raw.name.unwrap_or_default(),
            is_done: raw.is_done,
        })
    }
}

/// Authenticated view of one workspace
pub struct LpApi<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> LpApi<C> {
    /// Connects to the hosted service
    pub fn new(client: C, workspace: &str) -> Self {
        Self::with_base_url(client, DEFAULT_API_URL, workspace)
    }

    /// Connects to a custom API root
    ///
    /// `template` may contain `{workspace}`; a trailing slash is added when
    /// missing so endpoint names can be appended.
    pub fn with_base_url(client: C, template: &str, workspace: &str) -> Self {
        let mut base_url = template.replace("{workspace}", workspace);
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn members_url(&self) -> String {
        format!("{}members", self.base_url)
    }

    pub fn tasks_url(&self, include_done: bool) -> String {
        if include_done {
            format!("{}tasks", self.base_url)
        } else {
            format!("{}tasks?{}", self.base_url, NOT_DONE_FILTER)
        }
    }

    /// Fetches every member of the workspace, keyed by id
    pub fn members(&self) -> Result<Members, ApiError> {
        let members: Vec<Member> = self.get_json(&self.members_url())?;
        Ok(index_members(members))
    }

    /// Fetches tasks in API order, optionally including finished ones
    pub fn tasks(&self, include_done: bool) -> Result<Vec<Task>, ApiError> {
        let raw: Vec<RawTask> = self.get_json(&self.tasks_url(include_done))?;
        raw.into_iter().map(Task::try_from).collect()
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.client.get(url)?;
        serde_json::from_str(&body).map_err(|source| ApiError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
