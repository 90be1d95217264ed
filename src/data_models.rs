use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Index descriptor as returned by `GET /indexes` and `GET /indexes/{uid}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexInfo {
    pub uid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub primary_key: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateIndexBody<'a> {
    pub uid: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<&'a str>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateIndexBody<'a> {
    pub primary_key: &'a str,
}

/// Handle returned by every asynchronous write; poll it with
/// [`crate::index::Index::get_update`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateId {
    pub update_id: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateState {
    Enqueued,
    Processing,
    Processed,
    Failed,
}

impl UpdateState {
    pub fn is_pending(self) -> bool {
        matches!(self, UpdateState::Enqueued | UpdateState::Processing)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpdateType {
    pub name: String,
    #[serde(default)]
    pub number: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    pub status: UpdateState,
    pub update_id: u64,
    #[serde(rename = "type", default)]
    pub update_type: Option<UpdateType>,
    /// Seconds spent processing; absent while enqueued.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub enqueued_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    pub hits: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    pub nb_hits: usize,
    #[serde(default)]
    pub exhaustive_nb_hits: bool,
    pub processing_time_ms: u64,
    pub query: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub commit_sha: String,
    pub build_date: String,
    pub pkg_version: String,
}

/// Error body sent by the server alongside a non-2xx status.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_link: Option<String>,
}
