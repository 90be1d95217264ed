use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tokio::time::{Instant, sleep};

use crate::client::index_path;
use crate::data_models::{IndexInfo, SearchResults, UpdateId, UpdateState, UpdateStatus};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::search_request::SearchRequest;

pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_WAIT_INTERVAL: Duration = Duration::from_millis(50);

/// Documents, search and update tracking for one index.
#[derive(Debug, Clone)]
pub struct Index {
    uid: String,
    http: HttpClient,
}

impl Index {
    pub(crate) fn new(uid: &str, http: HttpClient) -> Self {
        Self {
            uid: uid.to_string(),
            http,
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    fn path(&self, suffix: &str) -> String {
        format!("{}{}", index_path(&self.uid), suffix)
    }

    pub async fn info(&self) -> Result<IndexInfo> {
        self.http.get(&self.path("")).await
    }

    // =========================================================================
    // Search
    // =========================================================================

    pub async fn search<T: DeserializeOwned>(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResults<T>> {
        let path = self.path(&format!("/search{}", request.query_string()));
        self.http.get(&path).await
    }

    // =========================================================================
    // Documents
    // =========================================================================

    pub async fn get_document<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        let path = self.path(&format!("/documents/{}", urlencoding::encode(id)));
        self.http.get(&path).await
    }

    pub async fn get_documents<T: DeserializeOwned>(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<T>> {
        let path = self.path(&format!("/documents?offset={offset}&limit={limit}"));
        self.http.get(&path).await
    }

    /// Add or replace documents.
    pub async fn add_documents<T: Serialize>(
        &self,
        documents: &[T],
        primary_key: Option<&str>,
    ) -> Result<UpdateId> {
        self.http
            .post(&self.documents_path(primary_key), documents)
            .await
    }

    /// Add or partially update documents.
    pub async fn update_documents<T: Serialize>(
        &self,
        documents: &[T],
        primary_key: Option<&str>,
    ) -> Result<UpdateId> {
        self.http
            .put(&self.documents_path(primary_key), documents)
            .await
    }

    fn documents_path(&self, primary_key: Option<&str>) -> String {
        match primary_key {
            Some(key) => {
                self.path(&format!("/documents?primaryKey={}", urlencoding::encode(key)))
            }
            None => self.path("/documents"),
        }
    }

    pub async fn delete_document(&self, id: &str) -> Result<UpdateId> {
        let path = self.path(&format!("/documents/{}", urlencoding::encode(id)));
        self.http.delete(&path).await
    }

    pub async fn delete_documents<S: AsRef<str>>(&self, ids: &[S]) -> Result<UpdateId> {
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        self.http
            .post(&self.path("/documents/delete-batch"), &ids)
            .await
    }

    pub async fn delete_all_documents(&self) -> Result<UpdateId> {
        self.http.delete(&self.path("/documents")).await
    }

    // =========================================================================
    // Updates
    // =========================================================================

    pub async fn get_update(&self, update_id: u64) -> Result<UpdateStatus> {
        self.http
            .get(&self.path(&format!("/updates/{update_id}")))
            .await
    }

    pub async fn get_updates(&self) -> Result<Vec<UpdateStatus>> {
        self.http.get(&self.path("/updates")).await
    }

    /// Poll an update until it leaves the queue.
    ///
    /// Returns the final status when processed, [`Error::UpdateFailed`] when the
    /// server reports a failure and [`Error::Timeout`] once `timeout` has elapsed.
    /// `None` falls back to [`DEFAULT_WAIT_TIMEOUT`] / [`DEFAULT_WAIT_INTERVAL`].
    pub async fn wait_for_pending_update(
        &self,
        update_id: u64,
        timeout: Option<Duration>,
        interval: Option<Duration>,
    ) -> Result<UpdateStatus> {
        let timeout = timeout.unwrap_or(DEFAULT_WAIT_TIMEOUT);
        let interval = interval.unwrap_or(DEFAULT_WAIT_INTERVAL);
        let start = Instant::now();

        loop {
            let status = self.get_update(update_id).await?;
            if !status.status.is_pending() {
                if status.status == UpdateState::Failed {
                    return Err(Error::UpdateFailed {
                        update_id,
                        message: status.error.unwrap_or_default(),
                    });
                }
                return Ok(status);
            }

            let waited = start.elapsed();
            if waited >= timeout {
                return Err(Error::Timeout { update_id, waited });
            }
            log::debug!("update {update_id} on {} still pending", self.uid);
            sleep(interval).await;
        }
    }
}
