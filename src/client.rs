use crate::config::Config;
use crate::data_models::{CreateIndexBody, IndexInfo, UpdateIndexBody, Version};
use crate::error::Result;
use crate::http::HttpClient;
use crate::index::Index;

/// Entry point for talking to a Meilisearch server.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client from `MEILI_HOST` / `MEILI_MASTER_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    pub fn config(&self) -> &Config {
        self.http.config()
    }

    /// Handle on an index. No request is made until one of its methods is called.
    pub fn index(&self, uid: &str) -> Index {
        Index::new(uid, self.http.clone())
    }

    pub async fn get_indexes(&self) -> Result<Vec<IndexInfo>> {
        self.http.get("/indexes").await
    }

    pub async fn get_index(&self, uid: &str) -> Result<IndexInfo> {
        self.http.get(&index_path(uid)).await
    }

    pub async fn create_index(&self, uid: &str, primary_key: Option<&str>) -> Result<IndexInfo> {
        let body = CreateIndexBody { uid, primary_key };
        let info: IndexInfo = self.http.post("/indexes", &body).await?;
        log::info!("created index {}", info.uid);
        Ok(info)
    }

    pub async fn update_index(&self, uid: &str, primary_key: &str) -> Result<IndexInfo> {
        let body = UpdateIndexBody { primary_key };
        self.http.put(&index_path(uid), &body).await
    }

    pub async fn delete_index(&self, uid: &str) -> Result<()> {
        self.http.delete::<()>(&index_path(uid)).await?;
        log::info!("deleted index {uid}");
        Ok(())
    }

    /// Fetch the index, creating it when the server reports it missing.
    pub async fn get_or_create_index(
        &self,
        uid: &str,
        primary_key: Option<&str>,
    ) -> Result<IndexInfo> {
        match self.get_index(uid).await {
            Err(e) if e.is_not_found() => self.create_index(uid, primary_key).await,
            other => other,
        }
    }

    /// Succeeds when the server answers `GET /health` with a 2xx status.
    pub async fn health(&self) -> Result<()> {
        let _: serde_json::Value = self.http.get("/health").await?;
        Ok(())
    }

    pub async fn version(&self) -> Result<Version> {
        self.http.get("/version").await
    }
}

pub(crate) fn index_path(uid: &str) -> String {
    format!("/indexes/{}", urlencoding::encode(uid))
}
