use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Meilisearch API error ({status}): {message}")]
    Api {
        status: StatusCode,
        message: String,
        code: Option<String>,
        error_type: Option<String>,
        link: Option<String>,
    },

    #[error("Failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Update {update_id} failed: {message}")]
    UpdateFailed { update_id: u64, message: String },

    #[error("Timed out after {waited:?} waiting for update {update_id}")]
    Timeout { update_id: u64, waited: Duration },
}

impl Error {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
