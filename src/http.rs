use reqwest::{Method, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::Config;
use crate::data_models::ApiErrorBody;
use crate::error::{Error, Result};

pub const API_KEY_HEADER: &str = "X-Meili-API-Key";

/// Thin wrapper over a shared `reqwest::Client` that knows the server address
/// and API key, and turns responses into typed results.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: Config,
}

impl HttpClient {
    pub fn new(config: Config) -> Result<Self> {
        Url::parse(config.base_url())?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `path` must start with `/` and may carry a query string.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.config.base_url(), path))?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        log::debug!("{method} {path}");

        let mut request = self.client.request(method, url);
        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = api_error(status, &bytes);
            log::warn!("{path} failed: {err}");
            return Err(err);
        }

        decode_body(&bytes)
    }
}

/// Empty bodies (e.g. `204 No Content`) decode as JSON `null`, which fits `()`
/// and `Option<_>` targets.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(bytes)?)
}

fn api_error(status: StatusCode, bytes: &[u8]) -> Error {
    let body = serde_json::from_slice::<ApiErrorBody>(bytes).unwrap_or_else(|_| ApiErrorBody {
        message: String::from_utf8_lossy(bytes).trim().to_string(),
        ..Default::default()
    });

    Error::Api {
        status,
        message: body.message,
        code: body.error_code,
        error_type: body.error_type,
        link: body.error_link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let http = HttpClient::new(Config::new("http://localhost:7700/", None)).unwrap();
        let url = http.url("/indexes/movies").unwrap();
        assert_eq!(url.as_str(), "http://localhost:7700/indexes/movies");
    }

    #[test]
    fn test_url_keeps_encoded_query() {
        let http = HttpClient::new(Config::new("http://localhost:7700", None)).unwrap();
        let url = http
            .url("/indexes/movies/search?q=star%20wars&filters=year%20%3D%202000")
            .unwrap();
        assert_eq!(url.path(), "/indexes/movies/search");
        assert_eq!(url.query(), Some("q=star%20wars&filters=year%20%3D%202000"));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let err = HttpClient::new(Config::new("not a url", None)).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_decode_empty_body_as_unit() {
        decode_body::<()>(b"").unwrap();
        let none: Option<u32> = decode_body(b"  ").unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_api_error_from_json_body() {
        let body = br#"{"message":"Index movies not found","errorCode":"index_not_found","errorType":"invalid_request_error","errorLink":"https://docs.meilisearch.com/errors#index_not_found"}"#;
        match api_error(StatusCode::NOT_FOUND, body) {
            Error::Api {
                status,
                message,
                code,
                ..
            } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "Index movies not found");
                assert_eq!(code.as_deref(), Some("index_not_found"));
            }
            other => panic!("expected Api error, got: {other}"),
        }
    }

    #[test]
    fn test_api_error_from_plain_text_body() {
        let err = api_error(StatusCode::BAD_GATEWAY, b"upstream down\n");
        assert!(err.to_string().contains("upstream down"));
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
    }
}
