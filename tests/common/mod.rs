#![allow(dead_code)]

use meili_client::{Client, Config, Result};
use serde::{Deserialize, Serialize};

pub const LOCAL_HOST: &str = "http://localhost:7700";
pub const LOCAL_MASTER_KEY: &str = "masterKey";

/// Client for a locally running server; `MEILI_HOST` / `MEILI_MASTER_KEY` override the defaults.
pub fn test_client() -> Client {
    dotenvy::dotenv().ok();
    let host = std::env::var("MEILI_HOST").unwrap_or_else(|_| LOCAL_HOST.to_string());
    let key = std::env::var("MEILI_MASTER_KEY").unwrap_or_else(|_| LOCAL_MASTER_KEY.to_string());
    Client::new(Config::new(host, Some(&key))).unwrap()
}

/// Client pointed at a wiremock server.
pub fn mock_client(uri: &str) -> Client {
    Client::new(Config::new(uri, Some(LOCAL_MASTER_KEY))).unwrap()
}

/// Remove every index on the server, stopping at the first failure.
pub async fn delete_all_indexes(client: &Client) -> Result<()> {
    for index in client.get_indexes().await? {
        client.delete_index(&index.uid).await?;
    }
    Ok(())
}

pub fn unique_index_uid(prefix: &str) -> String {
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz0123456789".chars().collect();
    format!("{}_{}", prefix, nanoid::nanoid!(10, &alphabet))
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub year: Option<u32>,
}

pub fn movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Batman Begins".to_string(),
            overview: "Bruce Wayne returns to Gotham.".to_string(),
            year: Some(2005),
        },
        Movie {
            id: 2,
            title: "Star Wars".to_string(),
            overview: "A farm boy joins the rebellion.".to_string(),
            year: Some(1977),
        },
        Movie {
            id: 3,
            title: "Gladiator".to_string(),
            overview: "A general becomes a slave.".to_string(),
            year: Some(2000),
        },
    ]
}
