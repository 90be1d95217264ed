//! Async client for the Meilisearch REST API.

pub mod client;
pub mod config;
pub mod data_models;
pub mod error;
pub mod http;
pub mod index;
pub mod search_request;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use index::Index;
pub use search_request::SearchRequest;
