//! HTTP client for the YouTube Music catalog service.
//!
//! The service is consumed as a black box: five lookup operations returning
//! JSON payloads. Everything the gateway needs beyond these lookups (watch
//! and thumbnail URL conventions) is deterministic and synthesized locally.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Default catalog service endpoint (ytmusicapi-compatible sidecar).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001/api";

/// Timeout for provider requests. A dead provider must surface as an error
/// quickly enough for the fallback branch to answer the request.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("webmusic-api/", env!("CARGO_PKG_VERSION"));

/// Deterministic thumbnail URL for a video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg")
}

/// Canonical watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://music.youtube.com/watch?v={video_id}")
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors from the catalog provider. Call sites decide per endpoint whether
/// an error maps to a fallback value or to a wrapped 500.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected catalog payload: {0}")]
    Malformed(String),
}

/// The catalog service consumed by the gateway.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search the catalog, filtered to a result type, capped at `limit`.
    async fn search(
        &self,
        query: &str,
        filter: &str,
        limit: usize,
    ) -> ProviderResult<Vec<Value>>;

    /// Look up a single song by video id.
    async fn get_song(&self, video_id: &str) -> ProviderResult<Value>;

    /// Look up an artist page by channel id.
    async fn get_artist(&self, channel_id: &str) -> ProviderResult<Value>;

    /// Look up a playlist by playlist id.
    async fn get_playlist(&self, playlist_id: &str) -> ProviderResult<Value>;

    /// Look up the charts for a country code.
    async fn get_charts(&self, country: &str) -> ProviderResult<Value>;
}

/// Reqwest-backed [`CatalogProvider`] talking to a ytmusicapi-compatible
/// HTTP service. Safe for concurrent use; holds no per-request state.
#[derive(Debug, Clone)]
pub struct YtMusicClient {
    client: Client,
    base_url: String,
}

impl YtMusicClient {
    pub fn new(base_url: impl Into<String>) -> ProviderResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> ProviderResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogProvider for YtMusicClient {
    async fn search(
        &self,
        query: &str,
        filter: &str,
        limit: usize,
    ) -> ProviderResult<Vec<Value>> {
        let limit = limit.to_string();
        let payload = self
            .get_json(
                "/search",
                &[("query", query), ("filter", filter), ("limit", &limit)],
            )
            .await?;
        match payload {
            Value::Array(items) => Ok(items),
            other => Err(ProviderError::Malformed(format!(
                "search expected an array of results, got {other}"
            ))),
        }
    }

    async fn get_song(&self, video_id: &str) -> ProviderResult<Value> {
        self.get_json(&format!("/songs/{video_id}"), &[]).await
    }

    async fn get_artist(&self, channel_id: &str) -> ProviderResult<Value> {
        self.get_json(&format!("/artists/{channel_id}"), &[]).await
    }

    async fn get_playlist(&self, playlist_id: &str) -> ProviderResult<Value> {
        self.get_json(&format!("/playlists/{playlist_id}"), &[])
            .await
    }

    async fn get_charts(&self, country: &str) -> ProviderResult<Value> {
        self.get_json("/charts", &[("country", country)]).await
    }
}
