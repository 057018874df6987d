use crate::TipResult;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A raw response from the tips endpoint.
///
/// The status is kept as a plain `u16` so the sentinel status `0` (a fetch
/// that never went through a network layer, e.g. a local file) stays
/// representable; the session treats both `200` and `0` as success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Where the raw tab-separated tips document comes from.
#[async_trait::async_trait]
pub trait TipSource: Send + Sync {
    async fn fetch(&self, url: &str) -> TipResult<TipsResponse>;
}

/// `reqwest`-backed source performing a plain GET with a cache-busting
/// query parameter.
#[derive(Debug, Clone, Default)]
pub struct HttpTipSource {
    client: reqwest::Client,
}

impl HttpTipSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl TipSource for HttpTipSource {
    async fn fetch(&self, url: &str) -> TipResult<TipsResponse> {
        let response = self.client.get(cache_busted(url)).send().await?;
        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string();
        let body = response.text().await?;
        Ok(TipsResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// Append `foo=<unix timestamp>` so intermediaries never serve a stale
/// tips file.
fn cache_busted(url: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}foo={timestamp}")
}
