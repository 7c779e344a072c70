use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;

/// Per-attempt request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// What the probe needs to know about one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: u16,
    pub body: String,
}

impl ResponseSummary {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Network seam used by the probe. An `Err` is a transport failure.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> anyhow::Result<ResponseSummary>;
}

/// reqwest-backed fetcher sharing one pooled client across all workers.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    headers: HeaderMap,
}

impl HttpFetcher {
    pub fn new(client: Client, headers: HeaderMap) -> Self {
        Self { client, headers }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> anyhow::Result<ResponseSummary> {
        let resp = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        let status = resp.status().as_u16();
        // A body cut short is a broken response, not a match
        let body = resp
            .text()
            .await
            .with_context(|| format!("failed to read response body from {}", url))?;
        Ok(ResponseSummary { status, body })
    }
}
