//! Loading the booking table from a local path or over HTTP.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Transport seam for HTTP fetches, so tests can stub the network.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

/// Plain [`reqwest`]-backed client.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}

/// Fetches raw bytes from `url` with the given client.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    Ok(resp.bytes().await?.to_vec())
}

/// Loads booking data from a local file path or fetches it over HTTP.
#[tracing::instrument(fields(source = %source))]
pub async fn load_source(source: &str) -> Result<Vec<u8>> {
    let bytes = if source.starts_with("http") {
        let client = BasicClient::new();
        fetch_bytes(&client, source).await?
    } else {
        std::fs::read(source)?
    };

    debug!(bytes = bytes.len(), "Source loaded");
    Ok(bytes)
}
