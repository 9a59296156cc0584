use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use news_core::{NewsApiResponse, Result, UpstreamResponse};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::{redact, NewsClient};

/// `NewsClient` backed by a shared `reqwest::Client` with transport defaults.
#[derive(Clone)]
pub struct HttpNewsClient {
    client: Arc<Client>,
}

impl HttpNewsClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for HttpNewsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HttpNewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpNewsClient")
            .field("client", &"<reqwest::Client>")
            .finish()
    }
}

#[async_trait]
impl NewsClient for HttpNewsClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn get(&self, url: &str) -> Result<UpstreamResponse> {
        debug!("GET {}", redact(url));
        // reqwest errors embed the request URL, which carries the API key.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();

        if status != StatusCode::OK {
            warn!("Upstream answered {} for {}", status, redact(url));
            return Ok(UpstreamResponse::failed(status));
        }

        let bytes = response.bytes().await.map_err(reqwest::Error::without_url)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!("Upstream answered {} with an empty body", status);
            return Ok(UpstreamResponse { status, body: None });
        }

        let body: NewsApiResponse = serde_json::from_slice(&bytes)?;
        debug!(
            "Upstream status {:?} with {} articles",
            body.status,
            body.articles.len()
        );
        Ok(UpstreamResponse {
            status,
            body: Some(body),
        })
    }
}
