use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use news_core::{NewsApiResponse, Result, UpstreamResponse};
use reqwest::StatusCode;

use super::NewsClient;

/// Answers every request with the same canned response and remembers the
/// URLs it was asked for. Used in place of the network in tests and demos.
#[derive(Clone)]
pub struct StaticNewsClient {
    response: UpstreamResponse,
    requests: Arc<Mutex<Vec<String>>>,
}

impl fmt::Debug for StaticNewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticNewsClient")
            .field("status", &self.response.status)
            .finish()
    }
}

impl StaticNewsClient {
    pub fn new(response: UpstreamResponse) -> Self {
        Self {
            response,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ok(body: NewsApiResponse) -> Self {
        Self::new(UpstreamResponse::ok(body))
    }

    pub fn failing(status: StatusCode) -> Self {
        Self::new(UpstreamResponse::failed(status))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl NewsClient for StaticNewsClient {
    fn name(&self) -> &str {
        "static"
    }

    async fn get(&self, url: &str) -> Result<UpstreamResponse> {
        match self.requests.lock() {
            Ok(mut urls) => urls.push(url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(url.to_string()),
        }
        Ok(self.response.clone())
    }
}
