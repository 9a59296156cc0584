use std::sync::Arc;

use news_core::{Article, ArticleStore, NewsApiConfig, Pagination, Result};
use tracing::info;

use crate::client::{custom_path_url, redact, top_headlines_url, NewsClient};
use crate::pipeline::persist_response;

/// Fetch-and-store plus paginated reads over one upstream API and one store.
#[derive(Clone)]
pub struct NewsService {
    config: NewsApiConfig,
    client: Arc<dyn NewsClient>,
    store: Arc<dyn ArticleStore>,
}

impl NewsService {
    pub fn new(
        config: NewsApiConfig,
        client: Arc<dyn NewsClient>,
        store: Arc<dyn ArticleStore>,
    ) -> Self {
        Self {
            config,
            client,
            store,
        }
    }

    pub fn store(&self) -> &Arc<dyn ArticleStore> {
        &self.store
    }

    /// Fetch US top headlines and store them.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>> {
        self.config.validate()?;
        let url = top_headlines_url(&self.config)?;
        self.fetch_and_store(&url).await
    }

    /// Fetch from a caller-supplied path relative to the base URL and store
    /// the results.
    pub async fn fetch_articles_with_path(&self, path: &str) -> Result<Vec<Article>> {
        self.config.validate()?;
        let url = custom_path_url(&self.config, path)?;
        self.fetch_and_store(&url).await
    }

    pub async fn find_paginated(&self, page: i64, size: i64) -> Result<Vec<Article>> {
        let page = Pagination::new(page, size)?;
        self.store.find_page(page).await
    }

    async fn fetch_and_store(&self, url: &str) -> Result<Vec<Article>> {
        info!("🦗 Fetching articles from {} via {}", redact(url), self.client.name());
        let response = self.client.get(url).await?;
        persist_response(response, self.store.as_ref()).await
    }
}
