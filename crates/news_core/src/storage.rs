use async_trait::async_trait;

use crate::types::{Article, NewArticle, Pagination};
use crate::Result;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Store one article and return it with its assigned id
    async fn insert(&self, article: NewArticle) -> Result<Article>;

    /// One page of articles, newest `published_at` first
    async fn find_page(&self, page: Pagination) -> Result<Vec<Article>>;

    /// Total number of stored articles
    async fn count(&self) -> Result<u64>;
}
