use async_trait::async_trait;
use news_core::{Article, ArticleStore, NewArticle, Pagination, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::StorageBackend;

#[derive(Default)]
struct MemoryState {
    articles: Vec<Article>,
    next_id: i64,
}

/// Process-local store. Ids start at 1 and increase by one per insert.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for InMemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get_error_message() -> &'static str {
        "Memory storage should be available"
    }
}

#[async_trait]
impl ArticleStore for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> Result<Article> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let stored = article.with_id(state.next_id);
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<Article>> {
        let state = self.state.read().await;
        let mut articles = state.articles.clone();
        articles.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(articles
            .into_iter()
            .skip(offset)
            .take(page.size() as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().await.articles.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn article(title: &str, hours: i64) -> NewArticle {
        NewArticle {
            author: "Test Author".to_string(),
            title: title.to_string(),
            description: "Test content".to_string(),
            url: "http://test.com".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap() + Duration::hours(hours),
            source: Some("test".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let store = InMemoryStore::new();
        let first = store.insert(article("first", 0)).await.unwrap();
        let second = store.insert(article("second", 1)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.title, "second");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_page_newest_first() {
        let store = InMemoryStore::new();
        for (title, hours) in [("b", 5), ("a", 1), ("d", 9), ("c", 3), ("e", 7)] {
            store.insert(article(title, hours)).await.unwrap();
        }

        let page = store.find_page(Pagination::new(0, 2).unwrap()).await.unwrap();
        let titles: Vec<_> = page.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["d", "e"]);

        let page = store.find_page(Pagination::new(2, 2).unwrap()).await.unwrap();
        let titles: Vec<_> = page.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a"]);

        let page = store.find_page(Pagination::new(3, 2).unwrap()).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_equal_timestamps_latest_insert_first() {
        let store = InMemoryStore::new();
        store.insert(article("older insert", 0)).await.unwrap();
        store.insert(article("newer insert", 0)).await.unwrap();

        let page = store.find_page(Pagination::default()).await.unwrap();
        assert_eq!(page[0].title, "newer insert");
    }
}
