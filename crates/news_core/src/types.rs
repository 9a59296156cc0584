use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A persisted news article. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source: Option<String>,
}

/// A normalized article that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source: Option<String>,
}

impl NewArticle {
    pub fn with_id(self, id: i64) -> Article {
        Article {
            id,
            author: self.author,
            title: self.title,
            description: self.description,
            url: self.url,
            published_at: self.published_at,
            source: self.source,
        }
    }
}

/// A validated page request. Pages are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    size: u32,
}

impl Pagination {
    pub fn new(page: i64, size: i64) -> Result<Self> {
        if page < 0 {
            return Err(Error::InvalidArgument(format!(
                "page index must not be negative, got {}",
                page
            )));
        }
        if size < 1 {
            return Err(Error::InvalidArgument(format!(
                "page size must be at least 1, got {}",
                size
            )));
        }
        let page = u32::try_from(page)
            .map_err(|_| Error::InvalidArgument(format!("page index {} is too large", page)))?;
        let size = u32::try_from(size)
            .map_err(|_| Error::InvalidArgument(format!("page size {} is too large", size)))?;
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of records to skip before this page starts.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as u32,
            size: DEFAULT_PAGE_SIZE as u32,
        }
    }
}
