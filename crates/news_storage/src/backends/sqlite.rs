use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use news_core::{Article, ArticleStore, Error, NewArticle, Pagination, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqliteRow};
use sqlx::Row;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::StorageBackend;

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS news_articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        author VARCHAR(500) NOT NULL,
        title TEXT NOT NULL,
        description VARCHAR(10000) NOT NULL,
        url VARCHAR(1000) NOT NULL,
        published_at TEXT NOT NULL,
        source TEXT
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_news_articles_published_at
        ON news_articles (published_at DESC)
    "#,
];

pub struct SqliteStore {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl StorageBackend for SqliteStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn get_error_message() -> &'static str {
        "SQLite database path should be writable"
    }
}

impl SqliteStore {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Database(format!("Failed to create database directory: {}", e))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| Error::Database(format!("Failed to connect to database: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| Error::Database(format!("Failed to run migration {}: {}", i, e)))?;
        }

        Ok(Self {
            pool: Arc::new(pool),
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn get_db_path(&self) -> &Path {
        &self.db_path
    }
}

// Fixed-width UTC text keeps lexicographic order equal to chronological order.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn decode_row(row: &SqliteRow) -> Result<Article> {
    let published_at: String = row.get("published_at");
    let published_at = DateTime::parse_from_rfc3339(&published_at)
        .map_err(|e| Error::Database(format!("Failed to parse date: {}", e)))?
        .with_timezone(&Utc);

    Ok(Article {
        id: row.get("id"),
        author: row.get("author"),
        title: row.get("title"),
        description: row.get("description"),
        url: row.get("url"),
        published_at,
        source: row.get::<Option<String>, _>("source"),
    })
}

#[async_trait]
impl ArticleStore for SqliteStore {
    async fn insert(&self, article: NewArticle) -> Result<Article> {
        let result = sqlx::query(
            r#"
            INSERT INTO news_articles
            (author, title, description, url, published_at, source)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&article.author)
        .bind(&article.title)
        .bind(&article.description)
        .bind(&article.url)
        .bind(encode_timestamp(&article.published_at))
        .bind(article.source.as_deref())
        .execute(&*self.pool)
        .await
        .map_err(|e| Error::Database(format!("Failed to store article: {}", e)))?;

        let id = result.last_insert_rowid();
        debug!("Stored article {} as id {}", article.title, id);
        Ok(article.with_id(id))
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<Article>> {
        let offset = i64::try_from(page.offset())
            .map_err(|_| Error::InvalidArgument("page offset is too large".to_string()))?;

        let rows = sqlx::query(
            r#"
            SELECT id, author, title, description, url, published_at, source
            FROM news_articles
            ORDER BY published_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(page.size()))
        .bind(offset)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| Error::Database(format!("Failed to load articles: {}", e)))?;

        rows.iter().map(decode_row).collect()
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news_articles")
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| Error::Database(format!("Failed to count articles: {}", e)))?;
        Ok(count as u64)
    }
}
