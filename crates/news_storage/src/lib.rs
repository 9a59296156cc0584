use std::path::Path;
use std::sync::Arc;

use news_core::{ArticleStore, Error, Result};
use tracing::info;

pub mod backends;

pub use backends::*;

pub const DEFAULT_DATABASE_PATH: &str = "news.db";

pub trait StorageBackend: ArticleStore {
    fn name(&self) -> &'static str;
    fn get_error_message() -> &'static str
    where
        Self: Sized;
}

/// Build the store named by `kind` (`memory` or `sqlite`).
#[cfg_attr(not(feature = "sqlite"), allow(unused_variables))]
pub async fn create_storage(kind: &str, database_path: Option<&Path>) -> Result<Arc<dyn ArticleStore>> {
    match kind.to_lowercase().as_str() {
        "memory" => {
            let store = InMemoryStore::new();
            info!("💾 Using {} storage", store.name());
            Ok(Arc::new(store))
        }
        #[cfg(feature = "sqlite")]
        "sqlite" => {
            let path = database_path.unwrap_or_else(|| Path::new(DEFAULT_DATABASE_PATH));
            let store = SqliteStore::new_with_path(path).await.map_err(|e| {
                Error::Storage(format!("{} ({})", e, SqliteStore::get_error_message()))
            })?;
            info!("💾 Using {} storage at {}", store.name(), path.display());
            Ok(Arc::new(store))
        }
        other => Err(Error::Storage(format!("Unknown storage backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, StorageBackend};
}
