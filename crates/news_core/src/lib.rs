pub mod config;
pub mod error;
pub mod normalize;
pub mod storage;
pub mod types;
pub mod upstream;

pub use config::NewsApiConfig;
pub use error::{Error, Result};
pub use normalize::normalize_article;
pub use storage::ArticleStore;
pub use types::{Article, NewArticle, Pagination};
pub use upstream::{NewsApiResponse, UpstreamArticle, UpstreamResponse, UpstreamSource};
