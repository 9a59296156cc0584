pub mod client;
pub mod pipeline;
pub mod service;

pub use client::{HttpNewsClient, NewsClient, StaticNewsClient};
pub use pipeline::persist_response;
pub use service::NewsService;

pub mod prelude {
    pub use super::client::{NewsClient, HttpNewsClient};
    pub use super::service::NewsService;
    pub use news_core::{Article, Error, NewsApiConfig, Result};
}
