use async_trait::async_trait;
use news_core::{Error, NewsApiConfig, Result, UpstreamResponse};
use tracing::warn;
use url::Url;

pub mod dummy;
pub mod http;

pub use dummy::StaticNewsClient;
pub use http::HttpNewsClient;

pub const TOP_HEADLINES_PATH: &str = "top-headlines?country=us";

#[async_trait]
pub trait NewsClient: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Issue one GET against a fully qualified URL
    async fn get(&self, url: &str) -> Result<UpstreamResponse>;
}

/// `base + "top-headlines?country=us&apiKey=" + key`
pub fn top_headlines_url(config: &NewsApiConfig) -> Result<String> {
    checked(format!(
        "{}{}&apiKey={}",
        config.base_url, TOP_HEADLINES_PATH, config.api_key
    ))
}

/// `base + path + "&apiKey=" + key`. The path is expected to carry its own
/// `?query`; the `&` is appended either way.
pub fn custom_path_url(config: &NewsApiConfig, path: &str) -> Result<String> {
    if path.trim().is_empty() {
        return Err(Error::InvalidArgument("custom path must not be empty".to_string()));
    }
    if !path.contains('?') {
        warn!(path, "⚠️ Custom path has no query string, the API key will not be sent as a query parameter");
    }
    checked(format!("{}{}&apiKey={}", config.base_url, path, config.api_key))
}

fn checked(url: String) -> Result<String> {
    Url::parse(&url).map_err(|e| Error::InvalidUrl(format!("{}: {}", redact(&url), e)))?;
    Ok(url)
}

/// Hide the API key when a URL ends up in logs or error messages.
pub fn redact(url: &str) -> String {
    match url.find("apiKey=") {
        Some(pos) => format!("{}apiKey=<redacted>", &url[..pos]),
        None => url.to_string(),
    }
}
