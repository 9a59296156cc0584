use crate::types::NewArticle;
use crate::upstream::UpstreamArticle;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const NO_CONTENT: &str = "No content";
pub const UNKNOWN_URL: &str = "Unknown URL";
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Map an upstream record to the stored shape, filling absent fields with
/// their defaults. This is the only place defaults are applied.
pub fn normalize_article(article: &UpstreamArticle) -> NewArticle {
    let source = article
        .source
        .as_ref()
        .and_then(|source| source.name.clone())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

    NewArticle {
        author: article
            .author
            .clone()
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        title: article.title.clone(),
        description: article
            .description
            .clone()
            .unwrap_or_else(|| NO_CONTENT.to_string()),
        url: article.url.clone().unwrap_or_else(|| UNKNOWN_URL.to_string()),
        published_at: article.published_at,
        source: Some(source),
    }
}
