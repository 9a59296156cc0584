use news_core::{normalize_article, Article, ArticleStore, Result, UpstreamResponse};
use tracing::{debug, info};

/// Normalize and store every article of a successful upstream response, one
/// insert at a time in the order received. Anything but a 200 with a body
/// yields an empty result without touching the store.
pub async fn persist_response(
    response: UpstreamResponse,
    store: &dyn ArticleStore,
) -> Result<Vec<Article>> {
    let status = response.status;
    let Some(records) = response.into_articles() else {
        info!("📭 No articles to store (upstream status {})", status);
        return Ok(Vec::new());
    };

    let mut saved = Vec::with_capacity(records.len());
    for record in &records {
        let article = normalize_article(record);
        let stored = store.insert(article).await?;
        debug!("Stored article {}: {}", stored.id, stored.title);
        saved.push(stored);
    }

    info!("🗞️ Stored {} articles", saved.len());
    Ok(saved)
}
