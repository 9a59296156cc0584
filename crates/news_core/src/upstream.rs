//! Wire shapes of the upstream news API.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

pub use reqwest::StatusCode;

/// Top-level JSON envelope: `{status, articles: [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiResponse {
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub articles: Vec<UpstreamArticle>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamArticle {
    #[serde(default)]
    pub source: Option<UpstreamSource>,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// What one upstream call produced: the status and, when the call
/// succeeded with a non-empty body, the parsed envelope.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Option<NewsApiResponse>,
}

impl UpstreamResponse {
    pub fn ok(body: NewsApiResponse) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body),
        }
    }

    pub fn failed(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    /// The envelope, if and only if the status is 200 and a body was present.
    pub fn into_articles(self) -> Option<Vec<UpstreamArticle>> {
        if self.status != StatusCode::OK {
            return None;
        }
        self.body.map(|body| body.articles)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<UpstreamArticle>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<UpstreamArticle>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts RFC 3339 timestamps and zone-less `YYYY-MM-DDTHH:MM:SS[.f]`,
/// the latter read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp {:?}: {}", raw, e))
}
