use std::fmt;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";

/// Where to reach the upstream news API and how to authenticate.
#[derive(Clone, PartialEq, Eq)]
pub struct NewsApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl NewsApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fails when either the base URL or the API key is empty.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Configuration(
                "The news API base URL has not been configured".to_string(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(Error::Configuration(
                "The news API key has not been configured".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_base_url_and_key() {
        assert!(NewsApiConfig::new(DEFAULT_BASE_URL, "key").validate().is_ok());

        let err = NewsApiConfig::new("", "key").validate().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("base URL"));

        let err = NewsApiConfig::new(DEFAULT_BASE_URL, "").validate().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("API key"));

        // Only an empty value counts as missing.
        assert!(NewsApiConfig::new(DEFAULT_BASE_URL, " ").validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = NewsApiConfig::new(DEFAULT_BASE_URL, "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
