//! Top-headlines response model (NewsAPI `v2/top-headlines`).

use crate::error::{KitError, Result};
use serde::Deserialize;
use url::Url;

const ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";
const FALLBACK_ERROR: &str = "Failed to fetch news.";

/// Number of articles requested per call.
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Source,
}

impl Article {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("No title")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// `title (source)`, or just the title when the source is unnamed.
    pub fn headline(&self) -> String {
        match self.source.name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(source) => format!("{} ({})", self.title(), source),
            None => self.title().to_string(),
        }
    }
}

/// A top-headlines response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl NewsResponse {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fail with the service's message unless `status` is `ok`.
    pub fn into_success(self) -> Result<Self> {
        if self.status.as_deref() == Some("ok") {
            return Ok(self);
        }
        Err(KitError::Service {
            service: "News".to_string(),
            message: self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
        })
    }

    /// One headline per line, or a notice naming the country when there are none.
    pub fn headlines(&self, country: &str) -> Vec<String> {
        if self.articles.is_empty() {
            return vec![format!("No news found for '{}'.", country.trim().to_uppercase())];
        }
        self.articles.iter().map(Article::headline).collect()
    }

    /// Headlines with each article's link indented beneath it.
    pub fn digest(&self, country: &str) -> Vec<String> {
        if self.articles.is_empty() {
            return self.headlines(country);
        }
        let mut lines = Vec::with_capacity(self.articles.len() * 2);
        for article in &self.articles {
            lines.push(article.headline());
            let url = article.url().trim();
            if !url.is_empty() {
                lines.push(format!("    {}", url));
            }
        }
        lines
    }
}

/// Request URL for the top headlines of a two-letter country code.
pub fn request_url(country: &str, api_key: &str) -> Result<String> {
    let country = country.trim().to_lowercase();
    if country.is_empty() {
        return Err(KitError::Invalid("country code is required".to_string()));
    }
    let page_size = PAGE_SIZE.to_string();
    let url = Url::parse_with_params(
        ENDPOINT,
        &[
            ("country", country.as_str()),
            ("pageSize", page_size.as_str()),
            ("apiKey", api_key),
        ],
    )?;
    Ok(url.into())
}
