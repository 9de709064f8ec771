//! HTTP quote and joke sources.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use sitesmith_engine::enrichment::{EnrichmentError, Joke, JokeSource, Quote, QuoteSource};

/// ZenQuotes random quote. The endpoint answers with a one-element array of
/// `{q, a}` records.
#[derive(Debug, Clone)]
pub struct ZenQuotes {
    http: reqwest::Client,
    url: String,
}

impl ZenQuotes {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ZenQuote {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    a: Option<String>,
}

#[async_trait]
impl QuoteSource for ZenQuotes {
    async fn fetch_quote(&self) -> Result<Quote, EnrichmentError> {
        let body = get_json(&self.http, self.url.as_str(), "ZenQuotes").await?;

        let first = match body {
            serde_json::Value::Array(mut items) if !items.is_empty() => Some(items.swap_remove(0)),
            _ => None,
        };
        let item: Option<ZenQuote> = first
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| EnrichmentError::Decode(e.to_string()))?;

        Ok(Quote {
            text: item.as_ref().and_then(|i| i.q.clone()).unwrap_or_default(),
            author: item.and_then(|i| i.a).filter(|a| !a.is_empty()),
        })
    }
}

/// JokeAPI v2. The category is a path segment; safe mode is a bare query flag.
#[derive(Debug, Clone)]
pub struct JokeApi {
    http: reqwest::Client,
    base_url: String,
}

impl JokeApi {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, category: &str, safe_mode: bool) -> Result<Url, EnrichmentError> {
        let mut url = Url::parse(self.base_url.trim_end_matches('/'))
            .map_err(|e| EnrichmentError::Transport(format!("Invalid JokeAPI url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| EnrichmentError::Transport("Invalid JokeAPI url".to_string()))?
            .push(category);
        if safe_mode {
            url.set_query(Some("safe-mode"));
        }
        Ok(url)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JokeBody {
    error: bool,
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    joke: Option<String>,
    setup: Option<String>,
    delivery: Option<String>,
    category: Option<String>,
}

#[async_trait]
impl JokeSource for JokeApi {
    async fn fetch_joke(&self, category: &str, safe_mode: bool) -> Result<Joke, EnrichmentError> {
        let url = self.url(category, safe_mode)?;
        let body = get_json(&self.http, url.as_str(), "JokeAPI").await?;
        let body: JokeBody =
            serde_json::from_value(body).map_err(|e| EnrichmentError::Decode(e.to_string()))?;

        if body.error {
            return Err(EnrichmentError::Rejected(
                body.message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "JokeAPI returned an error".to_string()),
            ));
        }

        let joke = match body.kind.as_deref() {
            Some("single") => Joke::single(body.joke.as_deref().unwrap_or(""), body.category),
            Some("twopart") => Joke::two_part(
                body.setup.as_deref().unwrap_or(""),
                body.delivery.as_deref().unwrap_or(""),
                body.category,
            ),
            _ => Joke::single("", body.category),
        };
        Ok(joke)
    }
}

async fn get_json(
    http: &reqwest::Client,
    url: &str,
    service: &'static str,
) -> Result<serde_json::Value, EnrichmentError> {
    log::debug!("GET {url}");
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| EnrichmentError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(EnrichmentError::Status {
            service,
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    response
        .json()
        .await
        .map_err(|e| EnrichmentError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joke_url_encodes_category_and_flag() {
        let api = JokeApi::new(reqwest::Client::new(), "https://v2.jokeapi.dev/joke/");

        let url = api.url("Programming,Pun", true).unwrap();
        assert_eq!(
            url.as_str(),
            "https://v2.jokeapi.dev/joke/Programming,Pun?safe-mode"
        );

        let url = api.url("Any", false).unwrap();
        assert_eq!(url.as_str(), "https://v2.jokeapi.dev/joke/Any");
    }
}
