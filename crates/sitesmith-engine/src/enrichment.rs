//! Quote and joke enrichment for the quote block editor.
//!
//! Sources are traits so the desktop app can plug in HTTP implementations while
//! tests use canned ones. [`EnrichmentState`] is the editor-side controller: it
//! tracks the loading flag and the last error, and turns a fetch result into the
//! replacement props for the block.

use async_trait::async_trait;
use serde_json::Value;

use crate::content::Props;
use crate::content::props::with_field;
use crate::request::{RequestToken, RequestTracker};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub text: String,
    pub category: Option<String>,
}

impl Joke {
    pub fn single(joke: &str, category: Option<String>) -> Self {
        Self {
            text: joke.to_string(),
            category,
        }
    }

    /// Setup and delivery separated by a blank line.
    pub fn two_part(setup: &str, delivery: &str, category: Option<String>) -> Self {
        Self {
            text: format!("{setup}\n\n{delivery}").trim().to_string(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichmentError {
    #[error("{service} error: {status} {reason}")]
    Status {
        service: &'static str,
        status: u16,
        reason: String,
    },
    /// The service answered but reported a failure of its own.
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self) -> Result<Quote, EnrichmentError>;
}

#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch_joke(&self, category: &str, safe_mode: bool) -> Result<Joke, EnrichmentError>;
}

/// `"{quote}\n— {author}"`, or just the quote when there is no author.
pub fn quote_text(quote: &Quote) -> String {
    match quote.author.as_deref().filter(|a| !a.is_empty()) {
        Some(author) => format!("{}\n— {author}", quote.text),
        None => quote.text.clone(),
    }
}

pub async fn fetch_quote_text(source: &dyn QuoteSource) -> Result<String, EnrichmentError> {
    let quote = source.fetch_quote().await?;
    Ok(quote_text(&quote))
}

pub async fn fetch_joke_text(
    source: &dyn JokeSource,
    category: &str,
    safe_mode: bool,
) -> Result<String, EnrichmentError> {
    let joke = source.fetch_joke(category, safe_mode).await?;
    Ok(joke.text)
}

/// Loading/error state of one quote editor.
#[derive(Debug, Default)]
pub struct EnrichmentState {
    loading: bool,
    error: Option<String>,
    tracker: RequestTracker,
}

impl EnrichmentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a fetch. Any fetch still in flight becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.loading = true;
        self.error = None;
        self.tracker.begin()
    }

    /// Settle a fetch started with `token`.
    ///
    /// Returns the replacement props (`value` with `text` set) on success. Stale
    /// tokens and failures return `None`; a failure keeps its message for display.
    pub fn finish(
        &mut self,
        token: RequestToken,
        result: Result<String, EnrichmentError>,
        value: &Props,
    ) -> Option<Props> {
        if !self.tracker.is_current(token) {
            log::debug!("discarding stale enrichment response #{}", token.sequence());
            return None;
        }
        self.loading = false;
        match result {
            Ok(text) => Some(with_field(value, "text", Value::String(text))),
            Err(err) => {
                log::warn!("enrichment fetch failed: {err}");
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Drop any in-flight fetch and forget the last error.
    pub fn reset(&mut self) {
        self.tracker.invalidate();
        self.loading = false;
        self.error = None;
    }
}
