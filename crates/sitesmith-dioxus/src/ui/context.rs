use std::sync::Arc;

use sitesmith_engine::enrichment::{JokeSource, QuoteSource};

/// Third-party text sources offered by the quote editor.
#[derive(Clone)]
pub struct Enrichment {
    pub quotes: Arc<dyn QuoteSource>,
    pub jokes: Arc<dyn JokeSource>,
    pub joke_category: String,
    pub safe_mode: bool,
}
