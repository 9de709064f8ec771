use dioxus::prelude::*;
use sitesmith_engine::enrichment::{
    EnrichmentError, EnrichmentState, fetch_joke_text, fetch_quote_text,
};
use std::future::Future;
use sitesmith_engine::{BlockType, Props, editor};

use super::FormEditor;
use crate::ui::context::Enrichment;

/// Quote form plus buttons that fill the text from a quote or joke service.
///
/// The services come from an [`Enrichment`] context; without one the fetch buttons
/// stay disabled.
#[component]
pub fn QuoteEditor(value: Props, on_change: Callback<Props>) -> Element {
    let enrichment = try_use_context::<Enrichment>();
    let mut state = use_signal(EnrichmentState::new);

    let loading = state.read().is_loading();
    let error = state.read().error().map(str::to_string);
    let can_fetch = enrichment.is_some() && !loading;

    let fetch_quote = {
        let enrichment = enrichment.clone();
        let value = value.clone();
        move |_| {
            let Some(enrichment) = enrichment.clone() else {
                return;
            };
            start_fetch(state, value.clone(), on_change, async move {
                fetch_quote_text(enrichment.quotes.as_ref()).await
            });
        }
    };

    let fetch_joke = {
        let value = value.clone();
        move |_| {
            let Some(enrichment) = enrichment.clone() else {
                return;
            };
            start_fetch(state, value.clone(), on_change, async move {
                fetch_joke_text(
                    enrichment.jokes.as_ref(),
                    &enrichment.joke_category,
                    enrichment.safe_mode,
                )
                .await
            });
        }
    };

    let clear = {
        let value = value.clone();
        move |_| on_change.call(editor::clear_text(&value))
    };

    rsx! {
        div {
            class: "space-y-2",
            FormEditor { kind: BlockType::Quote, value, on_change }
            div {
                class: "flex items-center gap-2",
                button {
                    r#type: "button",
                    class: "text-xs px-2 py-1 rounded border hover:bg-gray-50 disabled:opacity-50",
                    disabled: !can_fetch,
                    onclick: fetch_quote,
                    if loading { "Loading..." } else { "Fetch quote" }
                }
                button {
                    r#type: "button",
                    class: "text-xs px-2 py-1 rounded border hover:bg-gray-50 disabled:opacity-50",
                    disabled: !can_fetch,
                    onclick: fetch_joke,
                    "Fetch joke"
                }
                button {
                    r#type: "button",
                    class: "text-xs px-2 py-1 rounded border hover:bg-gray-50",
                    onclick: clear,
                    "Clear"
                }
            }
            if let Some(message) = error {
                div {
                    class: "flex items-center justify-between text-xs text-red-700",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: "underline",
                        onclick: move |_| state.write().reset(),
                        "Dismiss"
                    }
                }
            }
        }
    }
}

/// Run one enrichment fetch. Only the newest fetch may emit; its text replaces
/// `text` in `value` and every other key is kept.
fn start_fetch<F>(
    mut state: Signal<EnrichmentState>,
    value: Props,
    on_change: Callback<Props>,
    fetch: F,
) where
    F: Future<Output = Result<String, EnrichmentError>> + 'static,
{
    let token = state.write().begin();
    spawn(async move {
        let result = fetch.await;
        let next = state.write().finish(token, result, &value);
        if let Some(next) = next {
            on_change.call(next);
        }
    });
}
