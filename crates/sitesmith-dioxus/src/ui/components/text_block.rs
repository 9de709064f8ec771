use dioxus::prelude::*;
use sitesmith_engine::view::TextView;

#[component]
pub fn TextBlock(view: TextView) -> Element {
    rsx! {
        p { class: "{view.class}", "{view.text}" }
    }
}

#[component]
pub fn QuoteBlock(view: TextView) -> Element {
    rsx! {
        blockquote { class: "{view.class}", "{view.text}" }
    }
}
