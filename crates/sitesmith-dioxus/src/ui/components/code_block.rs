use dioxus::prelude::*;
use sitesmith_engine::view::CodeView;

#[component]
pub fn CodeBlock(view: CodeView) -> Element {
    rsx! {
        pre {
            class: "{view.class}",
            code { "{view.code}" }
        }
    }
}
