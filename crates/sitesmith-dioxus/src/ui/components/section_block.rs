use dioxus::prelude::*;
use sitesmith_engine::view::SectionView;

#[component]
pub fn SectionBlock(view: SectionView) -> Element {
    rsx! {
        div {
            class: "{view.class}",
            div { class: "text-xs text-gray-500", "SECTION" }
        }
    }
}
