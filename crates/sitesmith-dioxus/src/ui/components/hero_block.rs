use dioxus::prelude::*;
use sitesmith_engine::view::HeroView;

#[component]
pub fn HeroBlock(view: HeroView) -> Element {
    let align = view.align_class();

    rsx! {
        div {
            class: "{view.class}",
            div {
                class: align,
                div { class: "text-2xl font-bold", "{view.title}" }
                if let Some(ref subtitle) = view.subtitle {
                    div { class: "text-sm text-gray-600 mt-1", "{subtitle}" }
                }
            }
        }
    }
}
