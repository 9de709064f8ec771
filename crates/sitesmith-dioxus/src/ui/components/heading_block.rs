use dioxus::prelude::*;
use sitesmith_engine::view::HeadingView;

#[component]
pub fn HeadingBlock(view: HeadingView) -> Element {
    let class_name = view.class;
    let text = view.text;

    // Level is already clamped to 1..=3
    match view.level {
        1 => rsx! { h1 { class: "{class_name}", "{text}" } },
        2 => rsx! { h2 { class: "{class_name}", "{text}" } },
        _ => rsx! { h3 { class: "{class_name}", "{text}" } },
    }
}
