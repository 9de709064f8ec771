use dioxus::prelude::*;
use sitesmith_engine::view::ButtonView;

/// Rendered link of a button block. Blocks are only ever shown in the builder or a
/// preview, so following the link is suppressed.
#[component]
pub fn ButtonBlock(view: ButtonView) -> Element {
    rsx! {
        a {
            href: "{view.href}",
            class: "{view.class}",
            onclick: move |event: MouseEvent| event.prevent_default(),
            "{view.text}"
        }
    }
}
