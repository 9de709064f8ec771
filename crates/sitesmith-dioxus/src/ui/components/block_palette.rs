use dioxus::prelude::*;
use sitesmith_engine::canvas::palette;
use sitesmith_engine::{BlockType, Template};

#[component]
pub fn BlockPalette(template: Option<Template>, on_add: Callback<BlockType>) -> Element {
    let entries = palette(template.as_ref());

    rsx! {
        div {
            class: "grid grid-cols-2 gap-2",
            for entry in entries {
                button {
                    key: "{entry.kind}",
                    r#type: "button",
                    class: "px-3 py-2 rounded border hover:bg-gray-50 text-sm",
                    onclick: {
                        let kind = entry.kind.clone();
                        move |_| on_add.call(kind.clone())
                    },
                    "+ {entry.label}"
                }
            }
        }
    }
}
