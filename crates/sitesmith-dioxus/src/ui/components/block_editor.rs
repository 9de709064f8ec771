use dioxus::prelude::*;
use sitesmith_engine::{Block, BlockType, Props};

use super::{FormEditor, QuoteEditor};

/// Edit side of the registry: picks the editor for the block's type.
#[component]
pub fn BlockEditor(block: Block, on_change: Callback<Props>) -> Element {
    match block.kind {
        BlockType::Quote => rsx! {
            QuoteEditor { value: block.props, on_change }
        },
        BlockType::Unknown(_) => rsx! {},
        kind => rsx! {
            FormEditor { kind, value: block.props, on_change }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use serde_json::{Value, json};

    #[component]
    fn Harness(kind: String, props: Value) -> Element {
        let props: Props = serde_json::from_value(props).unwrap_or_default();
        let block = Block::new("b1", BlockType::from(kind.as_str()), props);
        rsx! {
            BlockEditor { block, on_change: move |_| {} }
        }
    }

    fn render_editor(kind: &str, props: Value) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                kind: kind.to_string(),
                props,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_heading_editor_fields() {
        let html = render_editor("heading", json!({"text": "Intro", "level": 3}));

        assert!(html.contains("Level"));
        assert!(html.contains(">H3</option>"));
        assert!(html.contains(r#"value="Intro""#));
    }

    #[test]
    fn test_quote_gets_enrichment_actions() {
        let html = render_editor("quote", json!({"text": "Be kind"}));
        assert!(html.contains("Fetch quote"));
    }

    #[test]
    fn test_section_editor_fields() {
        let html = render_editor("section", json!({}));

        for label in ["Padding", "Background", "Border", "Rounded"] {
            assert!(html.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_unknown_type_has_no_editor() {
        assert_eq!(render_editor("gallery", json!({"x": 1})), "");
    }
}
