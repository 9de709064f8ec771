use dioxus::prelude::*;
use sitesmith_engine::view::{self, BlockView};
use sitesmith_engine::{Block, Template};

use super::{ButtonBlock, CodeBlock, HeadingBlock, HeroBlock, QuoteBlock, SectionBlock, TextBlock};

/// Draws one block through the registry. Unknown types draw nothing.
#[component]
pub fn BlockRenderer(template: Option<Template>, block: Block) -> Element {
    match view::view(template.as_ref(), &block) {
        Some(BlockView::Hero(view)) => rsx! { HeroBlock { view } },
        Some(BlockView::Heading(view)) => rsx! { HeadingBlock { view } },
        Some(BlockView::Text(view)) => rsx! { TextBlock { view } },
        Some(BlockView::Quote(view)) => rsx! { QuoteBlock { view } },
        Some(BlockView::Code(view)) => rsx! { CodeBlock { view } },
        Some(BlockView::Button(view)) => rsx! { ButtonBlock { view } },
        Some(BlockView::Section(view)) => rsx! { SectionBlock { view } },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use sitesmith_engine::{BlockType, TemplateConfig};

    fn block(kind: &str, props: Value) -> Block {
        Block::new(
            "b1",
            BlockType::from(kind),
            serde_json::from_value(props).unwrap(),
        )
    }

    fn template(config: Value) -> Template {
        let config: TemplateConfig = serde_json::from_value(config).unwrap();
        Template::new(1, "Test", config)
    }

    fn render_block(template: Option<Template>, block: Block) -> String {
        let mut dom =
            VirtualDom::new_with_props(BlockRenderer, BlockRendererProps { template, block });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let low = render_block(None, block("heading", json!({"text": "Low", "level": 0})));
        let high = render_block(None, block("heading", json!({"text": "High", "level": 4})));

        assert!(low.starts_with("<h1"), "{low}");
        assert!(high.starts_with("<h3"), "{high}");
    }

    #[test]
    fn test_heading_uses_level_class() {
        let template = template(json!({"styles": {"heading": {"h1": "text-5xl", "h2": "text-3xl"}}}));
        let html = render_block(
            Some(template),
            block("heading", json!({"text": "Title", "level": "1"})),
        );

        assert!(html.starts_with(r#"<h1 class="text-5xl""#), "{html}");
        assert!(html.contains("Title</h1>"));
    }

    #[test]
    fn test_clamped_heading_keeps_requested_level_class() {
        let template = template(json!({"styles": {"heading": {"h3": "text-xl"}}}));
        let html = render_block(
            Some(template),
            block("heading", json!({"text": "Deep", "level": 4})),
        );

        assert!(html.starts_with("<h3"), "{html}");
        assert!(!html.contains("text-xl"), "{html}");
    }

    #[test]
    fn test_unknown_block_renders_nothing() {
        let html = render_block(None, block("gallery", json!({"images": []})));
        assert_eq!(html, "");
    }

    #[test]
    fn test_hero_omits_empty_subtitle() {
        let html = render_block(
            None,
            block("hero", json!({"title": "Hi", "subtitle": "", "align": "center"})),
        );

        assert!(html.contains("text-center"));
        assert!(html.contains("Hi"));
        assert!(!html.contains("text-sm text-gray-600"));
    }

    #[test]
    fn test_button_falls_back_to_variant_style() {
        let html = render_block(
            None,
            block("button", json!({"text": "Go", "href": "/about", "variant": "secondary"})),
        );

        assert!(html.contains(r#"href="/about""#));
        assert!(html.contains("border rounded hover:bg-gray-50"));
        assert!(html.contains(">Go</a>"));
    }

    #[test]
    fn test_section_joins_classes() {
        let html = render_block(
            Some(template(json!({"styles": {"section": "my-4"}}))),
            block("section", json!({"padding": "py-6", "border": "border"})),
        );

        assert!(html.contains(r#"class="my-4 py-6 border""#), "{html}");
        assert!(html.contains("SECTION"));
    }

    #[test]
    fn test_code_is_verbatim() {
        let html = render_block(None, block("code", json!({"code": "let x = 1;"})));
        assert!(html.starts_with("<pre"), "{html}");
        assert!(html.contains("<code>let x = 1;</code>"));
    }
}
