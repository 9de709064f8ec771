use dioxus::prelude::*;
use sitesmith_engine::models::{EntryStatus, Page, Post};
use sitesmith_engine::template::resolve_layout_class;
use sitesmith_engine::{ContentDocument, Template};

use super::BlockRenderer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewKind {
    Page,
    Post { author_id: Option<i64> },
}

struct LayoutFallbacks {
    container: &'static str,
    header: &'static str,
    title: &'static str,
}

impl PreviewKind {
    fn noun(self) -> &'static str {
        match self {
            PreviewKind::Page => "page",
            PreviewKind::Post { .. } => "post",
        }
    }

    fn collection(self) -> &'static str {
        match self {
            PreviewKind::Page => "pages",
            PreviewKind::Post { .. } => "posts",
        }
    }

    fn fallbacks(self) -> LayoutFallbacks {
        match self {
            PreviewKind::Page => LayoutFallbacks {
                container: "max-w-5xl mx-auto px-4 py-10",
                header: "mb-8",
                title: "text-4xl font-bold text-gray-900 mb-4",
            },
            PreviewKind::Post { .. } => LayoutFallbacks {
                container: "max-w-3xl mx-auto px-4 py-10",
                header: "mb-6",
                title: "text-3xl font-bold text-gray-900 mb-2",
            },
        }
    }
}

/// What the preview needs from a page or post.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewEntry {
    pub kind: PreviewKind,
    pub title: String,
    pub slug: String,
    pub status: EntryStatus,
    pub content: ContentDocument,
}

impl From<&Page> for PreviewEntry {
    fn from(page: &Page) -> Self {
        Self {
            kind: PreviewKind::Page,
            title: page.title.clone(),
            slug: page.slug.clone(),
            status: page.status,
            content: page.content.clone(),
        }
    }
}

impl From<&Post> for PreviewEntry {
    fn from(post: &Post) -> Self {
        Self {
            kind: PreviewKind::Post {
                author_id: post.author_id,
            },
            title: post.title.clone(),
            slug: post.slug.clone(),
            status: post.status,
            content: post.content.clone(),
        }
    }
}

/// Read-only rendering of a page or post inside its template's layout.
///
/// Drafts are only shown to admins, with a badge.
#[component]
pub fn ContentPreview(
    template: Option<Template>,
    site_name: String,
    entry: PreviewEntry,
    is_admin: bool,
) -> Element {
    let draft = entry.status != EntryStatus::Published;
    let noun = entry.kind.noun();

    if draft && !is_admin {
        return rsx! {
            div {
                class: "space-y-2",
                div { class: "text-lg font-semibold", "Not published" }
                div { class: "text-sm text-gray-500", "This {noun} is still in draft." }
            }
        };
    }

    let layout = entry.kind.fallbacks();
    let t = template.as_ref();
    let container = resolve_layout_class(t, "container", layout.container);
    let header = resolve_layout_class(t, "header", layout.header);
    let title = resolve_layout_class(t, "title", layout.title);
    let meta = resolve_layout_class(t, "meta", "text-sm text-gray-500 mb-6");
    let content = resolve_layout_class(t, "content", "prose max-w-none");
    let collection = entry.kind.collection();
    let author = match entry.kind {
        PreviewKind::Post { author_id } => {
            Some(author_id.map(|id| id.to_string()).unwrap_or_default())
        }
        PreviewKind::Page => None,
    };

    rsx! {
        div {
            class: "{container}",
            div {
                class: "{header}",
                div {
                    class: "text-xs text-gray-500",
                    span { class: "underline", "{site_name}" }
                    span { class: "mx-2", "/" }
                    span { class: "text-gray-700", "{collection}" }
                    span { class: "mx-2", "/" }
                    span { class: "text-gray-700", "{entry.slug}" }
                }
                h1 { class: "{title}", "{entry.title}" }
                if let Some(author) = author {
                    div {
                        class: "{meta}",
                        span { "Author ID: {author}" }
                        span { class: "mx-2", "•" }
                        span { "Status: {entry.status}" }
                    }
                }
                if draft {
                    div {
                        class: "inline-flex items-center text-xs rounded border px-2 py-1 bg-yellow-50 border-yellow-200 text-yellow-800",
                        "DRAFT (admin preview)"
                    }
                }
            }
            div {
                class: "{content}",
                if entry.content.is_empty() {
                    div { class: "text-sm text-gray-500", "No content yet." }
                } else {
                    div {
                        class: "space-y-4",
                        for block in entry.content.blocks.iter() {
                            BlockRenderer {
                                key: "{block.id}",
                                template: template.clone(),
                                block: block.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use sitesmith_engine::{
        Block, BlockId, BlockType, Canvas, CanvasCmd, Direction, SequentialIds, TemplateConfig,
    };

    fn landing_template() -> Template {
        let config: TemplateConfig = serde_json::from_value(json!({
            "blocks": {
                "allowed": ["heading", "text", "button"],
                "default": [
                    {"type": "heading", "props": {"text": "Welcome", "level": 1}},
                    {"type": "button", "props": {"text": "Start", "href": "/start"}}
                ]
            },
            "styles": {"heading": {"h1": "text-5xl"}, "text": "leading-7"},
            "layout": {"container": "max-w-xl", "title": ""}
        }))
        .unwrap();
        Template::new(3, "Landing", config)
    }

    fn entry(status: EntryStatus, content: ContentDocument) -> PreviewEntry {
        PreviewEntry {
            kind: PreviewKind::Page,
            title: "About us".to_string(),
            slug: "about".to_string(),
            status,
            content,
        }
    }

    fn render_preview(template: Option<Template>, entry: PreviewEntry, is_admin: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            ContentPreview,
            ContentPreviewProps {
                template,
                site_name: "Acme".to_string(),
                entry,
                is_admin,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    fn props(value: Value) -> sitesmith_engine::Props {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_builder_output_renders_like_direct_document() {
        let template = landing_template();
        let mut canvas = Canvas::new(ContentDocument::empty());
        let mut ids = SequentialIds::new("b");
        for kind in [BlockType::Heading, BlockType::Text, BlockType::Text, BlockType::Button] {
            canvas.apply(CanvasCmd::Add { kind }, Some(&template), &mut ids);
        }
        canvas.apply(
            CanvasCmd::UpdateProps {
                id: BlockId::new("b2"),
                props: props(json!({"text": "Hello there"})),
            },
            Some(&template),
            &mut ids,
        );
        canvas.apply(
            CanvasCmd::Remove {
                id: BlockId::new("b3"),
            },
            Some(&template),
            &mut ids,
        );
        canvas.apply(
            CanvasCmd::Move {
                id: BlockId::new("b4"),
                direction: Direction::Up,
            },
            Some(&template),
            &mut ids,
        );

        let direct = ContentDocument {
            version: 1,
            blocks: vec![
                Block::new("b1", BlockType::Heading, props(json!({"text": "Welcome", "level": 1}))),
                Block::new("b4", BlockType::Button, props(json!({"text": "Start", "href": "/start"}))),
                Block::new("b2", BlockType::Text, props(json!({"text": "Hello there"}))),
            ],
        };

        let built = render_preview(
            Some(template.clone()),
            entry(EntryStatus::Published, canvas.into_document()),
            false,
        );
        let expected = render_preview(Some(template), entry(EntryStatus::Published, direct), false);

        assert_eq!(built, expected);
        assert!(built.contains("text-5xl"));
        assert!(built.contains("leading-7"));
    }

    #[test]
    fn test_layout_fallbacks_and_overrides() {
        let html = render_preview(
            Some(landing_template()),
            entry(EntryStatus::Published, ContentDocument::empty()),
            false,
        );

        assert!(html.contains(r#"class="max-w-xl""#));
        assert!(html.contains(r#"class="mb-8""#));
        // An empty title override falls back
        assert!(html.contains("text-4xl font-bold text-gray-900 mb-4"));
        assert!(html.contains("prose max-w-none"));
        assert!(html.contains("No content yet."));
    }

    #[test]
    fn test_draft_hidden_from_visitors() {
        let html = render_preview(None, entry(EntryStatus::Draft, ContentDocument::empty()), false);

        assert!(html.contains("Not published"));
        assert!(html.contains("This page is still in draft."));
        assert!(!html.contains("About us"));
    }

    #[test]
    fn test_draft_badge_for_admins() {
        let html = render_preview(None, entry(EntryStatus::Draft, ContentDocument::empty()), true);

        assert!(html.contains("About us"));
        assert!(html.contains("DRAFT (admin preview)"));
    }

    #[test]
    fn test_post_meta_line() {
        let post = PreviewEntry {
            kind: PreviewKind::Post { author_id: Some(7) },
            ..entry(EntryStatus::Published, ContentDocument::empty())
        };
        let html = render_preview(None, post, false);

        assert!(html.contains("posts"));
        assert!(html.contains("Author ID: 7"));
        assert!(html.contains("Status: published"));
        assert!(html.contains("max-w-3xl mx-auto px-4 py-10"));
    }
}
