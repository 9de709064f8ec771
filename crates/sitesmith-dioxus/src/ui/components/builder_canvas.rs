use dioxus::prelude::*;
use sitesmith_engine::{Block, BlockId, Canvas, CanvasCmd, ContentDocument, Direction, RandomIds, Template};

use super::{BlockEditor, BlockPalette, BlockRenderer};

/// Three-column builder: palette, block list, editor for the selected block.
///
/// The document is owned by the caller. Every command runs against `value` and a
/// changed document is handed back through `on_change`; only the selection lives
/// here.
#[component]
pub fn BuilderCanvas(
    template: Option<Template>,
    value: ContentDocument,
    on_change: Callback<ContentDocument>,
) -> Element {
    let mut selection = use_signal(|| None::<BlockId>);

    let dispatch = use_callback({
        let template = template.clone();
        let value = value.clone();
        move |cmd: CanvasCmd| {
            let mut canvas = Canvas::with_selection(value.clone(), selection.peek().clone());
            let patch = canvas.apply(cmd, template.as_ref(), &mut RandomIds);
            selection.set(patch.selection);
            if patch.changed {
                on_change.call(canvas.into_document());
            }
        }
    });

    let selected_id = selection.read().clone();
    let selected_block = selected_id.as_ref().and_then(|id| value.block(id)).cloned();

    rsx! {
        div {
            class: "grid grid-cols-1 lg:grid-cols-3 gap-4",

            div {
                class: "lg:col-span-1",
                div {
                    class: "rounded border p-3 space-y-3",
                    div { class: "text-sm font-medium", "Blocks" }
                    BlockPalette {
                        template: template.clone(),
                        on_add: move |kind| dispatch.call(CanvasCmd::Add { kind }),
                    }
                }
            }

            div {
                class: "lg:col-span-1",
                div {
                    class: "rounded border p-3 space-y-3",
                    div { class: "text-sm font-medium", "Canvas" }
                    if value.is_empty() {
                        div { class: "text-sm text-gray-500", "No blocks yet." }
                    } else {
                        div {
                            class: "space-y-2",
                            for block in value.blocks.iter() {
                                CanvasItem {
                                    key: "{block.id}",
                                    template: template.clone(),
                                    block: block.clone(),
                                    selected: selected_id.as_ref() == Some(&block.id),
                                    on_command: dispatch,
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "lg:col-span-1",
                div {
                    class: "rounded border p-3 space-y-3",
                    div { class: "text-sm font-medium", "Editor" }
                    if let Some(block) = selected_block {
                        SelectedEditor { block, on_command: dispatch }
                    } else {
                        div { class: "text-sm text-gray-500", "Select a block to edit." }
                    }
                }
            }
        }
    }
}

#[component]
fn CanvasItem(
    template: Option<Template>,
    block: Block,
    selected: bool,
    on_command: Callback<CanvasCmd>,
) -> Element {
    let border = if selected {
        "border-gray-900"
    } else {
        "border-gray-200"
    };
    let command = |make: fn(BlockId) -> CanvasCmd| {
        let id = block.id.clone();
        move |_: MouseEvent| on_command.call(make(id.clone()))
    };

    rsx! {
        div {
            class: "rounded border p-2 {border}",
            div {
                class: "flex items-center justify-between gap-2",
                button {
                    r#type: "button",
                    class: "text-left text-sm font-medium underline",
                    onclick: command(|id| CanvasCmd::Select { id }),
                    "{block.kind} • {block.id}"
                }
                div {
                    class: "flex items-center gap-2",
                    button {
                        r#type: "button",
                        class: "text-xs px-2 py-1 rounded border hover:bg-gray-50",
                        onclick: command(|id| CanvasCmd::Move { id, direction: Direction::Up }),
                        "↑"
                    }
                    button {
                        r#type: "button",
                        class: "text-xs px-2 py-1 rounded border hover:bg-gray-50",
                        onclick: command(|id| CanvasCmd::Move { id, direction: Direction::Down }),
                        "↓"
                    }
                    button {
                        r#type: "button",
                        class: "text-xs px-2 py-1 rounded border hover:bg-gray-50",
                        onclick: command(|id| CanvasCmd::Remove { id }),
                        "Remove"
                    }
                }
            }
            div {
                class: "mt-2 rounded bg-gray-50 p-2",
                if block.kind.is_known() {
                    BlockRenderer { template, block: block.clone() }
                } else {
                    div { class: "text-xs text-red-700", "Unknown block type: {block.kind}" }
                }
            }
        }
    }
}

#[component]
fn SelectedEditor(block: Block, on_command: Callback<CanvasCmd>) -> Element {
    let id = block.id.clone();

    rsx! {
        BlockEditor {
            key: "{block.id}",
            block,
            on_change: move |props| on_command.call(CanvasCmd::UpdateProps { id: id.clone(), props }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use serde_json::{Value, json};
    use sitesmith_engine::TemplateConfig;

    #[component]
    fn Harness(document: Value, config: Value) -> Element {
        let value: ContentDocument = serde_json::from_value(document).unwrap_or_default();
        let config: TemplateConfig = serde_json::from_value(config).unwrap_or_default();
        rsx! {
            BuilderCanvas {
                template: Some(Template::new(1, "Landing", config)),
                value,
                on_change: move |_| {},
            }
        }
    }

    fn render_canvas(document: Value, config: Value) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { document, config });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_empty_canvas() {
        let html = render_canvas(
            json!({"version": 1, "blocks": []}),
            json!({"blocks": {"allowed": ["hero", "text", "gallery"]}}),
        );

        assert!(html.contains("Blocks"));
        assert!(html.contains("No blocks yet."));
        assert!(html.contains("Select a block to edit."));
        assert!(html.contains("+ Hero"));
        assert!(html.contains("+ Text"));
        assert!(html.contains("+ gallery"));
    }

    #[test]
    fn test_blocks_listed_with_controls() {
        let html = render_canvas(
            json!({"version": 1, "blocks": [
                {"id": "a1", "type": "text", "props": {"text": "Hello"}},
                {"id": "b2", "type": "gallery", "props": {}}
            ]}),
            json!({}),
        );

        assert!(html.contains("text • a1"));
        assert!(html.contains("<p"));
        assert!(html.contains("Hello"));
        assert!(html.contains("gallery • b2"));
        assert!(html.contains("Unknown block type: gallery"));
        assert_eq!(html.matches("Remove").count(), 2);
        assert!(!html.contains("No blocks yet."));
    }
}
