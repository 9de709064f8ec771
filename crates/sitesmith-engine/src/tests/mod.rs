//! Cross-module scenarios: canvas edits followed by rendering and serialization.

use crate::canvas::{Canvas, CanvasCmd, Direction, SequentialIds};
use crate::content::{Block, BlockId, BlockType, ContentDocument, Props};
use crate::editor;
use crate::template::Template;
use crate::view::{self, BlockView};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::collections::HashSet;

fn landing_template() -> Template {
    serde_json::from_value(json!({
        "id": 1,
        "name": "Landing",
        "type": "page",
        "config": {
            "blocks": {
                "allowed": ["hero", "heading", "text", "quote", "code", "button", "section"],
                "default": [
                    {"type": "text", "props": {"text": "Default"}},
                    {"type": "hero", "props": {"title": "Welcome", "align": "center"}}
                ]
            },
            "styles": {
                "hero": "py-16",
                "heading": {"h1": "text-4xl", "h2": "text-2xl"},
                "text": "leading-7",
                "button": "btn"
            }
        }
    }))
    .unwrap()
}

fn props(value: Value) -> Props {
    serde_json::from_value(value).unwrap()
}

fn views(template: &Template, document: &ContentDocument) -> Vec<Option<BlockView>> {
    document
        .blocks
        .iter()
        .map(|block| view::view(Some(template), block))
        .collect()
}

#[test]
fn test_text_default_edit_remove_scenario() {
    let template = landing_template();
    let mut canvas = Canvas::new(ContentDocument::empty());
    let mut ids = SequentialIds::new("b");

    canvas.apply(
        CanvasCmd::Add { kind: BlockType::Text },
        Some(&template),
        &mut ids,
    );
    let block = canvas.selected_block().unwrap().clone();
    assert_eq!(block.props, props(json!({"text": "Default"})));

    let form = editor::form(&block.kind, &block.props).unwrap();
    let edited = editor::apply(&block.props, form.field("text").unwrap(), "Edited").unwrap();
    canvas.apply(
        CanvasCmd::UpdateProps {
            id: block.id.clone(),
            props: edited,
        },
        Some(&template),
        &mut ids,
    );
    assert_eq!(
        canvas.document().blocks[0].props,
        props(json!({"text": "Edited"}))
    );

    canvas.apply(CanvasCmd::Remove { id: block.id }, Some(&template), &mut ids);
    assert!(canvas.document().is_empty());
    assert_eq!(canvas.selection(), None);
}

#[test]
fn test_builder_output_renders_like_direct_document() {
    let template = landing_template();
    let mut canvas = Canvas::new(ContentDocument::empty());
    let mut ids = SequentialIds::new("b");

    for kind in [BlockType::Heading, BlockType::Quote, BlockType::Button, BlockType::Text] {
        canvas.apply(CanvasCmd::Add { kind }, Some(&template), &mut ids);
    }
    canvas.apply(
        CanvasCmd::UpdateProps {
            id: BlockId::new("b1"),
            props: props(json!({"text": "Title", "level": 1})),
        },
        Some(&template),
        &mut ids,
    );
    let removed = canvas.apply(
        CanvasCmd::Remove {
            id: BlockId::new("b2"),
        },
        Some(&template),
        &mut ids,
    );
    assert!(removed.changed);
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
            Block::new("h", BlockType::Heading, props(json!({"text": "Title", "level": 1}))),
            Block::new("t", BlockType::Text, props(json!({"text": "Default"}))),
            Block::new("x", BlockType::Button, Props::new()),
        ],
    };

    let built = canvas.into_document();
    let reloaded: ContentDocument =
        serde_json::from_str(&serde_json::to_string(&built).unwrap()).unwrap();

    assert_eq!(reloaded, built);
    assert_eq!(views(&template, &reloaded), views(&template, &direct));
}

#[test]
fn test_arbitrary_edit_sequence_keeps_ids_unique() {
    let template = landing_template();
    let mut canvas = Canvas::new(ContentDocument::empty());
    let mut ids = SequentialIds::new("b");
    let mut added = Vec::new();
    let mut removed = HashSet::new();

    // Deterministic walk over adds, removes and moves.
    for step in 0u32..60 {
        let existing: Vec<BlockId> = canvas.document().blocks.iter().map(|b| b.id.clone()).collect();
        let cmd = match step % 5 {
            0 | 1 => CanvasCmd::Add {
                kind: BlockType::KNOWN[(step as usize) % BlockType::KNOWN.len()].clone(),
            },
            2 if !existing.is_empty() => CanvasCmd::Move {
                id: existing[(step as usize * 7) % existing.len()].clone(),
                direction: if step % 2 == 0 { Direction::Up } else { Direction::Down },
            },
            3 if !existing.is_empty() => CanvasCmd::Remove {
                id: existing[(step as usize * 3) % existing.len()].clone(),
            },
            _ => CanvasCmd::Deselect,
        };
        if let CanvasCmd::Remove { id } = &cmd {
            removed.insert(id.clone());
        }
        let patch = canvas.apply(cmd, Some(&template), &mut ids);
        if let Some(id) = patch.selection.filter(|_| step % 5 < 2) {
            added.push(id);
        }
    }

    let remaining: Vec<&BlockId> = canvas.document().blocks.iter().map(|b| &b.id).collect();
    let unique: HashSet<_> = remaining.iter().collect();
    assert_eq!(unique.len(), remaining.len());

    let expected: HashSet<&BlockId> = added.iter().filter(|id| !removed.contains(*id)).collect();
    let actual: HashSet<&BlockId> = remaining.into_iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_unknown_props_survive_edit_and_roundtrip() {
    let template = landing_template();
    let document: ContentDocument = serde_json::from_value(json!({
        "version": 1,
        "blocks": [
            {"id": "a", "type": "button", "props": {"text": "Go", "tracking": {"campaign": "spring"}}},
            {"id": "b", "type": "carousel", "props": {"slides": [1, 2]}}
        ]
    }))
    .unwrap();
    let mut canvas = Canvas::new(document);
    let mut ids = SequentialIds::new("n");

    let block = canvas.document().blocks[0].clone();
    let form = editor::form(&block.kind, &block.props).unwrap();
    let next = editor::apply(&block.props, form.field("href").unwrap(), "/spring").unwrap();
    canvas.apply(
        CanvasCmd::UpdateProps { id: block.id, props: next },
        Some(&template),
        &mut ids,
    );

    let wire = serde_json::to_value(canvas.document()).unwrap();
    assert_eq!(
        wire,
        json!({
            "version": 1,
            "blocks": [
                {"id": "a", "type": "button", "props": {"text": "Go", "tracking": {"campaign": "spring"}, "href": "/spring"}},
                {"id": "b", "type": "carousel", "props": {"slides": [1, 2]}}
            ]
        })
    );
    assert_eq!(view::view(Some(&template), &canvas.document().blocks[1]), None);
}

#[test]
fn test_new_document_seeded_from_template() {
    let template = landing_template();
    let document = ContentDocument::seeded(Some(&template), &mut SequentialIds::new("s"));

    insta::assert_json_snapshot!(document, @r#"
    {
      "version": 1,
      "blocks": [
        {
          "id": "s1",
          "type": "text",
          "props": {
            "text": "Default"
          }
        },
        {
          "id": "s2",
          "type": "hero",
          "props": {
            "title": "Welcome",
            "align": "center"
          }
        }
      ]
    }
    "#);
}
