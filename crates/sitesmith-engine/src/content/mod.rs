//! Content document model.
//!
//! A page or post body is a [`ContentDocument`]: a version tag plus an ordered list
//! of [`Block`]s. The wire format is `{version, blocks: [{id, type, props}]}` and is
//! shared with every document already stored by the API, so unknown block types
//! and unknown prop keys are carried through untouched.

pub mod props;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::canvas::IdSource;
use crate::template::Template;

/// Schema tag written into every document.
pub const CONTENT_VERSION: u32 = 1;

/// Open, type-specific block properties.
pub type Props = Map<String, Value>;

/// Opaque block identifier, unique within one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Closed set of block types. Tags outside the set are kept as `Unknown` so they
/// survive a load/save cycle; they render and edit as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    Hero,
    Heading,
    Text,
    Quote,
    Code,
    Button,
    Section,
    Unknown(String),
}

impl BlockType {
    /// Every type the registry knows how to render and edit.
    pub const KNOWN: [BlockType; 7] = [
        BlockType::Hero,
        BlockType::Heading,
        BlockType::Text,
        BlockType::Quote,
        BlockType::Code,
        BlockType::Button,
        BlockType::Section,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Heading => "heading",
            BlockType::Text => "text",
            BlockType::Quote => "quote",
            BlockType::Code => "code",
            BlockType::Button => "button",
            BlockType::Section => "section",
            BlockType::Unknown(tag) => tag,
        }
    }

    /// Palette label; unknown tags are shown as-is.
    pub fn label(&self) -> &str {
        match self {
            BlockType::Hero => "Hero",
            BlockType::Heading => "Heading",
            BlockType::Text => "Text",
            BlockType::Quote => "Quote",
            BlockType::Code => "Code",
            BlockType::Button => "Button",
            BlockType::Section => "Section",
            BlockType::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, BlockType::Unknown(_))
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "hero" => BlockType::Hero,
            "heading" => BlockType::Heading,
            "text" => BlockType::Text,
            "quote" => BlockType::Quote,
            "code" => BlockType::Code,
            "button" => BlockType::Button,
            "section" => BlockType::Section,
            _ => BlockType::Unknown(tag),
        }
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        BlockType::from(tag.to_string())
    }
}

impl From<BlockType> for String {
    fn from(kind: BlockType) -> Self {
        match kind {
            BlockType::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content unit of a page or post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub kind: BlockType,
    #[serde(default, deserialize_with = "props::object_or_empty")]
    pub props: Props,
}

impl Block {
    pub fn new(id: impl Into<BlockId>, kind: BlockType, props: Props) -> Self {
        Self {
            id: id.into(),
            kind,
            props,
        }
    }
}

/// Versioned, ordered list of blocks belonging to one page or post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blocks: Vec<Block>,
}

fn default_version() -> u32 {
    CONTENT_VERSION
}

impl Default for ContentDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl ContentDocument {
    /// `{version: 1, blocks: []}`
    pub fn empty() -> Self {
        Self {
            version: CONTENT_VERSION,
            blocks: Vec::new(),
        }
    }

    /// Document pre-populated with every default block of the template, in order,
    /// each with a fresh id and its own copy of the default props.
    pub fn seeded(template: Option<&Template>, ids: &mut dyn IdSource) -> Self {
        let mut document = Self::empty();
        let Some(template) = template else {
            return document;
        };

        for entry in &template.config.blocks.defaults {
            let id = document.fresh_id(ids);
            document
                .blocks
                .push(Block::new(id, entry.kind.clone(), entry.props.clone()));
        }
        document
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.position(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Draw ids from `ids` until one is not already used by this document.
    pub(crate) fn fresh_id(&self, ids: &mut dyn IdSource) -> BlockId {
        loop {
            let id = ids.next_id();
            if !self.contains(&id) {
                return id;
            }
            log::debug!("id source produced duplicate block id {id}, drawing again");
        }
    }
}

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::SequentialIds;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_block_type_tags_roundtrip_through_strings() {
        for kind in BlockType::KNOWN {
            let tag = kind.as_str().to_string();
            assert_eq!(BlockType::from(tag), kind);
        }
        assert_eq!(
            BlockType::from("image"),
            BlockType::Unknown("image".to_string())
        );
        assert!(!BlockType::from("image").is_known());
        assert_eq!(BlockType::from("image").label(), "image");
    }

    #[test]
    fn test_document_wire_format_is_preserved() {
        let wire = json!({
            "version": 1,
            "blocks": [
                {"id": "b1", "type": "hero", "props": {"title": "Hi", "extra": [1, 2]}},
                {"id": "b2", "type": "image", "props": {"url": "https://x"}}
            ]
        });

        let document: ContentDocument = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(document.blocks[0].kind, BlockType::Hero);
        assert_eq!(
            document.blocks[1].kind,
            BlockType::Unknown("image".to_string())
        );

        assert_eq!(serde_json::to_value(&document).unwrap(), wire);
    }

    #[test]
    fn test_props_key_order_survives_roundtrip() {
        let text = r#"{"version":1,"blocks":[{"id":"a","type":"button","props":{"variant":"secondary","text":"Go","href":"/x"}}]}"#;
        let document: ContentDocument = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&document).unwrap(), text);
    }

    #[test]
    fn test_missing_or_null_parts_default() {
        let document: ContentDocument = serde_json::from_value(json!({})).unwrap();
        assert_eq!(document, ContentDocument::empty());

        let document: ContentDocument =
            serde_json::from_value(json!({"version": 1, "blocks": null})).unwrap();
        assert!(document.is_empty());

        let document: ContentDocument = serde_json::from_value(json!({
            "version": 1,
            "blocks": [{"id": "x", "type": "text", "props": null}]
        }))
        .unwrap();
        assert!(document.blocks[0].props.is_empty());
    }

    #[test]
    fn test_seeded_document_uses_every_template_default() {
        let template: Template = serde_json::from_value(json!({
            "id": 1,
            "name": "Landing",
            "type": "page",
            "config": {"blocks": {
                "allowed": ["hero", "text"],
                "default": [
                    {"type": "hero", "props": {"title": "Welcome"}},
                    {"type": "text"}
                ]
            }}
        }))
        .unwrap();

        let mut ids = SequentialIds::new("d");
        let document = ContentDocument::seeded(Some(&template), &mut ids);

        assert_eq!(document.version, CONTENT_VERSION);
        assert_eq!(document.len(), 2);
        assert_eq!(document.blocks[0].id.as_str(), "d1");
        assert_eq!(document.blocks[0].props["title"], json!("Welcome"));
        assert_eq!(document.blocks[1].kind, BlockType::Text);
        assert!(document.blocks[1].props.is_empty());

        assert_eq!(ContentDocument::seeded(None, &mut ids), ContentDocument::empty());
    }
}
