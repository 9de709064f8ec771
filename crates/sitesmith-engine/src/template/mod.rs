//! Templates: externally managed configuration bundling the block palette, the
//! default content of new blocks, and style/layout class strings.
//!
//! Templates are owned by the API and treated as read-only input. Deserialization
//! is lenient: a configuration of the wrong shape degrades to "nothing configured"
//! rather than failing the whole template, and keys this crate does not interpret
//! are kept so a template can be edited and saved back unchanged.

pub mod style;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::content::{BlockType, Props, props::object_or_empty};

pub use style::{
    resolve_heading_class, resolve_layout_class, resolve_style_class, style_override,
};

/// Which kind of content a template may be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Page,
    Post,
    #[default]
    Both,
}

impl TemplateKind {
    pub fn applies_to_pages(self) -> bool {
        matches!(self, TemplateKind::Page | TemplateKind::Both)
    }

    pub fn applies_to_posts(self) -> bool {
        matches!(self, TemplateKind::Post | TemplateKind::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: TemplateKind,
    #[serde(default, deserialize_with = "lenient")]
    pub config: TemplateConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Template {
    /// Template with the given configuration and no server-side metadata.
    pub fn new(id: i64, name: impl Into<String>, config: TemplateConfig) -> Self {
        Self {
            id,
            name: name.into(),
            kind: TemplateKind::Both,
            config,
            created_by_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Block types offered by the palette, in configured order.
    pub fn allowed(&self) -> &[BlockType] {
        &self.config.blocks.allowed
    }

    /// Props of the first default entry for `kind`.
    pub fn default_props(&self, kind: &BlockType) -> Option<&Props> {
        self.config
            .blocks
            .defaults
            .iter()
            .find(|entry| &entry.kind == kind)
            .map(|entry| &entry.props)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "BlocksConfig::is_empty"
    )]
    pub blocks: BlocksConfig,
    #[serde(
        default,
        deserialize_with = "object_or_empty",
        skip_serializing_if = "Map::is_empty"
    )]
    pub styles: Map<String, Value>,
    #[serde(
        default,
        deserialize_with = "object_or_empty",
        skip_serializing_if = "Map::is_empty"
    )]
    pub layout: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlocksConfig {
    #[serde(default, deserialize_with = "lenient_list")]
    pub allowed: Vec<BlockType>,
    #[serde(rename = "default", default, deserialize_with = "lenient_list")]
    pub defaults: Vec<DefaultBlock>,
}

impl BlocksConfig {
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty() && self.defaults.is_empty()
    }
}

/// Seed content for a block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultBlock {
    #[serde(rename = "type")]
    pub kind: BlockType,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub props: Props,
}

/// Deserialize `T` from any value, falling back to `T::default()` when the value
/// has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a list, skipping elements that do not fit and treating a non-array
/// as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
