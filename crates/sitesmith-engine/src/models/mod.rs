//! Records exchanged with the content API.
//!
//! All of these are plain data mirroring the API's camelCase JSON. Timestamps are
//! kept as the ISO strings the API sends; nothing here interprets them.

pub mod admin;
pub mod entry;
pub mod site;
pub mod user;

pub use admin::{Overview, RoleCount, StatusCount, TopSite, Totals, UserQuery, UserSort};
pub use entry::{EntryFilter, EntryStatus, EntryUpdate, NewEntry, Page, Post};
pub use site::{NewSite, Site, SiteUpdate};
pub use user::{Credentials, Registration, Role, User};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::template::{TemplateConfig, TemplateKind};

/// Body of `POST /api/templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<TemplateConfig>,
}

/// Body of `PUT /api/templates/{id}`; absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TemplateKind>,
    /// Replaces the whole configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}
