//! Pages and posts. Both carry a block [`ContentDocument`]; they differ only in
//! who is recorded as their creator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::{ContentDocument, null_as_default};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Draft,
    Published,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryStatus::Draft => "draft",
            EntryStatus::Published => "published",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: i64,
    pub site_id: i64,
    #[serde(default)]
    pub template_id: Option<i64>,
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: ContentDocument,
    #[serde(default)]
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub site_id: i64,
    #[serde(default)]
    pub template_id: Option<i64>,
    pub title: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: ContentDocument,
    #[serde(default)]
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Page {
    pub fn is_published(&self) -> bool {
        self.status == EntryStatus::Published
    }
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == EntryStatus::Published
    }
}

/// Body of `POST /api/pages` and `POST /api/posts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub site_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentDocument>,
}

impl NewEntry {
    pub fn new(site_id: i64, title: impl Into<String>) -> Self {
        Self {
            site_id,
            title: title.into(),
            slug: None,
            template_id: None,
            status: None,
            content: None,
        }
    }
}

/// Body of `PUT /api/pages/{id}` and `PUT /api/posts/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EntryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentDocument>,
}

impl EntryUpdate {
    /// Update that only saves new content.
    pub fn content(content: ContentDocument) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }
}

/// List filters for `GET /api/pages` and `GET /api/posts`. Pages only honour
/// `site_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub site_id: Option<i64>,
    pub author_id: Option<i64>,
    pub status: Option<EntryStatus>,
}

impl EntryFilter {
    pub fn site(site_id: i64) -> Self {
        Self {
            site_id: Some(site_id),
            ..Default::default()
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(site_id) = self.site_id {
            pairs.push(("siteId", site_id.to_string()));
        }
        if let Some(author_id) = self.author_id {
            pairs.push(("authorId", author_id.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_page_with_null_content_gets_empty_document() {
        let page: Page = serde_json::from_value(json!({
            "id": 1,
            "siteId": 2,
            "templateId": null,
            "title": "Home",
            "slug": "home",
            "content": null,
            "status": "published",
            "createdById": 1,
            "createdAt": "2024-05-01T10:00:00",
            "updatedAt": null
        }))
        .unwrap();

        assert_eq!(page.content, ContentDocument::empty());
        assert!(page.is_published());
        assert_eq!(page.template_id, None);
    }

    #[test]
    fn test_post_keeps_author() {
        let post: Post = serde_json::from_value(json!({
            "id": 4,
            "siteId": 2,
            "title": "News",
            "slug": "news",
            "content": {"version": 1, "blocks": []},
            "status": "draft",
            "authorId": 9
        }))
        .unwrap();

        assert_eq!(post.author_id, Some(9));
        assert!(!post.is_published());
    }

    #[test]
    fn test_new_entry_omits_unset_fields() {
        let body = NewEntry {
            template_id: Some(3),
            ..NewEntry::new(1, "About")
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"siteId": 1, "title": "About", "templateId": 3})
        );
    }

    #[test]
    fn test_filter_pairs() {
        let filter = EntryFilter {
            status: Some(EntryStatus::Published),
            ..EntryFilter::site(4)
        };
        assert_eq!(
            filter.pairs(),
            vec![("siteId", "4".to_string()), ("status", "published".to_string())]
        );
    }

    #[test]
    fn test_content_update() {
        let body = EntryUpdate::content(ContentDocument::empty());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"content": {"version": 1, "blocks": []}})
        );
    }
}
