//! Admin dashboard statistics and user management queries.

use serde::{Deserialize, Serialize};

use super::{EntryStatus, Role};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub totals: Totals,
    #[serde(default)]
    pub users_by_role: Vec<RoleCount>,
    #[serde(default)]
    pub pages_by_status: Vec<StatusCount>,
    #[serde(default)]
    pub posts_by_status: Vec<StatusCount>,
    #[serde(default)]
    pub top_sites: Vec<TopSite>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub users: u64,
    pub sites: u64,
    pub pages: u64,
    pub posts: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: EntryStatus,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSite {
    pub site_id: i64,
    pub name: String,
    pub slug: String,
    pub pages_count: u64,
    pub posts_count: u64,
    pub total: u64,
}

impl Overview {
    /// Share of published pages, `None` when there are no pages.
    pub fn published_page_ratio(&self) -> Option<f64> {
        let total: u64 = self.pages_by_status.iter().map(|s| s.count).sum();
        if total == 0 {
            return None;
        }
        let published: u64 = self
            .pages_by_status
            .iter()
            .filter(|s| s.status == EntryStatus::Published)
            .map(|s| s.count)
            .sum();
        Some(published as f64 / total as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSort {
    #[default]
    CreatedDesc,
    CreatedAsc,
    NameAsc,
    NameDesc,
}

impl UserSort {
    pub fn as_str(self) -> &'static str {
        match self {
            UserSort::CreatedDesc => "createdAt_desc",
            UserSort::CreatedAsc => "createdAt_asc",
            UserSort::NameAsc => "name_asc",
            UserSort::NameDesc => "name_desc",
        }
    }
}

/// Filters for `GET /api/admin/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Case-insensitive match on name or email.
    pub q: Option<String>,
    pub role: Option<Role>,
    pub sort: Option<UserSort>,
}

impl UserQuery {
    /// Query pairs for the set filters only, blank search text dropped.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        pairs
    }
}
