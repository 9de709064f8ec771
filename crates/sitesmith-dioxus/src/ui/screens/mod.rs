mod admin;
mod entry_editor;
mod login;
mod preview;
mod site;
mod sites;

pub use admin::AdminScreen;
pub use entry_editor::EntryEditorScreen;
pub use login::LoginScreen;
pub use preview::PreviewScreen;
pub use site::SiteScreen;
pub use sites::SitesScreen;

use sitesmith_engine::models::{EntryStatus, Page, Post};

/// Pages and posts share every screen; this picks the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Page,
    Post,
}

impl EntryKind {
    pub fn noun(self) -> &'static str {
        match self {
            EntryKind::Page => "page",
            EntryKind::Post => "post",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            EntryKind::Page => "Pages",
            EntryKind::Post => "Posts",
        }
    }
}

/// One row of an entry list.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub status: EntryStatus,
}

impl From<&Page> for EntrySummary {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id,
            title: page.title.clone(),
            slug: page.slug.clone(),
            status: page.status,
        }
    }
}

impl From<&Post> for EntrySummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            status: post.status,
        }
    }
}
