//! One store per API area. Each keeps its own loading/error status and a request
//! tracker per read operation so a slow, outdated fetch cannot overwrite a newer one.

mod admin;
mod auth;
mod entries;
mod sites;
mod templates;

pub use admin::{AdminState, AdminStore};
pub use auth::{AuthState, AuthStore};
pub use entries::{EntryState, EntryStore, PagesStore, PostsStore};
pub use sites::{SitesState, SitesStore};
pub use templates::{TemplatesState, TemplatesStore};

use std::sync::Arc;

use crate::api::ApiClient;

/// Every store, sharing one API client (and so one session cookie).
#[derive(Clone)]
pub struct Stores {
    pub auth: Arc<AuthStore>,
    pub sites: Arc<SitesStore>,
    pub pages: Arc<PagesStore>,
    pub posts: Arc<PostsStore>,
    pub templates: Arc<TemplatesStore>,
    pub admin: Arc<AdminStore>,
}

impl Stores {
    pub fn new(api: ApiClient) -> Self {
        Self {
            auth: Arc::new(AuthStore::new(api.clone())),
            sites: Arc::new(SitesStore::new(api.clone())),
            pages: Arc::new(PagesStore::new(api.clone())),
            posts: Arc::new(PostsStore::new(api.clone())),
            templates: Arc::new(TemplatesStore::new(api.clone())),
            admin: Arc::new(AdminStore::new(api)),
        }
    }
}
