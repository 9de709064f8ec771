//! Talks to the content API and the third-party enrichment services, and keeps
//! the session state the UI renders from.

pub mod api;
pub mod enrichment;
pub mod store;
pub mod stores;

pub use api::{ApiClient, ApiError, Entry};
pub use enrichment::{JokeApi, ZenQuotes};
pub use store::{Status, Store, StoreError, StoreState, SubscriptionId};
pub use stores::{AdminStore, AuthStore, PagesStore, PostsStore, SitesStore, Stores, TemplatesStore};
