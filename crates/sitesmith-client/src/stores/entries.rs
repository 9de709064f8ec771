use sitesmith_engine::RequestTracker;
use sitesmith_engine::models::{EntryFilter, EntryUpdate, NewEntry, Page, Post};

use crate::api::{ApiClient, Entry};
use crate::store::{RecordTrackers, Status, Store, StoreError, StoreState};

#[derive(Debug, Clone, PartialEq)]
pub struct EntryState<E> {
    /// Newest first, as listed by the API.
    pub entries: Vec<E>,
    pub current: Option<E>,
    pub status: Status,
}

impl<E> Default for EntryState<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            status: Status::default(),
        }
    }
}

impl<E: Entry> StoreState for EntryState<E> {
    fn status(&self) -> &Status {
        &self.status
    }
    fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }
}

pub type PagesStore = EntryStore<Page>;
pub type PostsStore = EntryStore<Post>;

pub struct EntryStore<E: Entry> {
    api: ApiClient,
    store: Store<EntryState<E>>,
    list: RequestTracker,
    current: RequestTracker,
    saves: RecordTrackers,
}

impl<E: Entry> EntryStore<E> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            store: Store::default(),
            list: RequestTracker::new(),
            current: RequestTracker::new(),
            saves: RecordTrackers::default(),
        }
    }

    pub fn store(&self) -> &Store<EntryState<E>> {
        &self.store
    }

    pub fn snapshot(&self) -> EntryState<E> {
        self.store.snapshot()
    }

    pub async fn fetch_all(&self, filter: &EntryFilter) -> Result<Vec<E>, StoreError> {
        self.store
            .run(
                E::COLLECTION,
                Some(&self.list),
                self.api.list_entries::<E>(filter),
                |s, entries| s.entries = entries.clone(),
            )
            .await
    }

    pub async fn fetch(&self, id: i64) -> Result<E, StoreError> {
        self.store
            .run(
                E::SINGULAR,
                Some(&self.current),
                self.api.get_entry::<E>(id),
                |s, entry| s.current = Some(entry.clone()),
            )
            .await
    }

    pub async fn fetch_by_slug(&self, site_id: i64, slug: &str) -> Result<E, StoreError> {
        self.store
            .run(
                E::SINGULAR,
                Some(&self.current),
                self.api.get_entry_by_slug::<E>(site_id, slug),
                |s, entry| s.current = Some(entry.clone()),
            )
            .await
    }

    pub async fn create(&self, entry: &NewEntry) -> Result<E, StoreError> {
        self.store
            .run(
                "create",
                None,
                self.api.create_entry::<E>(entry),
                |s, created| s.entries.insert(0, created.clone()),
            )
            .await
    }

    /// Save an entry. A save that is overtaken by a newer save of the same entry
    /// resolves to [`StoreError::Superseded`] and leaves the state alone.
    pub async fn update(&self, id: i64, update: &EntryUpdate) -> Result<E, StoreError> {
        let save = self.saves.for_record(id);
        self.store
            .run(
                "update",
                Some(&save),
                self.api.update_entry::<E>(id, update),
                |s, updated| {
                    for entry in s.entries.iter_mut().filter(|e| e.id() == id) {
                        *entry = updated.clone();
                    }
                    if s.current.as_ref().is_some_and(|c| c.id() == id) {
                        s.current = Some(updated.clone());
                    }
                },
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.store
            .run("delete", None, self.api.delete_entry::<E>(id), |s, _| {
                s.entries.retain(|e| e.id() != id);
                if s.current.as_ref().is_some_and(|c| c.id() == id) {
                    s.current = None;
                }
            })
            .await
    }
}
