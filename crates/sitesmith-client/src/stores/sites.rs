use sitesmith_engine::RequestTracker;
use sitesmith_engine::models::{NewSite, Site, SiteUpdate};

use crate::api::ApiClient;
use crate::store::{RecordTrackers, Status, Store, StoreError, StoreState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitesState {
    pub sites: Vec<Site>,
    pub current: Option<Site>,
    pub status: Status,
}

impl StoreState for SitesState {
    fn status(&self) -> &Status {
        &self.status
    }
    fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }
}

pub struct SitesStore {
    api: ApiClient,
    store: Store<SitesState>,
    list: RequestTracker,
    current: RequestTracker,
    saves: RecordTrackers,
}

impl SitesStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            store: Store::default(),
            list: RequestTracker::new(),
            current: RequestTracker::new(),
            saves: RecordTrackers::default(),
        }
    }

    pub fn store(&self) -> &Store<SitesState> {
        &self.store
    }

    pub fn snapshot(&self) -> SitesState {
        self.store.snapshot()
    }

    pub async fn fetch_sites(&self) -> Result<Vec<Site>, StoreError> {
        self.store
            .run("sites", Some(&self.list), self.api.list_sites(), |s, sites| {
                s.sites = sites.clone()
            })
            .await
    }

    pub async fn fetch_site(&self, id: i64) -> Result<Site, StoreError> {
        self.store
            .run("site", Some(&self.current), self.api.get_site(id), |s, site| {
                s.current = Some(site.clone())
            })
            .await
    }

    pub async fn create_site(&self, site: &NewSite) -> Result<Site, StoreError> {
        self.store
            .run("create site", None, self.api.create_site(site), |s, site| {
                s.sites.insert(0, site.clone())
            })
            .await
    }

    pub async fn update_site(&self, id: i64, update: &SiteUpdate) -> Result<Site, StoreError> {
        let save = self.saves.for_record(id);
        self.store
            .run(
                "update site",
                Some(&save),
                self.api.update_site(id, update),
                |s, updated| {
                    for site in s.sites.iter_mut().filter(|site| site.id == id) {
                        *site = updated.clone();
                    }
                    if s.current.as_ref().is_some_and(|c| c.id == id) {
                        s.current = Some(updated.clone());
                    }
                },
            )
            .await
    }

    pub async fn delete_site(&self, id: i64) -> Result<(), StoreError> {
        self.store
            .run("delete site", None, self.api.delete_site(id), |s, _| {
                s.sites.retain(|site| site.id != id);
                if s.current.as_ref().is_some_and(|c| c.id == id) {
                    s.current = None;
                }
            })
            .await
    }
}
