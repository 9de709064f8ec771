use sitesmith_engine::RequestTracker;
use sitesmith_engine::models::{Overview, Role, User, UserQuery};

use crate::api::ApiClient;
use crate::store::{Status, Store, StoreError, StoreState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminState {
    pub overview: Option<Overview>,
    pub users: Vec<User>,
    pub status: Status,
}

impl StoreState for AdminState {
    fn status(&self) -> &Status {
        &self.status
    }
    fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }
}

pub struct AdminStore {
    api: ApiClient,
    store: Store<AdminState>,
    overview: RequestTracker,
    users: RequestTracker,
}

impl AdminStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            store: Store::default(),
            overview: RequestTracker::new(),
            users: RequestTracker::new(),
        }
    }

    pub fn store(&self) -> &Store<AdminState> {
        &self.store
    }

    pub fn snapshot(&self) -> AdminState {
        self.store.snapshot()
    }

    pub async fn fetch_overview(&self) -> Result<Overview, StoreError> {
        self.store
            .run(
                "overview",
                Some(&self.overview),
                self.api.overview(),
                |s, overview| s.overview = Some(overview.clone()),
            )
            .await
    }

    pub async fn fetch_users(&self, query: &UserQuery) -> Result<Vec<User>, StoreError> {
        self.store
            .run(
                "users",
                Some(&self.users),
                self.api.list_users(query),
                |s, users| s.users = users.clone(),
            )
            .await
    }

    pub async fn set_user_role(&self, user_id: i64, role: Role) -> Result<User, StoreError> {
        self.store
            .run(
                "set role",
                None,
                self.api.set_user_role(user_id, role),
                |s, updated| {
                    for user in s.users.iter_mut().filter(|u| u.id == user_id) {
                        user.role = updated.role;
                    }
                },
            )
            .await
    }
}
