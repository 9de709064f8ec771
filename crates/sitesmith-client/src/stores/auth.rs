use sitesmith_engine::RequestTracker;
use sitesmith_engine::models::{Credentials, Registration, User};

use crate::api::ApiClient;
use crate::store::{Status, Store, StoreError, StoreState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub status: Status,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

impl StoreState for AuthState {
    fn status(&self) -> &Status {
        &self.status
    }
    fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }
}

/// Session state. Every call replaces the signed-in user, so they all share one
/// tracker: the latest session call wins.
pub struct AuthStore {
    api: ApiClient,
    store: Store<AuthState>,
    session: RequestTracker,
}

impl AuthStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            store: Store::default(),
            session: RequestTracker::new(),
        }
    }

    pub fn store(&self) -> &Store<AuthState> {
        &self.store
    }

    pub fn snapshot(&self) -> AuthState {
        self.store.snapshot()
    }

    /// Restore the session. A failing call is not an error for the caller: the
    /// user is treated as signed out and the message is kept in the state.
    pub async fn me(&self) -> Result<Option<User>, StoreError> {
        let result = self
            .store
            .run("me", Some(&self.session), self.api.me(), |s, user| {
                s.user = user.clone()
            })
            .await;
        match result {
            Err(StoreError::Api(_)) => {
                self.store.update(|s| s.user = None);
                Ok(None)
            }
            other => other,
        }
    }

    pub async fn register(&self, registration: &Registration) -> Result<User, StoreError> {
        self.store
            .run(
                "register",
                Some(&self.session),
                self.api.register(registration),
                |s, user| s.user = Some(user.clone()),
            )
            .await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, StoreError> {
        let user = self
            .store
            .run(
                "login",
                Some(&self.session),
                self.api.login(credentials),
                |s, user| s.user = Some(user.clone()),
            )
            .await?;
        log::info!("signed in as {}", user.email);
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), StoreError> {
        self.store
            .run("logout", Some(&self.session), self.api.logout(), |s, _| {
                s.user = None
            })
            .await
    }
}
