//! JSON client for the content API.
//!
//! Every endpoint answers with a small envelope (`{"page": {...}}`, `{"sites": [...]}`)
//! and reports failures as `{"error": "..."}` with a non-2xx status. The session is
//! a cookie, so one [`ApiClient`] (and its cookie store) is shared by all stores.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use sitesmith_engine::Template;
use sitesmith_engine::models::{
    Credentials, EntryFilter, EntryUpdate, NewEntry, NewSite, NewTemplate, Overview, Page, Post,
    Registration, Role, Site, SiteUpdate, TemplateUpdate, User, UserQuery,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response; `message` is the API's `error` text or the status reason.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A page-like record: pages and posts share every endpoint shape.
pub trait Entry: DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static {
    /// Path segment and list envelope key, e.g. `pages`.
    const COLLECTION: &'static str;
    /// Single-record envelope key, e.g. `page`.
    const SINGULAR: &'static str;

    fn id(&self) -> i64;
}

impl Entry for Page {
    const COLLECTION: &'static str = "pages";
    const SINGULAR: &'static str = "page";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Entry for Post {
    const COLLECTION: &'static str = "posts";
    const SINGULAR: &'static str = "post";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create client: {e}")))?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Auth

    /// Currently signed-in user, `None` for an anonymous session.
    pub async fn me(&self) -> Result<Option<User>, ApiError> {
        let body = self.get("/api/auth/me", &[]).await?;
        field(body, "user")
    }

    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        let body = self.send_json(Method::POST, "/api/auth/register", registration).await?;
        field(body, "user")
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let body = self.send_json(Method::POST, "/api/auth/login", credentials).await?;
        field(body, "user")
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_json(Method::POST, "/api/auth/logout", &serde_json::json!({}))
            .await?;
        Ok(())
    }

    // Sites

    pub async fn list_sites(&self) -> Result<Vec<Site>, ApiError> {
        field(self.get("/api/sites", &[]).await?, "sites")
    }

    pub async fn get_site(&self, id: i64) -> Result<Site, ApiError> {
        field(self.get(&format!("/api/sites/{id}"), &[]).await?, "site")
    }

    pub async fn create_site(&self, site: &NewSite) -> Result<Site, ApiError> {
        field(self.send_json(Method::POST, "/api/sites", site).await?, "site")
    }

    pub async fn update_site(&self, id: i64, update: &SiteUpdate) -> Result<Site, ApiError> {
        let path = format!("/api/sites/{id}");
        field(self.send_json(Method::PUT, &path, update).await?, "site")
    }

    pub async fn delete_site(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/sites/{id}")).await
    }

    // Pages and posts

    pub async fn list_entries<E: Entry>(&self, filter: &EntryFilter) -> Result<Vec<E>, ApiError> {
        let path = format!("/api/{}", E::COLLECTION);
        field(self.get(&path, &filter.pairs()).await?, E::COLLECTION)
    }

    pub async fn get_entry<E: Entry>(&self, id: i64) -> Result<E, ApiError> {
        let path = format!("/api/{}/{id}", E::COLLECTION);
        field(self.get(&path, &[]).await?, E::SINGULAR)
    }

    pub async fn get_entry_by_slug<E: Entry>(&self, site_id: i64, slug: &str) -> Result<E, ApiError> {
        let path = format!("/api/{}/site/{site_id}/{slug}", E::COLLECTION);
        field(self.get(&path, &[]).await?, E::SINGULAR)
    }

    pub async fn create_entry<E: Entry>(&self, entry: &NewEntry) -> Result<E, ApiError> {
        let path = format!("/api/{}", E::COLLECTION);
        field(self.send_json(Method::POST, &path, entry).await?, E::SINGULAR)
    }

    pub async fn update_entry<E: Entry>(&self, id: i64, update: &EntryUpdate) -> Result<E, ApiError> {
        let path = format!("/api/{}/{id}", E::COLLECTION);
        field(self.send_json(Method::PUT, &path, update).await?, E::SINGULAR)
    }

    pub async fn delete_entry<E: Entry>(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/{}/{id}", E::COLLECTION)).await
    }

    // Templates

    pub async fn list_templates(&self) -> Result<Vec<Template>, ApiError> {
        field(self.get("/api/templates", &[]).await?, "templates")
    }

    pub async fn get_template(&self, id: i64) -> Result<Template, ApiError> {
        field(self.get(&format!("/api/templates/{id}"), &[]).await?, "template")
    }

    pub async fn create_template(&self, template: &NewTemplate) -> Result<Template, ApiError> {
        field(
            self.send_json(Method::POST, "/api/templates", template).await?,
            "template",
        )
    }

    pub async fn update_template(
        &self,
        id: i64,
        update: &TemplateUpdate,
    ) -> Result<Template, ApiError> {
        let path = format!("/api/templates/{id}");
        field(self.send_json(Method::PUT, &path, update).await?, "template")
    }

    pub async fn delete_template(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/templates/{id}")).await
    }

    // Admin

    /// The overview is the whole response body, not an envelope.
    pub async fn overview(&self) -> Result<Overview, ApiError> {
        let body = self.get("/api/admin/overview", &[]).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<User>, ApiError> {
        let body = self.get("/api/admin/users", &query.pairs()).await?;
        let users: Option<Vec<User>> = field(body, "users")?;
        Ok(users.unwrap_or_default())
    }

    pub async fn set_user_role(&self, user_id: i64, role: Role) -> Result<User, ApiError> {
        let path = format!("/api/admin/users/{user_id}/role");
        let body = serde_json::json!({ "role": role });
        field(self.send_json(Method::PUT, &path, &body).await?, "user")
    }

    // Plumbing

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(Method::GET, path, request).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let request = self.http.request(method.clone(), self.url(path)).json(body);
        self.send(method, path, request).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(path));
        self.send(Method::DELETE, path, request).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Value, ApiError> {
        log::debug!("{method} {path}");
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(status, &text);
            log::warn!("{method} {path} failed with {status}: {message}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// `error` from a JSON error body, otherwise the status reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

/// Take `key` out of an envelope body.
fn field<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, ApiError> {
    let value = body.get_mut(key).map(Value::take).unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("`{key}`: {e}")))
}
