use sitesmith_engine::models::{NewTemplate, TemplateUpdate};
use sitesmith_engine::{RequestTracker, Template};

use crate::api::ApiClient;
use crate::store::{Status, Store, StoreError, StoreState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplatesState {
    pub templates: Vec<Template>,
    pub current: Option<Template>,
    pub status: Status,
}

impl TemplatesState {
    /// Templates offered when creating a page (`page` or `both`).
    pub fn for_pages(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(|t| t.kind.applies_to_pages())
    }

    /// Templates offered when creating a post (`post` or `both`).
    pub fn for_posts(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(|t| t.kind.applies_to_posts())
    }

    pub fn find(&self, id: i64) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }
}

impl StoreState for TemplatesState {
    fn status(&self) -> &Status {
        &self.status
    }
    fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }
}

pub struct TemplatesStore {
    api: ApiClient,
    store: Store<TemplatesState>,
    list: RequestTracker,
    current: RequestTracker,
}

impl TemplatesStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            store: Store::default(),
            list: RequestTracker::new(),
            current: RequestTracker::new(),
        }
    }

    pub fn store(&self) -> &Store<TemplatesState> {
        &self.store
    }

    pub fn snapshot(&self) -> TemplatesState {
        self.store.snapshot()
    }

    pub async fn fetch_templates(&self) -> Result<Vec<Template>, StoreError> {
        self.store
            .run(
                "templates",
                Some(&self.list),
                self.api.list_templates(),
                |s, templates| s.templates = templates.clone(),
            )
            .await
    }

    pub async fn fetch_template(&self, id: i64) -> Result<Template, StoreError> {
        self.store
            .run(
                "template",
                Some(&self.current),
                self.api.get_template(id),
                |s, template| s.current = Some(template.clone()),
            )
            .await
    }

    pub async fn create_template(&self, template: &NewTemplate) -> Result<Template, StoreError> {
        self.store
            .run(
                "create template",
                None,
                self.api.create_template(template),
                |s, created| s.templates.insert(0, created.clone()),
            )
            .await
    }

    pub async fn update_template(
        &self,
        id: i64,
        update: &TemplateUpdate,
    ) -> Result<Template, StoreError> {
        self.store
            .run(
                "update template",
                None,
                self.api.update_template(id, update),
                |s, updated| {
                    for template in s.templates.iter_mut().filter(|t| t.id == id) {
                        *template = updated.clone();
                    }
                    if s.current.as_ref().is_some_and(|c| c.id == id) {
                        s.current = Some(updated.clone());
                    }
                },
            )
            .await
    }

    pub async fn delete_template(&self, id: i64) -> Result<(), StoreError> {
        self.store
            .run(
                "delete template",
                None,
                self.api.delete_template(id),
                |s, _| {
                    s.templates.retain(|t| t.id != id);
                    if s.current.as_ref().is_some_and(|c| c.id == id) {
                        s.current = None;
                    }
                },
            )
            .await
    }
}
