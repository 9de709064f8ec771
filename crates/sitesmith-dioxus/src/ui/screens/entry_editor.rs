use dioxus::prelude::*;
use sitesmith_client::{AuthStore, PagesStore, PostsStore, StoreError, Stores, TemplatesStore};
use sitesmith_engine::models::{EntryStatus, EntryUpdate, Page, Post};
use sitesmith_engine::{ContentDocument, Template};

use super::EntryKind;
use crate::ui::app::Screen;
use crate::ui::components::{BuilderCanvas, ErrorBanner};
use crate::ui::hooks::use_store;

/// The editable fields of a page or post, held locally until saved.
#[derive(Debug, Clone, PartialEq)]
struct Draft {
    site_id: i64,
    title: String,
    slug: String,
    status: EntryStatus,
    template_id: Option<i64>,
    content: ContentDocument,
}

impl Draft {
    /// Full update body. A blank slug is left out so the server keeps the current one.
    fn update(&self) -> EntryUpdate {
        let slug = self.slug.trim();
        EntryUpdate {
            title: Some(self.title.trim().to_string()),
            slug: (!slug.is_empty()).then(|| slug.to_string()),
            template_id: self.template_id,
            status: Some(self.status),
            content: Some(self.content.clone()),
        }
    }
}

impl From<&Page> for Draft {
    fn from(page: &Page) -> Self {
        Self {
            site_id: page.site_id,
            title: page.title.clone(),
            slug: page.slug.clone(),
            status: page.status,
            template_id: page.template_id,
            content: page.content.clone(),
        }
    }
}

impl From<&Post> for Draft {
    fn from(post: &Post) -> Self {
        Self {
            site_id: post.site_id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            status: post.status,
            template_id: post.template_id,
            content: post.content.clone(),
        }
    }
}

#[component]
pub fn EntryEditorScreen(kind: EntryKind, id: i64, on_navigate: Callback<Screen>) -> Element {
    let stores = use_context::<Stores>();
    let auth = use_store(stores.auth.clone(), AuthStore::store);
    let pages = use_store(stores.pages.clone(), PagesStore::store);
    let posts = use_store(stores.posts.clone(), PostsStore::store);
    let templates = use_store(stores.templates.clone(), TemplatesStore::store);

    let mut draft = use_signal(|| None::<Draft>);
    let mut saved = use_signal(|| false);

    let loader = stores.clone();
    use_future(move || {
        let stores = loader.clone();
        async move {
            if let Err(err) = stores.templates.fetch_templates().await {
                log::warn!("could not load templates: {err}");
            }
            let loaded = match kind {
                EntryKind::Page => stores.pages.fetch(id).await.map(|page| Draft::from(&page)),
                EntryKind::Post => stores.posts.fetch(id).await.map(|post| Draft::from(&post)),
            };
            match loaded {
                Ok(loaded) => draft.set(Some(loaded)),
                Err(err) => log::warn!("could not load {} {id}: {err}", kind.noun()),
            }
        }
    });

    if !auth.read().is_admin() {
        return rsx! {
            div {
                class: "space-y-2",
                div { class: "text-lg font-semibold", "Forbidden" }
                div { class: "text-sm text-gray-500", "Only admins can edit content." }
            }
        };
    }

    let status = match kind {
        EntryKind::Page => pages.read().status.clone(),
        EntryKind::Post => posts.read().status.clone(),
    };
    let noun = kind.noun();

    let Some(current) = draft.read().clone() else {
        return rsx! {
            if let Some(message) = status.error {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| on_navigate.call(Screen::Sites),
                }
            } else {
                div { class: "text-sm text-gray-500", "Loading {noun}..." }
            }
        };
    };

    let available: Vec<Template> = match kind {
        EntryKind::Page => templates.read().for_pages().cloned().collect(),
        EntryKind::Post => templates.read().for_posts().cloned().collect(),
    };
    let template = current
        .template_id
        .and_then(|template_id| templates.read().find(template_id).cloned());

    let site_id = current.site_id;
    let save = {
        let stores = stores.clone();
        move |_: MouseEvent| {
            let Some(update) = draft.read().as_ref().map(Draft::update) else {
                return;
            };
            let stores = stores.clone();
            saved.set(false);
            spawn(async move {
                let result = match kind {
                    EntryKind::Page => stores.pages.update(id, &update).await.map(|_| ()),
                    EntryKind::Post => stores.posts.update(id, &update).await.map(|_| ()),
                };
                match result {
                    Ok(()) => saved.set(true),
                    Err(StoreError::Superseded) => {
                        log::debug!("save of {} {id} overtaken by a newer save", kind.noun())
                    }
                    Err(err) => log::warn!("save failed: {err}"),
                }
            });
        }
    };

    let mut edit = move |change: fn(&mut Draft, String), value: String| {
        if let Some(draft) = draft.write().as_mut() {
            change(draft, value);
        }
        saved.set(false);
    };

    rsx! {
        div {
            class: "space-y-4",
            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-semibold", "Edit {noun}" }
                div {
                    class: "flex items-center gap-2",
                    if saved() {
                        span { class: "text-sm text-green-700", "Saved" }
                    }
                    button {
                        r#type: "button",
                        class: "px-3 py-2 rounded border hover:bg-gray-50",
                        onclick: move |_| on_navigate.call(Screen::Site(site_id)),
                        "Back"
                    }
                    button {
                        r#type: "button",
                        class: "px-3 py-2 rounded border hover:bg-gray-50",
                        onclick: move |_| on_navigate.call(Screen::Preview(kind, id)),
                        "Preview"
                    }
                    button {
                        r#type: "button",
                        class: "px-4 py-2 rounded bg-gray-900 text-white hover:bg-gray-800 disabled:opacity-50",
                        disabled: status.loading || current.title.trim().is_empty(),
                        onclick: save,
                        if status.loading { "Saving..." } else { "Save" }
                    }
                }
            }
            if let Some(message) = status.error.clone() {
                ErrorBanner {
                    message,
                    on_dismiss: {
                        let stores = stores.clone();
                        move |_| match kind {
                            EntryKind::Page => stores.pages.store().clear_error(),
                            EntryKind::Post => stores.posts.store().clear_error(),
                        }
                    },
                }
            }
            TemplatesErrorBanner {}
            div {
                class: "grid grid-cols-1 md:grid-cols-4 gap-3",
                input {
                    class: "border rounded px-3 py-2 md:col-span-2",
                    placeholder: "Title",
                    value: "{current.title}",
                    oninput: move |event| edit(|d, v| d.title = v, event.value()),
                }
                input {
                    class: "border rounded px-3 py-2",
                    placeholder: "Slug",
                    value: "{current.slug}",
                    oninput: move |event| edit(|d, v| d.slug = v, event.value()),
                }
                select {
                    class: "border rounded px-3 py-2",
                    onchange: move |event| {
                        edit(
                            |d, v| {
                                d.status = if v == "published" {
                                    EntryStatus::Published
                                } else {
                                    EntryStatus::Draft
                                }
                            },
                            event.value(),
                        )
                    },
                    for option_status in [EntryStatus::Draft, EntryStatus::Published] {
                        option {
                            value: "{option_status}",
                            selected: current.status == option_status,
                            "{option_status}"
                        }
                    }
                }
                select {
                    class: "border rounded px-3 py-2 md:col-span-4",
                    onchange: move |event| edit(|d, v| d.template_id = v.parse().ok(), event.value()),
                    option { value: "", selected: current.template_id.is_none(), "No template" }
                    for option_template in available.iter() {
                        option {
                            key: "{option_template.id}",
                            value: "{option_template.id}",
                            selected: current.template_id == Some(option_template.id),
                            "{option_template.name}"
                        }
                    }
                }
            }
            BuilderCanvas {
                template,
                value: current.content.clone(),
                on_change: move |content| {
                    if let Some(draft) = draft.write().as_mut() {
                        draft.content = content;
                    }
                    saved.set(false);
                },
            }
        }
    }
}

/// Shown when templates failed to load; blocks then render unstyled.
#[component]
fn TemplatesErrorBanner() -> Element {
    let stores = use_context::<Stores>();
    let templates = use_store(stores.templates.clone(), TemplatesStore::store);

    let Some(message) = templates.read().status.error.clone() else {
        return rsx! {};
    };

    rsx! {
        ErrorBanner {
            message: format!("Templates unavailable: {message}"),
            on_dismiss: move |_| stores.templates.store().clear_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sitesmith_client::ApiClient;

    fn draft() -> Draft {
        Draft {
            site_id: 1,
            title: "  About  ".to_string(),
            slug: "about".to_string(),
            status: EntryStatus::Published,
            template_id: Some(3),
            content: serde_json::from_value(json!({
                "version": 1,
                "blocks": [{"id": "a1", "type": "text", "props": {"text": "Hi"}}]
            }))
            .unwrap(),
        }
    }

    #[test]
    fn test_update_carries_every_field() {
        let update = draft().update();

        assert_eq!(update.title.as_deref(), Some("About"));
        assert_eq!(update.slug.as_deref(), Some("about"));
        assert_eq!(update.template_id, Some(3));
        assert_eq!(update.status, Some(EntryStatus::Published));
        assert_eq!(update.content.map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_blank_slug_left_out() {
        let update = Draft {
            slug: "   ".to_string(),
            ..draft()
        }
        .update();

        assert_eq!(update.slug, None);
    }

    #[test]
    fn test_draft_from_post() {
        let post: Post = serde_json::from_value(json!({
            "id": 5,
            "siteId": 2,
            "templateId": null,
            "title": "News",
            "slug": "news",
            "content": null,
            "status": "draft",
            "authorId": 7
        }))
        .unwrap();

        let draft = Draft::from(&post);

        assert_eq!(draft.site_id, 2);
        assert_eq!(draft.template_id, None);
        assert!(draft.content.is_empty());
        assert_eq!(draft.status, EntryStatus::Draft);
    }

    fn unreachable_stores() -> Stores {
        Stores::new(ApiClient::with_client("http://localhost:1", reqwest::Client::new()))
    }

    fn render_banner(stores: Stores) -> String {
        let mut dom = VirtualDom::new(TemplatesErrorBanner).with_root_context(stores);
        dom.rebuild_in_place();
        render(&dom)
    }

    #[tokio::test]
    async fn test_failed_template_load_shows_banner() {
        let stores = unreachable_stores();
        assert!(stores.templates.fetch_templates().await.is_err());

        let html = render_banner(stores);

        assert!(html.contains("Templates unavailable"));
    }

    #[test]
    fn test_no_banner_without_template_error() {
        let html = render_banner(unreachable_stores());

        assert!(!html.contains("Templates unavailable"));
    }
}
