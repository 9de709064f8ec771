use dioxus::prelude::*;
use sitesmith_client::{AuthStore, PagesStore, PostsStore, SitesStore, Stores, TemplatesStore};

use super::EntryKind;
use crate::ui::app::Screen;
use crate::ui::components::{ContentPreview, PreviewEntry};
use crate::ui::hooks::use_store;

#[component]
pub fn PreviewScreen(kind: EntryKind, id: i64, on_navigate: Callback<Screen>) -> Element {
    let stores = use_context::<Stores>();
    let auth = use_store(stores.auth.clone(), AuthStore::store);
    let sites = use_store(stores.sites.clone(), SitesStore::store);
    let pages = use_store(stores.pages.clone(), PagesStore::store);
    let posts = use_store(stores.posts.clone(), PostsStore::store);
    let templates = use_store(stores.templates.clone(), TemplatesStore::store);

    let loader = stores.clone();
    use_future(move || {
        let stores = loader.clone();
        async move {
            let site_id = match kind {
                EntryKind::Page => stores.pages.fetch(id).await.map(|page| page.site_id),
                EntryKind::Post => stores.posts.fetch(id).await.map(|post| post.site_id),
            };
            let _ = stores.templates.fetch_templates().await;
            if let Ok(site_id) = site_id {
                let _ = stores.sites.fetch_site(site_id).await;
            }
        }
    });

    let (entry, site_id, template_id, error) = match kind {
        EntryKind::Page => {
            let state = pages.read();
            let page = state.current.as_ref().filter(|page| page.id == id);
            (
                page.map(PreviewEntry::from),
                page.map(|page| page.site_id),
                page.and_then(|page| page.template_id),
                state.status.error.clone(),
            )
        }
        EntryKind::Post => {
            let state = posts.read();
            let post = state.current.as_ref().filter(|post| post.id == id);
            (
                post.map(PreviewEntry::from),
                post.map(|post| post.site_id),
                post.and_then(|post| post.template_id),
                state.status.error.clone(),
            )
        }
    };

    let Some(entry) = entry else {
        let noun = kind.noun();
        return rsx! {
            if let Some(message) = error {
                div { class: "text-sm text-red-700", "{message}" }
            } else {
                div { class: "text-sm text-gray-500", "Loading {noun}..." }
            }
        };
    };

    let template = template_id.and_then(|template_id| templates.read().find(template_id).cloned());
    let site_name = sites
        .read()
        .current
        .as_ref()
        .filter(|site| Some(site.id) == site_id)
        .map(|site| site.name.clone())
        .unwrap_or_else(|| "Site".to_string());
    let is_admin = auth.read().is_admin();

    rsx! {
        div {
            class: "space-y-4",
            div {
                class: "flex items-center gap-2",
                if let Some(site_id) = site_id {
                    button {
                        r#type: "button",
                        class: "text-sm underline",
                        onclick: move |_| on_navigate.call(Screen::Site(site_id)),
                        "Back to site"
                    }
                }
                if is_admin {
                    button {
                        r#type: "button",
                        class: "text-sm underline",
                        onclick: move |_| on_navigate.call(Screen::Edit(kind, id)),
                        "Edit"
                    }
                }
            }
            ContentPreview { template, site_name, entry, is_admin }
        }
    }
}
