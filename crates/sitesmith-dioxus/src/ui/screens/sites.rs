use dioxus::prelude::*;
use sitesmith_client::{AuthStore, SitesStore, Stores};
use sitesmith_engine::models::NewSite;

use crate::ui::app::Screen;
use crate::ui::components::ErrorBanner;
use crate::ui::hooks::use_store;

/// Home screen: every site, plus a create form for admins.
#[component]
pub fn SitesScreen(on_navigate: Callback<Screen>) -> Element {
    let stores = use_context::<Stores>();
    let auth = use_store(stores.auth.clone(), AuthStore::store);
    let sites = use_store(stores.sites.clone(), SitesStore::store);

    let sites_store = stores.sites.clone();
    use_future(move || {
        let sites_store = sites_store.clone();
        async move {
            let _ = sites_store.fetch_sites().await;
        }
    });

    let mut name = use_signal(String::new);
    let mut slug = use_signal(String::new);

    let is_admin = auth.read().is_admin();
    let state = sites.read().clone();

    let create = {
        let sites_store = stores.sites.clone();
        move |event: FormEvent| {
            event.prevent_default();
            let site = NewSite {
                name: name.read().trim().to_string(),
                slug: Some(slug.read().trim().to_string()).filter(|s| !s.is_empty()),
                config: None,
            };
            let sites_store = sites_store.clone();
            spawn(async move {
                if sites_store.create_site(&site).await.is_ok() {
                    name.set(String::new());
                    slug.set(String::new());
                }
            });
        }
    };

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-2xl font-semibold", "Sites" }
            if let Some(message) = state.status.error.clone() {
                ErrorBanner {
                    message,
                    on_dismiss: {
                        let sites_store = stores.sites.clone();
                        move |_| sites_store.store().clear_error()
                    },
                }
            }
            if state.status.loading && state.sites.is_empty() {
                div { class: "text-sm text-gray-500", "Loading..." }
            } else if state.sites.is_empty() {
                div { class: "text-sm text-gray-500", "No sites yet." }
            } else {
                ul {
                    class: "space-y-2",
                    for site in state.sites.iter() {
                        li {
                            key: "{site.id}",
                            class: "flex items-center justify-between rounded border p-3",
                            button {
                                r#type: "button",
                                class: "text-left underline",
                                onclick: {
                                    let id = site.id;
                                    move |_| on_navigate.call(Screen::Site(id))
                                },
                                "{site.name}"
                            }
                            span { class: "text-xs text-gray-500", "/{site.slug}" }
                        }
                    }
                }
            }
            if is_admin {
                form {
                    class: "space-y-3 rounded border p-4 max-w-md",
                    onsubmit: create,
                    div { class: "text-sm font-medium", "New site" }
                    input {
                        class: "w-full border rounded px-3 py-2",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |event| name.set(event.value()),
                    }
                    input {
                        class: "w-full border rounded px-3 py-2",
                        placeholder: "Slug (optional)",
                        value: "{slug}",
                        oninput: move |event| slug.set(event.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 rounded bg-gray-900 text-white hover:bg-gray-800 disabled:opacity-50",
                        disabled: state.status.loading || name.read().trim().is_empty(),
                        "Create site"
                    }
                }
            }
        }
    }
}
