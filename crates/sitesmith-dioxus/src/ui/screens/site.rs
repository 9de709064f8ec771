use dioxus::prelude::*;
use sitesmith_client::{AuthStore, PagesStore, PostsStore, SitesStore, Stores, TemplatesStore};
use sitesmith_engine::models::{EntryFilter, NewEntry};
use sitesmith_engine::{ContentDocument, RandomIds, Template};

use super::{EntryKind, EntrySummary};
use crate::ui::app::Screen;
use crate::ui::components::ErrorBanner;
use crate::ui::hooks::use_store;

/// One site: its pages and posts, with create and delete for admins.
#[component]
pub fn SiteScreen(site_id: i64, on_navigate: Callback<Screen>) -> Element {
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
            let filter = EntryFilter::site(site_id);
            let _ = stores.sites.fetch_site(site_id).await;
            let _ = stores.templates.fetch_templates().await;
            let _ = stores.pages.fetch_all(&filter).await;
            let _ = stores.posts.fetch_all(&filter).await;
        }
    });

    let is_admin = auth.read().is_admin();
    let site = sites
        .read()
        .current
        .clone()
        .filter(|site| site.id == site_id);
    let page_rows: Vec<EntrySummary> = pages.read().entries.iter().map(EntrySummary::from).collect();
    let post_rows: Vec<EntrySummary> = posts.read().entries.iter().map(EntrySummary::from).collect();
    let page_templates: Vec<Template> = templates.read().for_pages().cloned().collect();
    let post_templates: Vec<Template> = templates.read().for_posts().cloned().collect();
    let page_error = pages.read().status.error.clone();
    let post_error = posts.read().status.error.clone();

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex items-center justify-between",
                h1 {
                    class: "text-2xl font-semibold",
                    if let Some(site) = site.as_ref() { "{site.name}" } else { "Site #{site_id}" }
                }
                button {
                    r#type: "button",
                    class: "text-sm underline",
                    onclick: move |_| on_navigate.call(Screen::Sites),
                    "All sites"
                }
            }
            if let Some(message) = page_error {
                ErrorBanner {
                    message,
                    on_dismiss: {
                        let pages = stores.pages.clone();
                        move |_| pages.store().clear_error()
                    },
                }
            }
            if let Some(message) = post_error {
                ErrorBanner {
                    message,
                    on_dismiss: {
                        let posts = stores.posts.clone();
                        move |_| posts.store().clear_error()
                    },
                }
            }
            div {
                class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                EntrySection {
                    kind: EntryKind::Page,
                    site_id,
                    entries: page_rows,
                    templates: page_templates,
                    can_edit: is_admin,
                    on_navigate,
                }
                EntrySection {
                    kind: EntryKind::Post,
                    site_id,
                    entries: post_rows,
                    templates: post_templates,
                    can_edit: is_admin,
                    on_navigate,
                }
            }
        }
    }
}

#[component]
fn EntrySection(
    kind: EntryKind,
    site_id: i64,
    entries: Vec<EntrySummary>,
    templates: Vec<Template>,
    can_edit: bool,
    on_navigate: Callback<Screen>,
) -> Element {
    let stores = use_context::<Stores>();
    let mut title = use_signal(String::new);
    let mut template_id = use_signal(|| None::<i64>);
    let noun = kind.noun();
    let heading = kind.heading();

    let create = {
        let stores = stores.clone();
        let templates = templates.clone();
        move |event: FormEvent| {
            event.prevent_default();
            let chosen = *template_id.read();
            let template = templates.iter().find(|t| Some(t.id) == chosen);
            let entry = NewEntry {
                template_id: template.map(|t| t.id),
                content: Some(ContentDocument::seeded(template, &mut RandomIds)),
                ..NewEntry::new(site_id, title.read().trim())
            };
            let stores = stores.clone();
            spawn(async move {
                let created = match kind {
                    EntryKind::Page => stores.pages.create(&entry).await.map(|page| page.id),
                    EntryKind::Post => stores.posts.create(&entry).await.map(|post| post.id),
                };
                if let Ok(id) = created {
                    title.set(String::new());
                    on_navigate.call(Screen::Edit(kind, id));
                }
            });
        }
    };

    rsx! {
        div {
            class: "rounded border p-4 space-y-3",
            h2 { class: "text-lg font-semibold", "{heading}" }
            if entries.is_empty() {
                div { class: "text-sm text-gray-500", "No {noun}s yet." }
            } else {
                ul {
                    class: "space-y-2",
                    for entry in entries.iter() {
                        li {
                            key: "{entry.id}",
                            class: "flex items-center justify-between gap-2",
                            div {
                                div { class: "text-sm font-medium", "{entry.title}" }
                                div { class: "text-xs text-gray-500", "/{entry.slug} · {entry.status}" }
                            }
                            div {
                                class: "flex items-center gap-2",
                                if can_edit {
                                    button {
                                        r#type: "button",
                                        class: "text-xs px-2 py-1 rounded border hover:bg-gray-50",
                                        onclick: {
                                            let id = entry.id;
                                            move |_| on_navigate.call(Screen::Edit(kind, id))
                                        },
                                        "Edit"
                                    }
                                }
                                button {
                                    r#type: "button",
                                    class: "text-xs px-2 py-1 rounded border hover:bg-gray-50",
                                    onclick: {
                                        let id = entry.id;
                                        move |_| on_navigate.call(Screen::Preview(kind, id))
                                    },
                                    "Preview"
                                }
                                if can_edit {
                                    button {
                                        r#type: "button",
                                        class: "text-xs px-2 py-1 rounded border text-red-700 hover:bg-red-50",
                                        onclick: {
                                            let id = entry.id;
                                            let stores = stores.clone();
                                            move |_| {
                                                let stores = stores.clone();
                                                spawn(async move {
                                                    let _ = match kind {
                                                        EntryKind::Page => stores.pages.delete(id).await,
                                                        EntryKind::Post => stores.posts.delete(id).await,
                                                    };
                                                });
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if can_edit {
                form {
                    class: "space-y-2 border-t pt-3",
                    onsubmit: create,
                    input {
                        class: "w-full border rounded px-3 py-2",
                        placeholder: "New {noun} title",
                        value: "{title}",
                        oninput: move |event| title.set(event.value()),
                    }
                    select {
                        class: "w-full border rounded px-3 py-2",
                        onchange: move |event| template_id.set(event.value().parse().ok()),
                        option { value: "", selected: template_id.read().is_none(), "No template" }
                        for template in templates.iter() {
                            option {
                                key: "{template.id}",
                                value: "{template.id}",
                                selected: *template_id.read() == Some(template.id),
                                "{template.name}"
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 rounded bg-gray-900 text-white hover:bg-gray-800 disabled:opacity-50",
                        disabled: title.read().trim().is_empty(),
                        "Create {noun}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use sitesmith_client::ApiClient;
    use sitesmith_engine::models::EntryStatus;
    use sitesmith_engine::TemplateConfig;

    #[component]
    fn Harness(can_edit: bool) -> Element {
        use_context_provider(|| {
            Stores::new(ApiClient::with_client("http://localhost:1", reqwest::Client::new()))
        });
        rsx! {
            EntrySection {
                kind: EntryKind::Page,
                site_id: 1,
                entries: vec![EntrySummary {
                    id: 4,
                    title: "About".to_string(),
                    slug: "about".to_string(),
                    status: EntryStatus::Draft,
                }],
                templates: vec![Template::new(9, "Landing", TemplateConfig::default())],
                can_edit,
                on_navigate: move |_| {},
            }
        }
    }

    fn render_section(can_edit: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { can_edit });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_admin_sees_entry_actions_and_create_form() {
        let html = render_section(true);

        assert!(html.contains("Pages"));
        assert!(html.contains("About"));
        assert!(html.contains("/about · draft"));
        assert!(html.contains("Edit"));
        assert!(html.contains("Delete"));
        assert!(html.contains("Create page"));
        assert!(html.contains("Landing"));
    }

    #[test]
    fn test_visitor_only_previews() {
        let html = render_section(false);

        assert!(html.contains("Preview"));
        assert!(!html.contains("Delete"));
        assert!(!html.contains("Create page"));
    }
}
