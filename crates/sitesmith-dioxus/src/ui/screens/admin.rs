use dioxus::prelude::*;
use sitesmith_client::{AdminStore, AuthStore, Stores};
use sitesmith_engine::models::{Overview, Role, User, UserQuery, UserSort};

use crate::ui::components::ErrorBanner;
use crate::ui::hooks::use_store;

const SORTS: [(UserSort, &str); 4] = [
    (UserSort::CreatedDesc, "Newest first"),
    (UserSort::CreatedAsc, "Oldest first"),
    (UserSort::NameAsc, "Name A-Z"),
    (UserSort::NameDesc, "Name Z-A"),
];

fn parse_role(value: &str) -> Option<Role> {
    match value {
        "admin" => Some(Role::Admin),
        "user" => Some(Role::User),
        _ => None,
    }
}

fn parse_sort(value: &str) -> UserSort {
    SORTS
        .iter()
        .map(|(sort, _)| *sort)
        .find(|sort| sort.as_str() == value)
        .unwrap_or_default()
}

/// Dashboard totals and user management. Admins only.
#[component]
pub fn AdminScreen() -> Element {
    let stores = use_context::<Stores>();
    let auth = use_store(stores.auth.clone(), AuthStore::store);
    let admin = use_store(stores.admin.clone(), AdminStore::store);

    let mut search = use_signal(String::new);
    let mut role = use_signal(|| None::<Role>);
    let mut sort = use_signal(UserSort::default);

    let loader = stores.admin.clone();
    use_future(move || {
        let admin = loader.clone();
        async move {
            let _ = admin.fetch_overview().await;
            let _ = admin.fetch_users(&UserQuery::default()).await;
        }
    });

    if !auth.read().is_admin() {
        return rsx! {
            div { class: "text-lg font-semibold", "Forbidden" }
        };
    }

    let state = admin.read().clone();

    let apply = {
        let admin = stores.admin.clone();
        move |event: FormEvent| {
            event.prevent_default();
            let query = UserQuery {
                q: Some(search.read().clone()),
                role: *role.read(),
                sort: Some(*sort.read()),
            };
            let admin = admin.clone();
            spawn(async move {
                let _ = admin.fetch_users(&query).await;
            });
        }
    };

    rsx! {
        div {
            class: "space-y-6",
            h1 { class: "text-2xl font-semibold", "Admin" }
            if let Some(message) = state.status.error.clone() {
                ErrorBanner {
                    message,
                    on_dismiss: {
                        let admin = stores.admin.clone();
                        move |_| admin.store().clear_error()
                    },
                }
            }
            if let Some(overview) = state.overview.clone() {
                OverviewPanel { overview }
            } else if state.status.loading {
                div { class: "text-sm text-gray-500", "Loading..." }
            }
            div {
                class: "rounded border p-4 space-y-3",
                div { class: "text-sm font-medium", "Users" }
                form {
                    class: "flex flex-wrap items-center gap-2",
                    onsubmit: apply,
                    input {
                        class: "border rounded px-3 py-2",
                        placeholder: "Search name or email",
                        value: "{search}",
                        oninput: move |event| search.set(event.value()),
                    }
                    select {
                        class: "border rounded px-3 py-2",
                        onchange: move |event| role.set(parse_role(&event.value())),
                        option { value: "", selected: role.read().is_none(), "All roles" }
                        option { value: "admin", selected: *role.read() == Some(Role::Admin), "admin" }
                        option { value: "user", selected: *role.read() == Some(Role::User), "user" }
                    }
                    select {
                        class: "border rounded px-3 py-2",
                        onchange: move |event| sort.set(parse_sort(&event.value())),
                        for (option_sort, label) in SORTS {
                            option {
                                value: option_sort.as_str(),
                                selected: *sort.read() == option_sort,
                                "{label}"
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "px-3 py-2 rounded border hover:bg-gray-50",
                        "Apply"
                    }
                }
                UserTable { users: state.users.clone() }
            }
        }
    }
}

#[component]
fn OverviewPanel(overview: Overview) -> Element {
    let totals = overview.totals;
    let ratio = overview
        .published_page_ratio()
        .map(|ratio| format!("{:.0}%", ratio * 100.0))
        .unwrap_or_else(|| "n/a".to_string());

    rsx! {
        div {
            class: "grid grid-cols-2 md:grid-cols-5 gap-3",
            StatCard { label: "Users", value: totals.users.to_string() }
            StatCard { label: "Sites", value: totals.sites.to_string() }
            StatCard { label: "Pages", value: totals.pages.to_string() }
            StatCard { label: "Posts", value: totals.posts.to_string() }
            StatCard { label: "Pages published", value: ratio }
        }
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-3",
            CountList {
                title: "Users by role",
                rows: overview.users_by_role.iter().map(|r| (r.role.to_string(), r.count)).collect::<Vec<_>>(),
            }
            CountList {
                title: "Pages by status",
                rows: overview.pages_by_status.iter().map(|s| (s.status.to_string(), s.count)).collect::<Vec<_>>(),
            }
            CountList {
                title: "Posts by status",
                rows: overview.posts_by_status.iter().map(|s| (s.status.to_string(), s.count)).collect::<Vec<_>>(),
            }
        }
        div {
            class: "rounded border p-4 space-y-2",
            div { class: "text-sm font-medium", "Top sites" }
            if overview.top_sites.is_empty() {
                div { class: "text-sm text-gray-500", "No sites yet." }
            } else {
                table {
                    class: "w-full text-sm",
                    thead {
                        tr {
                            th { class: "text-left", "Site" }
                            th { class: "text-right", "Pages" }
                            th { class: "text-right", "Posts" }
                            th { class: "text-right", "Total" }
                        }
                    }
                    tbody {
                        for site in overview.top_sites.iter() {
                            tr {
                                key: "{site.site_id}",
                                td { "{site.name} ", span { class: "text-gray-500", "/{site.slug}" } }
                                td { class: "text-right", "{site.pages_count}" }
                                td { class: "text-right", "{site.posts_count}" }
                                td { class: "text-right", "{site.total}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "rounded border p-3",
            div { class: "text-xs text-gray-500", "{label}" }
            div { class: "text-2xl font-semibold", "{value}" }
        }
    }
}

#[component]
fn CountList(title: &'static str, rows: Vec<(String, u64)>) -> Element {
    rsx! {
        div {
            class: "rounded border p-3 space-y-1",
            div { class: "text-sm font-medium", "{title}" }
            for (name, count) in rows {
                div {
                    key: "{name}",
                    class: "flex justify-between text-sm",
                    span { "{name}" }
                    span { "{count}" }
                }
            }
        }
    }
}

#[component]
fn UserTable(users: Vec<User>) -> Element {
    let stores = use_context::<Stores>();

    if users.is_empty() {
        return rsx! {
            div { class: "text-sm text-gray-500", "No users match." }
        };
    }

    rsx! {
        table {
            class: "w-full text-sm",
            thead {
                tr {
                    th { class: "text-left", "Name" }
                    th { class: "text-left", "Email" }
                    th { class: "text-left", "Role" }
                }
            }
            tbody {
                for user in users {
                    tr {
                        key: "{user.id}",
                        td { "{user.name}" }
                        td { "{user.email}" }
                        td {
                            select {
                                class: "border rounded px-2 py-1",
                                onchange: {
                                    let admin = stores.admin.clone();
                                    let user_id = user.id;
                                    move |event: FormEvent| {
                                        let Some(role) = parse_role(&event.value()) else {
                                            return;
                                        };
                                        let admin = admin.clone();
                                        spawn(async move {
                                            if let Err(err) = admin.set_user_role(user_id, role).await {
                                                log::warn!("role change for user {user_id} failed: {err}");
                                            }
                                        });
                                    }
                                },
                                option { value: "admin", selected: user.role == Role::Admin, "admin" }
                                option { value: "user", selected: user.role == Role::User, "user" }
                            }
                        }
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
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_role_and_sort() {
        assert_eq!(parse_role("admin"), Some(Role::Admin));
        assert_eq!(parse_role(""), None);
        assert_eq!(parse_sort("name_desc"), UserSort::NameDesc);
        assert_eq!(parse_sort("bogus"), UserSort::CreatedDesc);
    }

    #[test]
    fn test_overview_panel() {
        let overview: Overview = serde_json::from_value(json!({
            "totals": {"users": 3, "sites": 2, "pages": 4, "posts": 1},
            "usersByRole": [{"role": "admin", "count": 1}, {"role": "user", "count": 2}],
            "pagesByStatus": [{"status": "draft", "count": 1}, {"status": "published", "count": 3}],
            "postsByStatus": [],
            "topSites": [{"siteId": 1, "name": "Acme", "slug": "acme", "pagesCount": 3, "postsCount": 1, "total": 4}]
        }))
        .unwrap();

        let mut dom = VirtualDom::new_with_props(OverviewPanel, OverviewPanelProps { overview });
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Users by role"));
        assert!(html.contains("75%"));
        assert!(html.contains("Acme"));
        assert!(html.contains("/acme"));
    }
}
