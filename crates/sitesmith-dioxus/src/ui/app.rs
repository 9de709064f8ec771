use dioxus::prelude::*;
use sitesmith_client::{AuthStore, Stores};

use super::hooks::use_store;
use super::screens::{
    AdminScreen, EntryEditorScreen, EntryKind, LoginScreen, PreviewScreen, SiteScreen,
    SitesScreen,
};

const APP_CSS: &str = include_str!("../assets/sitesmith.css");

/// Which screen the main area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Sites,
    Site(i64),
    Edit(EntryKind, i64),
    Preview(EntryKind, i64),
    Admin,
}

#[component]
pub fn App() -> Element {
    let stores = use_context::<Stores>();
    let auth = use_store(stores.auth.clone(), AuthStore::store);

    let mut screen = use_signal(|| Screen::Sites);
    let mut restoring = use_signal(|| true);

    let session = stores.auth.clone();
    use_future(move || {
        let session = session.clone();
        async move {
            match session.me().await {
                Ok(Some(user)) => log::info!("restored session for {}", user.email),
                Ok(None) => log::info!("no active session"),
                Err(err) => log::debug!("session check dropped: {err}"),
            }
            restoring.set(false);
        }
    });

    let navigate = use_callback(move |next: Screen| screen.set(next));

    let state = auth.read().clone();
    let is_admin = state.is_admin();

    let logout = {
        let session = stores.auth.clone();
        move |_: MouseEvent| {
            let session = session.clone();
            spawn(async move {
                if let Err(err) = session.logout().await {
                    log::warn!("logout failed: {err}");
                }
                screen.set(Screen::Sites);
            });
        }
    };

    let body = if restoring() {
        rsx! { div { class: "text-sm text-gray-500", "Loading..." } }
    } else if state.user.is_none() {
        rsx! { LoginScreen {} }
    } else {
        match screen() {
            Screen::Sites => rsx! { SitesScreen { on_navigate: navigate } },
            Screen::Site(site_id) => rsx! {
                SiteScreen { key: "{site_id}", site_id, on_navigate: navigate }
            },
            Screen::Edit(kind, id) => rsx! {
                EntryEditorScreen { key: "{kind:?}-{id}", kind, id, on_navigate: navigate }
            },
            Screen::Preview(kind, id) => rsx! {
                PreviewScreen { key: "{kind:?}-{id}", kind, id, on_navigate: navigate }
            },
            Screen::Admin => rsx! { AdminScreen {} },
        }
    };

    rsx! {
        style { {APP_CSS} }
        div {
            class: "app-container",
            nav {
                class: "navbar",
                span { class: "brand", "sitesmith" }
                if let Some(user) = state.user.as_ref() {
                    button {
                        r#type: "button",
                        class: "nav-link",
                        onclick: move |_| screen.set(Screen::Sites),
                        "Sites"
                    }
                    if is_admin {
                        button {
                            r#type: "button",
                            class: "nav-link",
                            onclick: move |_| screen.set(Screen::Admin),
                            "Admin"
                        }
                    }
                    span { class: "nav-user", "{user.name} ({user.role})" }
                    button {
                        r#type: "button",
                        class: "nav-link",
                        onclick: logout,
                        "Logout"
                    }
                }
            }
            main { class: "main-content", {body} }
        }
    }
}
