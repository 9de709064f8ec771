use dioxus::prelude::*;
use sitesmith_client::{AuthStore, Stores};
use sitesmith_engine::models::{Credentials, Registration};

use crate::ui::components::ErrorBanner;
use crate::ui::hooks::use_store;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Login,
    Register,
}

/// Sign-in form, switchable to registration.
#[component]
pub fn LoginScreen() -> Element {
    let stores = use_context::<Stores>();
    let auth = use_store(stores.auth.clone(), AuthStore::store);

    let mut mode = use_signal(|| Mode::Login);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let state = auth.read().clone();
    let current_mode = *mode.read();
    let ready = !email.read().trim().is_empty()
        && !password.read().is_empty()
        && (current_mode == Mode::Login || !name.read().trim().is_empty());

    let submit = {
        let auth_store = stores.auth.clone();
        move |event: FormEvent| {
            event.prevent_default();
            let auth_store = auth_store.clone();
            let email = email.read().trim().to_string();
            let password = password.read().clone();
            let name = name.read().trim().to_string();
            spawn(async move {
                let result = match current_mode {
                    Mode::Login => auth_store.login(&Credentials { email, password }).await,
                    Mode::Register => {
                        auth_store
                            .register(&Registration {
                                name,
                                email,
                                password,
                            })
                            .await
                    }
                };
                if let Err(err) = result {
                    log::warn!("sign-in failed: {err}");
                }
            });
        }
    };

    rsx! {
        div {
            class: "max-w-sm mx-auto space-y-4",
            h1 {
                class: "text-2xl font-semibold",
                if current_mode == Mode::Login { "Login" } else { "Register" }
            }
            if let Some(message) = state.status.error.clone() {
                ErrorBanner {
                    message,
                    on_dismiss: {
                        let auth_store = stores.auth.clone();
                        move |_| auth_store.store().clear_error()
                    },
                }
            }
            form {
                class: "space-y-3 rounded border p-4",
                onsubmit: submit,
                if current_mode == Mode::Register {
                    div {
                        class: "space-y-1",
                        label { class: "text-sm font-medium", "Name" }
                        input {
                            class: "w-full border rounded px-3 py-2",
                            value: "{name}",
                            oninput: move |event| name.set(event.value()),
                        }
                    }
                }
                div {
                    class: "space-y-1",
                    label { class: "text-sm font-medium", "Email" }
                    input {
                        class: "w-full border rounded px-3 py-2",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                }
                div {
                    class: "space-y-1",
                    label { class: "text-sm font-medium", "Password" }
                    input {
                        class: "w-full border rounded px-3 py-2",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |event| password.set(event.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "w-full px-4 py-2 rounded bg-gray-900 text-white hover:bg-gray-800 disabled:opacity-50",
                    disabled: state.status.loading || !ready,
                    if state.status.loading { "Please wait..." } else if current_mode == Mode::Login { "Login" } else { "Create account" }
                }
            }
            button {
                r#type: "button",
                class: "text-sm underline",
                onclick: move |_| {
                    mode.set(match current_mode {
                        Mode::Login => Mode::Register,
                        Mode::Register => Mode::Login,
                    })
                },
                if current_mode == Mode::Login { "Need an account? Register" } else { "Have an account? Login" }
            }
        }
    }
}
