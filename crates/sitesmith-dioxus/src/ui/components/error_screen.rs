use dioxus::prelude::*;

/// Full-window error shown when the app cannot start (bad config file, no HTTP client).
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { class: "text-2xl font-semibold text-red-700", "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
        }
    }
}

/// Inline store error with a dismiss button.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div {
            class: "flex items-start justify-between gap-3 p-3 rounded border border-red-200 bg-red-50 text-red-800 text-sm",
            span { "{message}" }
            button {
                r#type: "button",
                class: "text-xs underline",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_title_and_message() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Configuration error".to_string(),
                message: "Could not read the config file".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Configuration error"));
        assert!(html.contains("Could not read the config file"));
        assert!(!html.contains("<pre"));
    }

    #[test]
    fn test_error_screen_renders_with_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Configuration error".to_string(),
                message: "Could not parse the config file".to_string(),
                details: Some("expected `=` at line 2".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("expected `=` at line 2"));
    }

    #[component]
    fn BannerHarness(message: String) -> Element {
        rsx! {
            ErrorBanner { message, on_dismiss: move |_| {} }
        }
    }

    #[test]
    fn test_error_banner_shows_message() {
        let mut dom = VirtualDom::new_with_props(
            BannerHarness,
            BannerHarnessProps {
                message: "Site not found".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Site not found"));
        assert!(html.contains("Dismiss"));
    }
}
