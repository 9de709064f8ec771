use dioxus::prelude::*;
use sitesmith_engine::editor::{self, FieldKind, FormField};
use sitesmith_engine::{BlockType, Props};

/// Controlled form for one block's props. Every change emits a full replacement
/// props object; nothing is edited in place.
#[component]
pub fn FormEditor(kind: BlockType, value: Props, on_change: Callback<Props>) -> Element {
    let Some(form) = editor::form(&kind, &value) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "space-y-3",
            for field in form.fields {
                FieldControl {
                    key: "{field.key}",
                    field: field.clone(),
                    value: value.clone(),
                    on_change,
                }
            }
        }
    }
}

#[component]
fn FieldControl(field: FormField, value: Props, on_change: Callback<Props>) -> Element {
    let on_input = {
        let field = field.clone();
        move |event: FormEvent| {
            // Non-numeric level input leaves the props untouched
            if let Some(next) = editor::apply(&value, &field, &event.value()) {
                on_change.call(next);
            }
        }
    };

    let control = match field.kind {
        FieldKind::Input => rsx! {
            input {
                class: "w-full border rounded px-3 py-2 text-sm",
                value: "{field.value}",
                placeholder: field.placeholder,
                oninput: on_input,
            }
        },
        FieldKind::TextArea { rows, monospace } => rsx! {
            textarea {
                class: if monospace {
                    "w-full border rounded px-3 py-2 text-sm font-mono"
                } else {
                    "w-full border rounded px-3 py-2 text-sm"
                },
                rows: "{rows}",
                value: "{field.value}",
                placeholder: field.placeholder,
                oninput: on_input,
            }
        },
        FieldKind::Select { options } => rsx! {
            select {
                class: "w-full border rounded px-3 py-2 text-sm bg-white",
                value: "{field.value}",
                onchange: on_input,
                for choice in options.iter() {
                    option {
                        key: "{choice.value}",
                        value: choice.value,
                        selected: choice.value == field.value,
                        "{choice.label}"
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "space-y-1",
            label { class: "text-xs text-gray-600", "{field.label}" }
            {control}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use serde_json::{Value, json};

    // Callbacks need a runtime, so they are created inside a component
    #[component]
    fn Harness(kind: BlockType, value: Value) -> Element {
        let props: Props = serde_json::from_value(value).unwrap_or_default();
        rsx! {
            FormEditor { kind, value: props, on_change: move |_| {} }
        }
    }

    fn render_form(kind: &str, value: Value) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                kind: BlockType::from(kind),
                value,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_hero_form_shows_current_values() {
        let html = render_form("hero", json!({"title": "Welcome", "align": "center"}));

        assert!(html.contains("Title"));
        assert!(html.contains("Subtitle"));
        assert!(html.contains(r#"value="Welcome""#));
        assert!(html.contains(">center</option>"));
    }

    #[test]
    fn test_code_form_is_monospace() {
        let html = render_form("code", json!({"code": "fn main() {}"}));

        assert!(html.contains("<textarea"));
        assert!(html.contains("font-mono"));
        assert!(html.contains(r#"rows="8""#));
    }

    #[test]
    fn test_unknown_kind_has_no_form() {
        assert_eq!(render_form("gallery", json!({})), "");
    }
}
