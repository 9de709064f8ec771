//! Edit side of the block registry.
//!
//! Each known block type describes its form as an [`EditorForm`]: a list of
//! controlled fields showing the current (defaulted) values. A change to one field
//! is turned into a complete replacement props object by [`apply`]; props are never
//! mutated in place.

use serde_json::Value;

use crate::content::props::{parse_level, text_field, with_field};
use crate::content::{BlockType, Props};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    TextArea { rows: u32, monospace: bool },
    Select { options: &'static [SelectOption] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// How raw form input is stored back into props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Text,
    Number,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Props key written by this field.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value_kind: FieldValue,
    pub placeholder: Option<&'static str>,
    /// Current value as shown in the control.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorForm {
    pub kind: BlockType,
    pub fields: Vec<FormField>,
}

impl EditorForm {
    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

const ALIGN_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "left", label: "left" },
    SelectOption { value: "center", label: "center" },
];

const LEVEL_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "1", label: "H1" },
    SelectOption { value: "2", label: "H2" },
    SelectOption { value: "3", label: "H3" },
];

const VARIANT_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "primary", label: "primary" },
    SelectOption { value: "secondary", label: "secondary" },
];

/// Form for a block type, `None` for unknown types.
pub fn form(kind: &BlockType, value: &Props) -> Option<EditorForm> {
    let fields = match kind {
        BlockType::Hero => hero(value),
        BlockType::Heading => heading(value),
        BlockType::Text => vec![text_area(value, "text", "Text", 6, "Write text...")],
        BlockType::Quote => vec![text_area(value, "text", "Quote", 4, "Quote...")],
        BlockType::Code => vec![FormField {
            kind: FieldKind::TextArea {
                rows: 8,
                monospace: true,
            },
            ..input(value, "code", "Code", Some("console.log('hello')"))
        }],
        BlockType::Button => button(value),
        BlockType::Section => section(value),
        BlockType::Unknown(_) => return None,
    };
    Some(EditorForm {
        kind: kind.clone(),
        fields,
    })
}

/// Replacement props after a field changed to `raw`.
///
/// Number fields that do not parse leave the props untouched and return `None`.
pub fn apply(value: &Props, field: &FormField, raw: &str) -> Option<Props> {
    let next = match field.value_kind {
        FieldValue::Text => Value::String(raw.to_string()),
        FieldValue::Number => Value::from(parse_level(&Value::String(raw.to_string()))?),
    };
    Some(with_field(value, field.key, next))
}

/// `{...value, text: ''}`, used by the quote editor's clear action.
pub fn clear_text(value: &Props) -> Props {
    with_field(value, "text", Value::String(String::new()))
}

fn hero(value: &Props) -> Vec<FormField> {
    vec![
        input(value, "title", "Title", None),
        input(value, "subtitle", "Subtitle", None),
        select(value, "align", "Align", ALIGN_OPTIONS, "left"),
    ]
}

fn heading(value: &Props) -> Vec<FormField> {
    let level = value
        .get("level")
        .filter(|v| !v.is_null())
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| "2".to_string());
    vec![
        FormField {
            value_kind: FieldValue::Number,
            value: level,
            ..select(value, "level", "Level", LEVEL_OPTIONS, "2")
        },
        input(value, "text", "Text", Some("Heading...")),
    ]
}

fn button(value: &Props) -> Vec<FormField> {
    vec![
        input(value, "text", "Text", Some("e.g. Read more")),
        input(value, "href", "Href", Some("e.g. /about or https://...")),
        select(value, "variant", "Variant", VARIANT_OPTIONS, "primary"),
    ]
}

fn section(value: &Props) -> Vec<FormField> {
    vec![
        input(value, "padding", "Padding", Some("e.g. py-6")),
        input(value, "background", "Background", Some("e.g. bg-gray-50")),
        input(value, "border", "Border", Some("e.g. border")),
        input(value, "rounded", "Rounded", Some("e.g. rounded")),
    ]
}

fn input(
    value: &Props,
    key: &'static str,
    label: &'static str,
    placeholder: Option<&'static str>,
) -> FormField {
    FormField {
        key,
        label,
        kind: FieldKind::Input,
        value_kind: FieldValue::Text,
        placeholder,
        value: text_field(value, key).unwrap_or_default(),
    }
}

fn text_area(
    value: &Props,
    key: &'static str,
    label: &'static str,
    rows: u32,
    placeholder: &'static str,
) -> FormField {
    FormField {
        kind: FieldKind::TextArea {
            rows,
            monospace: false,
        },
        ..input(value, key, label, Some(placeholder))
    }
}

fn select(
    value: &Props,
    key: &'static str,
    label: &'static str,
    options: &'static [SelectOption],
    default: &str,
) -> FormField {
    FormField {
        kind: FieldKind::Select { options },
        value: text_field(value, key).unwrap_or_else(|| default.to_string()),
        ..input(value, key, label, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn props(value: Value) -> Props {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_every_known_type_has_a_form() {
        for kind in BlockType::KNOWN {
            assert!(form(&kind, &Props::new()).is_some(), "no form for {kind}");
        }
        assert_eq!(form(&BlockType::from("image"), &Props::new()), None);
    }

    #[test]
    fn test_form_shows_defaulted_values() {
        let hero = form(&BlockType::Hero, &Props::new()).unwrap();
        assert_eq!(hero.field("title").unwrap().value, "");
        assert_eq!(hero.field("align").unwrap().value, "left");

        let heading = form(&BlockType::Heading, &props(json!({"level": 3}))).unwrap();
        assert_eq!(heading.field("level").unwrap().value, "3");

        let button = form(&BlockType::Button, &Props::new()).unwrap();
        assert_eq!(button.field("variant").unwrap().value, "primary");
        assert_eq!(button.field("href").unwrap().value, "");
    }

    #[test]
    fn test_apply_emits_full_replacement() {
        let value = props(json!({"title": "Old", "subtitle": "Keep", "custom": true}));
        let hero = form(&BlockType::Hero, &value).unwrap();

        let next = apply(&value, hero.field("title").unwrap(), "New").unwrap();

        assert_eq!(
            next,
            props(json!({"title": "New", "subtitle": "Keep", "custom": true}))
        );
        assert_eq!(value["title"], json!("Old"));
    }

    #[test]
    fn test_heading_level_is_coerced_to_number() {
        let value = props(json!({"text": "Hi"}));
        let heading = form(&BlockType::Heading, &value).unwrap();
        let level = heading.field("level").unwrap();

        let next = apply(&value, level, "3").unwrap();
        assert_eq!(next["level"], json!(3));
        assert!(next["level"].is_number());

        assert_eq!(apply(&value, level, "abc"), None);
    }

    #[test]
    fn test_clear_text() {
        let value = props(json!({"text": "X", "author": "A"}));
        assert_eq!(clear_text(&value), props(json!({"text": "", "author": "A"})));
    }
}
