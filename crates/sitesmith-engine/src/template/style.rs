//! Style and layout class lookup.
//!
//! All functions are total: a missing template or missing configuration yields
//! the fallback (or an empty string), never an error.

use serde_json::Value;

use super::Template;
use crate::content::props::truthy_string;

/// `layout[key]` when truthy, otherwise `fallback`.
pub fn resolve_layout_class(template: Option<&Template>, key: &str, fallback: &str) -> String {
    template
        .and_then(|t| t.config.layout.get(key))
        .and_then(truthy_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// `styles[kind]` only when it is a string (even an empty one), otherwise
/// `fallback`. Guards against the heading entry, which may be a mapping.
pub fn resolve_style_class(template: Option<&Template>, kind: &str, fallback: &str) -> String {
    match template.and_then(|t| t.config.styles.get(kind)) {
        Some(Value::String(class)) => class.clone(),
        _ => fallback.to_string(),
    }
}

/// Class for a heading of the given level.
///
/// A string entry applies to every level; a mapping is looked up by `h{level}`;
/// anything else resolves to `""`.
pub fn resolve_heading_class(template: Option<&Template>, level: i64) -> String {
    let Some(entry) = template.and_then(|t| t.config.styles.get("heading")) else {
        return String::new();
    };
    match entry {
        Value::String(class) => class.clone(),
        Value::Object(levels) => match levels.get(&format!("h{level}")) {
            Some(Value::String(class)) => class.clone(),
            _ => String::new(),
        },
        _ => String::new(),
    }
}

/// Unfiltered truthy `styles[kind]`, stringified when it is not a string.
pub fn style_override(template: Option<&Template>, kind: &str) -> Option<String> {
    template
        .and_then(|t| t.config.styles.get(kind))
        .and_then(truthy_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateConfig;
    use rstest::rstest;
    use serde_json::json;

    fn template_with(config: Value) -> Template {
        let config: TemplateConfig = serde_json::from_value(config).unwrap();
        Template::new(1, "Test", config)
    }

    #[test]
    fn test_layout_class_uses_fallback_when_falsy() {
        let template = template_with(json!({"layout": {"container": "wrap", "header": ""}}));

        assert_eq!(
            resolve_layout_class(Some(&template), "container", "x"),
            "wrap"
        );
        assert_eq!(resolve_layout_class(Some(&template), "header", "mb-8"), "mb-8");
        assert_eq!(resolve_layout_class(Some(&template), "title", "t"), "t");
        assert_eq!(resolve_layout_class(None, "container", "c"), "c");
    }

    #[test]
    fn test_style_class_only_accepts_strings() {
        let template = template_with(json!({"styles": {
            "text": "leading-7",
            "quote": "",
            "heading": {"h1": "big"},
            "code": 3
        }}));

        assert_eq!(resolve_style_class(Some(&template), "text", "f"), "leading-7");
        assert_eq!(resolve_style_class(Some(&template), "quote", "f"), "");
        assert_eq!(resolve_style_class(Some(&template), "heading", "f"), "f");
        assert_eq!(resolve_style_class(Some(&template), "code", "f"), "f");
        assert_eq!(resolve_style_class(None, "text", ""), "");
    }

    #[rstest]
    #[case(json!({}), 1, "")]
    #[case(json!({"styles": {"heading": "font-bold"}}), 1, "font-bold")]
    #[case(json!({"styles": {"heading": "font-bold"}}), 3, "font-bold")]
    #[case(json!({"styles": {"heading": {"h1": "a", "h2": "b"}}}), 2, "b")]
    #[case(json!({"styles": {"heading": {"h1": "a"}}}), 3, "")]
    #[case(json!({"styles": {"heading": {"h3": "c"}}}), 4, "")]
    #[case(json!({"styles": {"heading": {"h4": "d"}}}), 4, "d")]
    #[case(json!({"styles": {"heading": ""}}), 2, "")]
    #[case(json!({"styles": {"heading": ["h1"]}}), 1, "")]
    fn test_heading_class(#[case] config: Value, #[case] level: i64, #[case] expected: &str) {
        let template = template_with(config);
        assert_eq!(resolve_heading_class(Some(&template), level), expected);
    }

    #[test]
    fn test_heading_class_without_template() {
        assert_eq!(resolve_heading_class(None, 2), "");
    }

    #[test]
    fn test_style_override_is_unfiltered_but_truthy() {
        let template = template_with(json!({"styles": {"hero": "bg-hero", "section": "", "button": 1}}));

        assert_eq!(style_override(Some(&template), "hero").as_deref(), Some("bg-hero"));
        assert_eq!(style_override(Some(&template), "section"), None);
        assert_eq!(style_override(Some(&template), "button").as_deref(), Some("1"));
        assert_eq!(style_override(None, "hero"), None);
    }
}
