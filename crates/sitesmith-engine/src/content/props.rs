//! Typed views over the open `props` mapping of each block type.
//!
//! Props are never validated. A view reads what it understands and falls back to
//! the field's default for anything missing, empty or of the wrong shape, so a
//! partial or malformed props object is still a legal, storable state.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Props;

/// Fallback heading level when none (or an unreadable one) is stored.
pub const DEFAULT_HEADING_LEVEL: i64 = 2;
pub const MIN_HEADING_LEVEL: u8 = 1;
pub const MAX_HEADING_LEVEL: u8 = 3;

/// Stringify a value the way a truthiness check would let it through.
///
/// `null`, `false`, `0`, `NaN` and `""` yield `None`; other non-string values are
/// stringified.
pub fn truthy_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 || f.is_nan() => None,
            _ => Some(n.to_string()),
        },
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Truthy field value as a string, `None` when absent or falsy.
pub fn text_field(props: &Props, key: &str) -> Option<String> {
    props.get(key).and_then(truthy_string)
}

/// Copy of `value` with exactly one field replaced. Other keys, including ones
/// this crate does not know about, keep their position and value.
pub fn with_field(value: &Props, key: &str, field: Value) -> Props {
    let mut next = value.clone();
    next.insert(key.to_string(), field);
    next
}

/// Read a heading level from a number or a numeric string.
pub fn parse_level(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

/// Deserialize any JSON value, keeping objects and replacing everything else with
/// an empty mapping.
pub(crate) fn object_or_empty<'de, D>(deserializer: D) -> Result<Props, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Props::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroProps {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub align: Option<String>,
}

impl HeroProps {
    pub fn from_props(props: &Props) -> Self {
        Self {
            title: text_field(props, "title"),
            subtitle: text_field(props, "subtitle"),
            align: text_field(props, "align"),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// `None` when the subtitle is missing or empty.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn align(&self) -> Align {
        match self.align.as_deref() {
            Some("center") => Align::Center,
            _ => Align::Left,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadingProps {
    pub text: Option<String>,
    pub level: Option<i64>,
}

impl HeadingProps {
    pub fn from_props(props: &Props) -> Self {
        Self {
            text: text_field(props, "text"),
            level: props.get("level").and_then(parse_level),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Stored level clamped into `1..=3`, for the tag.
    pub fn level(&self) -> u8 {
        self.requested_level()
            .clamp(MIN_HEADING_LEVEL.into(), MAX_HEADING_LEVEL.into()) as u8
    }

    /// Stored level with the default applied but not clamped. Style lookups key
    /// on this, so `h4` styles never leak onto an `h3`.
    pub fn requested_level(&self) -> i64 {
        self.level.unwrap_or(DEFAULT_HEADING_LEVEL)
    }
}

/// Shared view for the single-field `text` and `quote` blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProps {
    pub text: Option<String>,
}

impl TextProps {
    pub fn from_props(props: &Props) -> Self {
        Self {
            text: text_field(props, "text"),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeProps {
    pub code: Option<String>,
}

impl CodeProps {
    pub fn from_props(props: &Props) -> Self {
        Self {
            code: text_field(props, "code"),
        }
    }

    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonProps {
    pub text: Option<String>,
    pub href: Option<String>,
    pub variant: Option<String>,
}

impl ButtonProps {
    pub fn from_props(props: &Props) -> Self {
        Self {
            text: text_field(props, "text"),
            href: text_field(props, "href"),
            variant: text_field(props, "variant"),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("Button")
    }

    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or("#")
    }

    /// Only an explicit (or missing) `primary` selects the primary style.
    pub fn variant(&self) -> ButtonVariant {
        match self.variant.as_deref() {
            None | Some("primary") => ButtonVariant::Primary,
            Some(_) => ButtonVariant::Secondary,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionProps {
    pub padding: Option<String>,
    pub background: Option<String>,
    pub rounded: Option<String>,
    pub border: Option<String>,
}

impl SectionProps {
    pub fn from_props(props: &Props) -> Self {
        Self {
            padding: text_field(props, "padding"),
            background: text_field(props, "background"),
            rounded: text_field(props, "rounded"),
            border: text_field(props, "border"),
        }
    }

    /// Non-empty style classes in `padding, background, rounded, border` order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        [&self.padding, &self.background, &self.rounded, &self.border]
            .into_iter()
            .filter_map(|c| c.as_deref())
    }
}
