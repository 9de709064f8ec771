//! Render side of the block registry.
//!
//! [`view`] turns a block plus the active template into a [`BlockView`]: the
//! resolved classes and defaulted field values a front end needs to draw it.
//! Unknown block types have no view.

use crate::content::props::{
    Align, ButtonProps, ButtonVariant, CodeProps, HeadingProps, HeroProps, SectionProps,
    TextProps,
};
use crate::content::{Block, BlockType, Props};
use crate::template::{Template, resolve_heading_class, resolve_style_class, style_override};

/// Fallback button style when the template has no button override.
pub const BUTTON_PRIMARY_CLASS: &str =
    "inline-flex items-center px-4 py-2 bg-gray-900 text-white rounded hover:bg-gray-800";
pub const BUTTON_SECONDARY_CLASS: &str =
    "inline-flex items-center px-4 py-2 border rounded hover:bg-gray-50";

/// Section container class when the template has no section override.
pub const SECTION_DEFAULT_CLASS: &str = "mb-6";

#[derive(Debug, Clone, PartialEq)]
pub enum BlockView {
    Hero(HeroView),
    Heading(HeadingView),
    Text(TextView),
    Quote(TextView),
    Code(CodeView),
    Button(ButtonView),
    Section(SectionView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub class: String,
    pub align: Align,
    pub title: String,
    pub subtitle: Option<String>,
}

impl HeroView {
    pub fn align_class(&self) -> &'static str {
        match self.align {
            Align::Center => "text-center",
            Align::Left => "text-left",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingView {
    /// Always within `1..=3`.
    pub level: u8,
    pub class: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    pub class: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeView {
    pub class: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub class: String,
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub class: String,
}

pub fn view(template: Option<&Template>, block: &Block) -> Option<BlockView> {
    render(template, &block.kind, &block.props)
}

pub fn render(template: Option<&Template>, kind: &BlockType, props: &Props) -> Option<BlockView> {
    let view = match kind {
        BlockType::Hero => BlockView::Hero(hero(template, props)),
        BlockType::Heading => BlockView::Heading(heading(template, props)),
        BlockType::Text => BlockView::Text(text(template, props)),
        BlockType::Quote => BlockView::Quote(quote(template, props)),
        BlockType::Code => BlockView::Code(code(template, props)),
        BlockType::Button => BlockView::Button(button(template, props)),
        BlockType::Section => BlockView::Section(section(template, props)),
        BlockType::Unknown(_) => return None,
    };
    Some(view)
}

pub fn hero(template: Option<&Template>, props: &Props) -> HeroView {
    let hero = HeroProps::from_props(props);
    HeroView {
        class: style_override(template, "hero").unwrap_or_default(),
        align: hero.align(),
        title: hero.title().to_string(),
        subtitle: hero.subtitle().map(str::to_string),
    }
}

pub fn heading(template: Option<&Template>, props: &Props) -> HeadingView {
    let heading = HeadingProps::from_props(props);
    HeadingView {
        level: heading.level(),
        class: resolve_heading_class(template, heading.requested_level()),
        text: heading.text().to_string(),
    }
}

pub fn text(template: Option<&Template>, props: &Props) -> TextView {
    TextView {
        class: resolve_style_class(template, "text", ""),
        text: TextProps::from_props(props).text().to_string(),
    }
}

pub fn quote(template: Option<&Template>, props: &Props) -> TextView {
    TextView {
        class: resolve_style_class(template, "quote", ""),
        text: TextProps::from_props(props).text().to_string(),
    }
}

pub fn code(template: Option<&Template>, props: &Props) -> CodeView {
    CodeView {
        class: resolve_style_class(template, "code", ""),
        code: CodeProps::from_props(props).code().to_string(),
    }
}

pub fn button(template: Option<&Template>, props: &Props) -> ButtonView {
    let button = ButtonProps::from_props(props);
    let class = style_override(template, "button")
        .filter(|class| !class.trim().is_empty())
        .unwrap_or_else(|| {
            match button.variant() {
                ButtonVariant::Primary => BUTTON_PRIMARY_CLASS,
                ButtonVariant::Secondary => BUTTON_SECONDARY_CLASS,
            }
            .to_string()
        });
    ButtonView {
        class,
        text: button.text().to_string(),
        href: button.href().to_string(),
    }
}

pub fn section(template: Option<&Template>, props: &Props) -> SectionView {
    let base = style_override(template, "section")
        .unwrap_or_else(|| SECTION_DEFAULT_CLASS.to_string());
    let section = SectionProps::from_props(props);
    let class = std::iter::once(base.as_str())
        .chain(section.classes())
        .collect::<Vec<_>>()
        .join(" ");
    SectionView { class }
}
