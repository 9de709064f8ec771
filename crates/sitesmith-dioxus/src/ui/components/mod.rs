pub mod block_editor;
pub mod block_palette;
pub mod block_renderer;
pub mod builder_canvas;
pub mod button_block;
pub mod code_block;
pub mod content_preview;
pub mod error_screen;
pub mod form_editor;
pub mod heading_block;
pub mod hero_block;
pub mod quote_editor;
pub mod section_block;
pub mod text_block;

pub use block_editor::BlockEditor;
pub use block_palette::BlockPalette;
pub use block_renderer::BlockRenderer;
pub use builder_canvas::BuilderCanvas;
pub use button_block::ButtonBlock;
pub use code_block::CodeBlock;
pub use content_preview::{ContentPreview, PreviewEntry};
pub use error_screen::{ErrorBanner, ErrorScreen};
pub use form_editor::FormEditor;
pub use heading_block::HeadingBlock;
pub use hero_block::HeroBlock;
pub use quote_editor::QuoteEditor;
pub use section_block::SectionBlock;
pub use text_block::{QuoteBlock, TextBlock};
