pub mod canvas;
pub mod content;
pub mod editor;
pub mod enrichment;
pub mod models;
pub mod request;
pub mod template;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use canvas::{Canvas, CanvasCmd, Direction, IdSource, Patch, RandomIds, SequentialIds};
pub use content::{Block, BlockId, BlockType, CONTENT_VERSION, ContentDocument, Props};
pub use request::{RequestToken, RequestTracker};
pub use template::{Template, TemplateConfig, TemplateKind};
pub use view::BlockView;
