pub mod app;
pub mod components;
pub mod context;
pub mod hooks;
pub mod screens;

pub use app::App;
pub use context::Enrichment;
