//! Checklist report rendering
//!
//! Turns a [`Checklist`](crate::checklist::Checklist) into text or JSON on
//! any `std::io::Write` sink. Rendering is a single deterministic pass; the
//! only possible errors are I/O errors on the sink.

pub mod json;
pub mod text;

pub use json::render_json;
pub use text::ChecklistRenderer;

/// Which optional item fields the text report includes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DetailLevel {
    /// Command, command list and estimated time only
    #[default]
    Summary,
    /// Every populated field, plus success criteria and the time breakdown
    Full,
}

/// Options for the text renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fields to include per item
    pub details: DetailLevel,
    /// Emit ANSI styling
    pub color: bool,
}
