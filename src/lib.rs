//! Shipcheck - deployment checklist renderer
//!
//! Holds a deployment checklist as a tree of phases and items and renders
//! it as a terminal report. Checklists come from TOML files or from the
//! builtin portfolio checklist.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod checklist;
pub mod cli;
pub mod lint;
pub mod render;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use checklist::{Checklist, Item, ItemDetails, Phase, Priority, Status};
pub use lint::{lint, Finding, LintReport, Severity};
pub use render::{render_json, ChecklistRenderer, DetailLevel, RenderOptions};
