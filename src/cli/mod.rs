//! CLI output formatting
//!
//! Human-readable terminal display for lint results.

pub mod display;

pub use display::render_lint_report;
pub use display::summary_line;
