//! Plain-text checklist report
//!
//! Layout: a title banner with status and timestamp, one banner per phase
//! followed by its items, then the trailing note sections and the total
//! time estimate. Sections with nothing to show are left out.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use super::{DetailLevel, RenderOptions};
use crate::checklist::{Checklist, Item, Phase, Priority};

/// Width of the `=` banner lines
pub const BANNER_WIDTH: usize = 80;

/// Appended to the task line of critical items
pub const CRITICAL_MARKER: &str = " ⚠️ CRITICAL";

/// Indent for item detail lines
const INDENT: &str = "   ";

/// Renders a [`Checklist`] as a human-readable report
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecklistRenderer {
    options: RenderOptions,
}

impl ChecklistRenderer {
    /// Create a renderer with the given options
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the full report into `out`
    pub fn render<W: Write>(&self, checklist: &Checklist, out: &mut W) -> io::Result<()> {
        self.write_header(checklist, out)?;

        for phase in &checklist.phases {
            self.write_phase(phase, out)?;
        }

        self.write_section(out, "OPTIMIZATIONS COMPLETED", &checklist.optimizations_completed)?;
        self.write_section(out, "CRITICAL NOTES", &checklist.critical_notes)?;
        if self.full() {
            self.write_section(out, "SUCCESS CRITERIA", &checklist.success_criteria)?;
        }

        self.write_time_estimate(checklist, out)
    }

    /// Render the full report into a `String`
    pub fn render_to_string(&self, checklist: &Checklist) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(checklist, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn full(&self) -> bool {
        self.options.details == DetailLevel::Full
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.options.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn banner(&self) -> String {
        self.paint(&"=".repeat(BANNER_WIDTH), |s| s.cyan())
    }

    fn write_header<W: Write>(&self, checklist: &Checklist, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.banner())?;
        writeln!(out, "{}", self.paint(&checklist.title, |s| s.bold().cyan()))?;
        writeln!(out, "{}", self.banner())?;
        writeln!(out)?;
        writeln!(out, "Status: {}", checklist.status)?;
        writeln!(out, "Generated: {}", checklist.generated)?;
        writeln!(out)
    }

    fn write_phase<W: Write>(&self, phase: &Phase, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.banner())?;
        writeln!(
            out,
            "{}",
            self.paint(&format!("PHASE: {}", phase.title), |s| s.bold())
        )?;
        writeln!(out, "Priority: {}", self.priority_label(phase.priority))?;
        writeln!(out, "{}", self.banner())?;

        for item in &phase.items {
            self.write_item(item, out)?;
        }
        Ok(())
    }

    fn priority_label(&self, priority: Option<Priority>) -> String {
        match priority {
            None => "N/A".to_string(),
            Some(p @ Priority::Critical) => self.paint(p.as_str(), |s| s.red().bold()),
            Some(p @ Priority::High) => self.paint(p.as_str(), |s| s.yellow()),
            Some(p) => p.as_str().to_string(),
        }
    }

    /// The `[ ] 1. Task ⚠️ CRITICAL` line for an item
    fn item_line(&self, item: &Item) -> String {
        let glyph = if item.is_pending() {
            item.glyph().to_string()
        } else {
            self.paint(item.glyph(), |s| s.green())
        };
        let marker = if item.critical {
            self.paint(CRITICAL_MARKER, |s| s.red().bold())
        } else {
            String::new()
        };
        format!("{glyph}{}. {}{marker}", item.id_label(), item.task)
    }

    fn write_item<W: Write>(&self, item: &Item, out: &mut W) -> io::Result<()> {
        let details = &item.details;

        writeln!(out)?;
        writeln!(out, "{}", self.item_line(item))?;

        if let Some(command) = &details.command {
            writeln!(out, "{INDENT}Command: {command}")?;
        }
        for command in &details.commands {
            writeln!(out, "{INDENT}{} {command}", self.paint("$", |s| s.dimmed()))?;
        }

        if self.full() {
            if let Some(result) = &details.expected_result {
                writeln!(out, "{INDENT}Expected: {result}")?;
            }
            for (n, step) in details.steps.iter().enumerate() {
                writeln!(out, "{INDENT}{}. {step}", n + 1)?;
            }
            for (key, value) in details.settings.iter() {
                writeln!(out, "{INDENT}{key}: {value}")?;
            }
            for (key, value) in details.variables.iter() {
                writeln!(out, "{INDENT}{key}={value}")?;
            }
            for check in &details.checks {
                writeln!(out, "{INDENT}{} {check}", self.paint("✔", |s| s.green()))?;
            }
            for tool in &details.tools {
                writeln!(out, "{INDENT}- {tool}")?;
            }
            if let Some(link) = &details.link {
                writeln!(out, "{INDENT}Link: {}", self.paint(link, |s| s.underline()))?;
            }
        }

        if let Some(time) = &details.expected_time {
            writeln!(out, "{INDENT}Estimated Time: {time}")?;
        }
        Ok(())
    }

    /// Banner-delimited heading followed by one line per entry.
    /// Nothing is written for an empty list.
    fn write_section<W: Write>(&self, out: &mut W, heading: &str, lines: &[String]) -> io::Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "{}", self.banner())?;
        writeln!(out, "{}", self.paint(heading, |s| s.bold().cyan()))?;
        writeln!(out, "{}", self.banner())?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn write_time_estimate<W: Write>(&self, checklist: &Checklist, out: &mut W) -> io::Result<()> {
        let estimate = &checklist.time_estimate;
        let show_breakdown = self.full() && !estimate.breakdown.is_empty();
        if estimate.total.is_none() && !show_breakdown {
            return Ok(());
        }

        let total = estimate.total.as_deref().unwrap_or("N/A");
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "{}", self.banner())?;
        writeln!(
            out,
            "{}",
            self.paint(&format!("ESTIMATED DEPLOYMENT TIME: {total}"), |s| {
                s.bold().cyan()
            })
        )?;
        writeln!(out, "{}", self.banner())?;
        if show_breakdown {
            for (stage, time) in estimate.breakdown.iter() {
                writeln!(out, "{INDENT}{stage}: {time}")?;
            }
        }
        writeln!(out)
    }
}
