//! Terminal display for lint results
//!
//! All output goes to stderr so stdout stays reserved for the report.

use colored::{ColoredString, Colorize};

use crate::lint::{Finding, LintReport, Severity};

/// Colored severity tag, e.g. `error[L001]`
fn severity_tag(finding: &Finding) -> ColoredString {
    let label = match finding.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };
    let tag = format!("{label}[{}]", finding.code);
    match finding.severity {
        Severity::Error => tag.red().bold(),
        Severity::Warning => tag.yellow().bold(),
        Severity::Info => tag.blue(),
    }
}

/// One-line summary of a report, e.g. "1 error, 2 warnings, 0 info"
#[must_use]
pub fn summary_line(report: &LintReport) -> String {
    let plural = |n: usize, word: &str| {
        if n == 1 {
            format!("{n} {word}")
        } else {
            format!("{n} {word}s")
        }
    };
    format!(
        "{}, {}, {} info",
        plural(report.error_count(), "error"),
        plural(report.warning_count(), "warning"),
        report.info_count()
    )
}

/// Print every finding followed by a summary line
pub fn render_lint_report(project: &str, report: &LintReport) {
    eprintln!(
        "\n{} {}",
        "===".bold().cyan(),
        format!("Lint: {project}").bold().cyan()
    );
    eprintln!("{}", "─".repeat(50).dimmed());

    if report.is_clean() {
        eprintln!("  {} no findings", "✓".green().bold());
        eprintln!();
        return;
    }

    for finding in &report.findings {
        eprintln!("  {} {}", severity_tag(finding), finding.message);
        if let Some(suggestion) = &finding.suggestion {
            eprintln!("    {} {}", "→".dimmed(), suggestion.dimmed());
        }
    }

    eprintln!("{}", "─".repeat(50).dimmed());
    eprintln!("  {}", summary_line(report));
    eprintln!();
}
