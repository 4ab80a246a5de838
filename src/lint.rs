//! Checklist lint — advisory structure checks
//!
//! Loading never rejects a structurally odd checklist; `shipcheck lint`
//! runs these checks instead and reports findings in three categories:
//! errors (must fix), warnings (should fix), info (suggestions).

use std::collections::HashSet;

use crate::checklist::{Checklist, Phase};

/// Severity level for a lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Must fix — the checklist is ambiguous
    Error,
    /// Should fix — likely a mistake
    Warning,
    /// Suggestion
    Info,
}

/// A single lint finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity of the finding
    pub severity: Severity,
    /// Short code for the finding (e.g., "L001")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Suggested fix (optional)
    pub suggestion: Option<String>,
}

/// Result of linting a checklist
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    /// All findings, errors first
    pub findings: Vec<Finding>,
}

impl LintReport {
    /// Returns true if the report has no findings at all
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns the number of errors
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Returns the number of warnings
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns the number of info items
    #[must_use]
    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}

/// Run all lint checks and return a report.
#[must_use]
pub fn lint(checklist: &Checklist) -> LintReport {
    let mut findings = Vec::new();

    for phase in &checklist.phases {
        check_item_ids(phase, &mut findings);
        check_empty_tasks(phase, &mut findings);
        check_missing_status(phase, &mut findings);
        check_phase_shape(phase, &mut findings);
    }
    check_time_estimate(checklist, &mut findings);

    // Stable sort keeps phase order within each severity
    findings.sort_by_key(|f| f.severity);

    tracing::debug!(findings = findings.len(), "lint finished");
    LintReport { findings }
}

/// L001/L002/L007: ids must be present and unique, and should run 1..=n in order
fn check_item_ids(phase: &Phase, findings: &mut Vec<Finding>) {
    let unnumbered = phase.items.iter().filter(|item| item.id.is_none()).count();
    if unnumbered > 0 {
        findings.push(Finding {
            severity: Severity::Warning,
            code: "L007".to_string(),
            message: format!(
                "Phase '{}' has {unnumbered} item(s) without an id",
                phase.title
            ),
            suggestion: Some("Add `id = N` to every item".to_string()),
        });
    }

    let mut seen = HashSet::new();
    let mut duplicates: Vec<u32> = phase
        .items
        .iter()
        .filter_map(|item| item.id)
        .filter(|id| !seen.insert(*id))
        .collect();
    duplicates.sort_unstable();
    duplicates.dedup();

    if !duplicates.is_empty() {
        let ids: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
        findings.push(Finding {
            severity: Severity::Error,
            code: "L001".to_string(),
            message: format!(
                "Phase '{}' has duplicate item id(s): {}",
                phase.title,
                ids.join(", ")
            ),
            suggestion: Some("Give every item in a phase its own id".to_string()),
        });
        return;
    }

    // Sequence only means something once every item is numbered
    if unnumbered > 0 {
        return;
    }

    let out_of_sequence = phase
        .items
        .iter()
        .zip(1u32..)
        .find(|(item, expected)| item.id != Some(*expected));
    if let Some((item, expected)) = out_of_sequence {
        findings.push(Finding {
            severity: Severity::Warning,
            code: "L002".to_string(),
            message: format!(
                "Phase '{}' item ids are not sequential: expected {expected}, found {}",
                phase.title,
                item.id_label()
            ),
            suggestion: Some("Number items 1, 2, 3, ... in the order they appear".to_string()),
        });
    }
}

/// L008: an item without a status renders as checked
fn check_missing_status(phase: &Phase, findings: &mut Vec<Finding>) {
    for item in phase.items.iter().filter(|i| i.status.is_none()) {
        findings.push(Finding {
            severity: Severity::Info,
            code: "L008".to_string(),
            message: format!(
                "Item {} in phase '{}' has no status and will show as done",
                item.id_label(),
                phase.title
            ),
            suggestion: Some("Add `status = \"PENDING\"` or `status = \"DONE\"`".to_string()),
        });
    }
}

/// L003: items with no task text render as a bare number
fn check_empty_tasks(phase: &Phase, findings: &mut Vec<Finding>) {
    for item in phase.items.iter().filter(|i| i.task.trim().is_empty()) {
        findings.push(Finding {
            severity: Severity::Warning,
            code: "L003".to_string(),
            message: format!(
                "Item {} in phase '{}' has no task text",
                item.id_label(),
                phase.title
            ),
            suggestion: Some("Add `task = \"...\"` to the item".to_string()),
        });
    }
}

/// L004/L005: empty phases and phases without a priority
fn check_phase_shape(phase: &Phase, findings: &mut Vec<Finding>) {
    if phase.items.is_empty() {
        findings.push(Finding {
            severity: Severity::Info,
            code: "L004".to_string(),
            message: format!("Phase '{}' has no items", phase.title),
            suggestion: None,
        });
    }

    if phase.priority.is_none() {
        findings.push(Finding {
            severity: Severity::Info,
            code: "L005".to_string(),
            message: format!("Phase '{}' has no priority", phase.title),
            suggestion: Some(
                "Set `priority` to one of CRITICAL, HIGH, MEDIUM, LOW".to_string(),
            ),
        });
    }
}

/// L006: the report ends with the total estimate; warn when it will be missing
fn check_time_estimate(checklist: &Checklist, findings: &mut Vec<Finding>) {
    if checklist.phases.is_empty() || checklist.time_estimate.total.is_some() {
        return;
    }
    findings.push(Finding {
        severity: Severity::Info,
        code: "L006".to_string(),
        message: "Checklist has no total time estimate".to_string(),
        suggestion: Some("Add `total = \"...\"` under [time_estimate]".to_string()),
    });
}
