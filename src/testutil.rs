//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::checklist::{Checklist, Item, Phase, Priority};

/// Fixed timestamp so rendered output is stable across runs.
pub const TEST_GENERATED: &str = "2024-05-01T10:00:00.000000";

/// Create a pending, non-critical item with no details.
#[must_use]
pub fn make_test_item(id: u32, task: &str) -> Item {
    Item::new(id, task)
}

/// Create a phase with the given title, priority and items.
#[must_use]
pub fn make_test_phase(title: &str, priority: Option<Priority>, items: Vec<Item>) -> Phase {
    Phase {
        title: title.to_string(),
        priority,
        items,
    }
}

/// Create a checklist with fixed header fields and the given phases.
///
/// Notes, criteria and time estimates are left empty.
#[must_use]
pub fn make_test_checklist(phases: Vec<Phase>) -> Checklist {
    let mut checklist = Checklist::new("test-project");
    checklist.generated = TEST_GENERATED.to_string();
    checklist.status = "READY_FOR_DEPLOYMENT".to_string();
    checklist.phases = phases;
    checklist
}
