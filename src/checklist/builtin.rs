//! Builtin portfolio deployment checklist
//!
//! The data lives in `builtin.toml` next to this file and is embedded at
//! compile time, so the binary renders something useful with no arguments.

use anyhow::{Context, Result};

use super::model::Checklist;

/// Raw TOML of the builtin checklist
pub const BUILTIN_CHECKLIST: &str = include_str!("builtin.toml");

/// Load the builtin checklist, stamping `generated` with the current time.
pub fn builtin() -> Result<Checklist> {
    Checklist::parse(BUILTIN_CHECKLIST).context("Builtin checklist is malformed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::model::{Priority, Status};

    #[test]
    fn test_builtin_parses() {
        let checklist = builtin().unwrap();
        assert_eq!(checklist.project, "iki-portfolio");
        assert_eq!(checklist.status, "READY_FOR_DEPLOYMENT");
        assert_eq!(checklist.title, "PORTFOLIO DEPLOYMENT CHECKLIST");
    }

    #[test]
    fn test_builtin_phase_order_and_priorities() {
        let checklist = builtin().unwrap();
        let phases: Vec<(&str, Option<Priority>)> = checklist
            .phases
            .iter()
            .map(|p| (p.title.as_str(), p.priority))
            .collect();

        assert_eq!(
            phases,
            vec![
                ("Pre-Deployment: Path Fix", Some(Priority::Critical)),
                ("Local Verification", Some(Priority::High)),
                ("Git Preparation", Some(Priority::High)),
                ("Vercel Deployment", Some(Priority::High)),
                ("Post-Deployment", Some(Priority::Medium)),
            ]
        );
    }

    #[test]
    fn test_builtin_ids_are_sequential_per_phase() {
        let checklist = builtin().unwrap();
        for phase in &checklist.phases {
            let ids: Vec<Option<u32>> = phase.items.iter().map(|i| i.id).collect();
            let expected: Vec<Option<u32>> = (1..=u32::try_from(ids.len()).unwrap())
                .map(Some)
                .collect();
            assert_eq!(ids, expected, "phase '{}'", phase.title);
        }
    }

    #[test]
    fn test_builtin_items_are_pending() {
        let checklist = builtin().unwrap();
        assert!(checklist
            .phases
            .iter()
            .flat_map(|p| &p.items)
            .all(|i| i.status == Some(Status::Pending)));
    }

    #[test]
    fn test_builtin_only_path_fix_is_critical() {
        let checklist = builtin().unwrap();
        let critical: Vec<&str> = checklist
            .phases
            .iter()
            .filter(|p| p.items.iter().any(|i| i.critical))
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(critical, vec!["Pre-Deployment: Path Fix"]);
    }

    #[test]
    fn test_builtin_time_estimate() {
        let checklist = builtin().unwrap();
        assert_eq!(
            checklist.time_estimate.total.as_deref(),
            Some("20-35 minutes")
        );
        assert_eq!(checklist.time_estimate.breakdown.len(), 3);
    }
}
