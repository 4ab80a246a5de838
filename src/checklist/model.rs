//! Checklist data model
//!
//! Parses checklist TOML files into phases, items and their optional
//! detail fields. Loading is lenient: a missing optional field means
//! "not applicable", and no structural validation happens here (see
//! [`crate::lint`] for the advisory checks).

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Priority of a phase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Blocks everything after it
    Critical,
    /// Required for the deployment
    High,
    /// Should be done soon after deployment
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    /// Label used in rendered reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion status of an item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Not done yet
    Pending,
    /// Finished
    Done,
}

impl Status {
    /// Checkbox glyph (with trailing space) shown in front of an item.
    ///
    /// Only `Pending` renders unchecked; any other status is checked.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pending => "[ ] ",
            Self::Done => "[✓] ",
        }
    }

    /// Label used in JSON output and lint messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered string key/value pairs (settings, environment variables).
///
/// Deserializes from a TOML or JSON table and keeps document order, which
/// a `HashMap`/`BTreeMap` would lose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairs(Vec<(String, String)>);

impl Pairs {
    /// Build from an iterator of pairs, keeping order
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Iterate over `(key, value)` in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no pairs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Pairs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Pairs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = Pairs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Pairs, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    pairs.push((key, value));
                }
                Ok(Pairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

/// Optional descriptive fields attached to an item.
///
/// Each item populates only the subset that applies to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDetails {
    /// A single command to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// A sequence of commands, run in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
    /// Manual steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    /// What a successful run prints or shows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_result: Option<String>,
    /// Rough duration, e.g. "2-5 minutes"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_time: Option<String>,
    /// Settings to enter somewhere (name → value)
    #[serde(default, skip_serializing_if = "Pairs::is_empty")]
    pub settings: Pairs,
    /// Environment variables to define (name → value)
    #[serde(default, skip_serializing_if = "Pairs::is_empty")]
    pub variables: Pairs,
    /// Things to verify
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<String>,
    /// Tools or services involved
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    /// Related URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Placeholder rendered in place of a missing item id
pub const MISSING_ID: &str = "?";

/// A single checklist entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Identifier, unique and sequential within its phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// What to do
    #[serde(default)]
    pub task: String,
    /// Completion status. Only an explicit `PENDING` counts as open;
    /// an item without a status renders as checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Marks items that block the deployment
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub critical: bool,
    /// Optional detail fields
    #[serde(flatten)]
    pub details: ItemDetails,
}

impl Item {
    /// Create a pending, non-critical item with no details
    #[must_use]
    pub fn new(id: u32, task: &str) -> Self {
        Self {
            id: Some(id),
            task: task.to_string(),
            status: Some(Status::Pending),
            critical: false,
            details: ItemDetails::default(),
        }
    }

    /// True only for an explicit `PENDING` status
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == Some(Status::Pending)
    }

    /// Checkbox glyph for this item: unchecked for `PENDING`, checked otherwise
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        if self.is_pending() {
            Status::Pending.glyph()
        } else {
            Status::Done.glyph()
        }
    }

    /// The id as shown in reports, or [`MISSING_ID`]
    #[must_use]
    pub fn id_label(&self) -> String {
        self.id
            .map_or_else(|| MISSING_ID.to_string(), |id| id.to_string())
    }
}

/// A named, prioritized group of items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    /// Phase title
    pub title: String,
    /// Priority; rendered as "N/A" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Items in declaration order
    #[serde(default, rename = "item")]
    pub items: Vec<Item>,
}

/// Time estimates for the whole deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeEstimate {
    /// Headline estimate for the whole run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    /// Per-stage estimates, in document order
    #[serde(flatten)]
    pub breakdown: Pairs,
}

/// Top-level checklist parsed from a checklist TOML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checklist {
    /// Project the checklist belongs to
    #[serde(default)]
    pub project: String,
    /// Project version
    #[serde(default)]
    pub version: String,
    /// When this checklist value was constructed.
    ///
    /// Stamped at load time when the file leaves it out.
    #[serde(default)]
    pub generated: String,
    /// Overall status label, e.g. `READY_FOR_DEPLOYMENT`
    #[serde(default = "default_status")]
    pub status: String,
    /// Report title shown in the top banner
    #[serde(default = "default_title")]
    pub title: String,
    /// Phases in declaration order
    #[serde(default, rename = "phase")]
    pub phases: Vec<Phase>,
    /// Work already finished before deployment
    #[serde(default)]
    pub optimizations_completed: Vec<String>,
    /// Notes the operator must read first
    #[serde(default)]
    pub critical_notes: Vec<String>,
    /// Time estimates
    #[serde(default)]
    pub time_estimate: TimeEstimate,
    /// Conditions that mean the deployment succeeded
    #[serde(default)]
    pub success_criteria: Vec<String>,
}

fn default_status() -> String {
    "UNKNOWN".to_string()
}

fn default_title() -> String {
    "DEPLOYMENT CHECKLIST".to_string()
}

/// Current local time in ISO-8601 with microseconds
#[must_use]
pub fn timestamp_now() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

impl Checklist {
    /// Create an empty checklist for `project`, stamped with the current time
    #[must_use]
    pub fn new(project: &str) -> Self {
        Self {
            project: project.to_string(),
            version: String::new(),
            generated: timestamp_now(),
            status: default_status(),
            title: default_title(),
            phases: Vec::new(),
            optimizations_completed: Vec::new(),
            critical_notes: Vec::new(),
            time_estimate: TimeEstimate::default(),
            success_criteria: Vec::new(),
        }
    }

    /// Parse a checklist file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read checklist file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("in checklist file '{}'", path.display()))
    }

    /// Parse checklist TOML content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let mut checklist: Self =
            toml::from_str(content).context("Failed to parse checklist TOML")?;
        if checklist.generated.trim().is_empty() {
            checklist.generated = timestamp_now();
        }
        tracing::debug!(
            project = %checklist.project,
            phases = checklist.phases.len(),
            "parsed checklist"
        );
        Ok(checklist)
    }

    /// Total number of items across all phases
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.phases.iter().map(|p| p.items.len()).sum()
    }

    /// Find a phase by title
    #[must_use]
    pub fn get_phase(&self, title: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.title == title)
    }
}
