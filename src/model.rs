//! The position node model
//!
//! A chart is a flat collection of [`PositionNode`]s; the hierarchy is encoded
//! entirely through `level` / `parent` fields rather than nested structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a position is compensated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SalaryType {
    /// Fixed salary
    #[default]
    Normal,
    /// Commission-based pay
    Commission,
}

impl SalaryType {
    /// Short display label used on rendered cards
    pub fn label(&self) -> &'static str {
        match self {
            SalaryType::Normal => "Normal",
            SalaryType::Commission => "Commission",
        }
    }
}

/// A single position in the org hierarchy
///
/// `level` is a depth rank: `0` is the root level, deeper levels count up, and
/// `-1` marks a node sitting in the unassigned pool. `parent` must be `None`
/// whenever `level <= 0`; when present it is expected to name a node one level
/// shallower. The store does not police either rule (see
/// [`crate::store::OrgStore`]) — the editing workflow does, and
/// [`crate::document::ChartDocument::validate`] can check a whole chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionNode {
    /// Opaque unique identifier, stable for the node's lifetime
    pub id: String,
    /// Display name
    pub name: String,
    /// Localized display names keyed by language tag (e.g. "th", "zh").
    /// Carried as inert data; nothing in the hierarchy logic reads these.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub name_localized: BTreeMap<String, String>,
    /// Free-form classification tag (e.g. "Engineering")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default)]
    pub salary_type: SalaryType,
    /// Depth rank; `-1` = unassigned pool
    #[serde(default = "unassigned_level")]
    pub level: i32,
    /// Id of the node one level up, or `None` for roots and pool nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

fn unassigned_level() -> i32 {
    -1
}

impl PositionNode {
    /// Create a node with just the required fields, parked in the pool
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_localized: BTreeMap::new(),
            section: None,
            salary_type: SalaryType::default(),
            level: -1,
            parent: None,
        }
    }

    /// Set the level (builder style)
    pub fn at_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Set the parent id (builder style)
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the section tag (builder style)
    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Set the salary type (builder style)
    pub fn with_salary_type(mut self, salary_type: SalaryType) -> Self {
        self.salary_type = salary_type;
        self
    }

    /// Add a localized display name (builder style)
    pub fn with_localized_name(
        mut self,
        lang: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.name_localized.insert(lang.into(), name.into());
        self
    }

    /// Whether the node sits in the unassigned pool
    pub fn is_unassigned(&self) -> bool {
        self.level < 0
    }
}
