//! Chart documents
//!
//! A chart document is the TOML-facing shape of a chart: a title plus a list
//! of `[[positions]]` tables. Loading a document never checks hierarchy
//! consistency — that matches the permissive store contract — but
//! [`ChartDocument::validate`] offers a strict pass for callers that want a
//! clean chart before editing starts.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ChartError;
use crate::model::PositionNode;
use crate::store::OrgStore;

/// Errors that can occur when loading a chart document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read chart file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse chart TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A deserialized chart: optional title plus the node list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDocument {
    /// Optional chart title, shown as the SVG heading
    pub title: Option<String>,
    /// Nodes in document order (which becomes store insertion order)
    #[serde(default)]
    pub positions: Vec<PositionNode>,
}

/// The demo chart the editor starts from: a small company with two pool
/// nodes, Thai localized names included.
pub const SEED_CHART: &str = r#"
title = "ParentFlow"

[[positions]]
id = "1"
name = "CEO"
name_localized = { th = "ประธานเจ้าหน้าที่บริหาร" }
section = "Management"
salary_type = "Normal"
level = 0

[[positions]]
id = "2"
name = "CTO"
name_localized = { th = "ประธานเจ้าหน้าที่ฝ่ายเทคโนโลยี" }
section = "Engineering"
salary_type = "Normal"
level = 1
parent = "1"

[[positions]]
id = "3"
name = "CFO"
name_localized = { th = "ประธานเจ้าหน้าที่ฝ่ายการเงิน" }
section = "Management"
salary_type = "Normal"
level = 1
parent = "1"

[[positions]]
id = "4"
name = "VP Engineering"
name_localized = { th = "รองประธานฝ่ายวิศวกรรม" }
section = "Engineering"
salary_type = "Normal"
level = 2
parent = "2"

[[positions]]
id = "5"
name = "Sales Manager"
name_localized = { th = "ผู้จัดการฝ่ายขาย" }
section = "Sales"
salary_type = "Commission"
level = 2
parent = "3"

[[positions]]
id = "6"
name = "Backend Lead"
name_localized = { th = "หัวหน้าทีม Backend" }
section = "Engineering"
salary_type = "Normal"
level = 3
parent = "4"

[[positions]]
id = "7"
name = "Frontend Lead"
name_localized = { th = "หัวหน้าทีม Frontend" }
section = "Engineering"
salary_type = "Normal"
level = 3
parent = "4"

[[positions]]
id = "8"
name = "Sales Executive"
name_localized = { th = "เจ้าหน้าที่ฝ่ายขาย" }
section = "Sales"
salary_type = "Commission"
level = -1

[[positions]]
id = "9"
name = "Marketing Specialist"
name_localized = { th = "ผู้เชี่ยวชาญด้านการตลาด" }
section = "Operations"
salary_type = "Normal"
level = -1
"#;

impl ChartDocument {
    /// Load a chart from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Ok(content.parse()?)
    }

    /// Move the node list into a store
    pub fn into_store(self) -> OrgStore {
        OrgStore::from_nodes(self.positions)
    }

    /// Strict consistency check over the whole document, reporting the first
    /// violation found. The store never runs these checks itself; duplicate
    /// ids, dangling parents and level mismatches are all representable and
    /// silently tolerated at runtime.
    pub fn validate(&self) -> Result<(), ChartError> {
        let mut seen = std::collections::HashSet::new();
        for node in &self.positions {
            if !seen.insert(node.id.as_str()) {
                return Err(ChartError::duplicate(&node.id));
            }
        }

        for node in &self.positions {
            if node.name.trim().is_empty() {
                return Err(ChartError::empty_name(&node.id));
            }
            match &node.parent {
                Some(_) if node.level <= 0 => {
                    return Err(ChartError::parent_not_allowed(&node.id, node.level));
                }
                Some(parent) => {
                    // First match by id, same resolution rule as the store.
                    let Some(target) = self.positions.iter().find(|n| &n.id == parent) else {
                        return Err(ChartError::unknown_parent(&node.id, parent));
                    };
                    if target.level != node.level - 1 {
                        return Err(ChartError::level_mismatch(
                            &node.id,
                            parent,
                            node.level,
                            target.level,
                        ));
                    }
                }
                None => {}
            }
        }
        Ok(())
    }
}

impl FromStr for ChartDocument {
    type Err = DocumentError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

impl Default for ChartDocument {
    fn default() -> Self {
        SEED_CHART
            .parse()
            .expect("seed chart should be valid TOML")
    }
}
