//! Error types for strict chart validation
//!
//! The store itself never reports errors (unknown ids are no-ops, duplicate
//! ids are tolerated); these errors only come out of the opt-in
//! [`ChartDocument::validate`](crate::document::ChartDocument::validate) pass.

use thiserror::Error;

/// Consistency violations a chart can carry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Two or more nodes share an id
    #[error("duplicate node id '{id}'")]
    DuplicateId { id: String },

    /// A node has an empty display name
    #[error("node '{id}' has an empty name")]
    EmptyName { id: String },

    /// A parent reference that resolves to no node
    #[error("node '{id}' references unknown parent '{parent}'")]
    UnknownParent { id: String, parent: String },

    /// A parent that does not live exactly one level shallower
    #[error(
        "node '{id}' at level {level} has parent '{parent}' at level {parent_level}, expected level {}",
        level - 1
    )]
    ParentLevelMismatch {
        id: String,
        parent: String,
        level: i32,
        parent_level: i32,
    },

    /// A parent set on a root or pool node (`level <= 0` requires no parent)
    #[error("node '{id}' at level {level} must not have a parent")]
    ParentNotAllowed { id: String, level: i32 },
}

impl ChartError {
    /// Create a duplicate id error
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create an empty name error
    pub fn empty_name(id: impl Into<String>) -> Self {
        Self::EmptyName { id: id.into() }
    }

    /// Create an unknown parent error
    pub fn unknown_parent(id: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::UnknownParent {
            id: id.into(),
            parent: parent.into(),
        }
    }

    /// Create a parent level mismatch error
    pub fn level_mismatch(
        id: impl Into<String>,
        parent: impl Into<String>,
        level: i32,
        parent_level: i32,
    ) -> Self {
        Self::ParentLevelMismatch {
            id: id.into(),
            parent: parent.into(),
            level,
            parent_level,
        }
    }

    /// Create a parent-not-allowed error
    pub fn parent_not_allowed(id: impl Into<String>, level: i32) -> Self {
        Self::ParentNotAllowed {
            id: id.into(),
            level,
        }
    }

    /// Id of the offending node
    pub fn node_id(&self) -> &str {
        match self {
            Self::DuplicateId { id }
            | Self::EmptyName { id }
            | Self::UnknownParent { id, .. }
            | Self::ParentLevelMismatch { id, .. }
            | Self::ParentNotAllowed { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let err = ChartError::duplicate("7");
        assert!(err.to_string().contains("duplicate"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_level_mismatch_names_expected_level() {
        let err = ChartError::level_mismatch("b", "a", 3, 0);
        assert!(err.to_string().contains("expected level 2"));
    }

    #[test]
    fn test_node_id_accessor() {
        assert_eq!(ChartError::parent_not_allowed("x", -1).node_id(), "x");
        assert_eq!(ChartError::unknown_parent("y", "gone").node_id(), "y");
    }
}
