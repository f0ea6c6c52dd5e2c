//! The node store
//!
//! [`OrgStore`] owns the authoritative, insertion-ordered collection of
//! [`PositionNode`]s plus two derived views: nodes grouped by level and
//! children grouped by parent id. The views are rebuilt at the end of every
//! mutation, so a read issued after a mutation always reflects it.
//!
//! The store deliberately trusts its caller: `add_node` accepts duplicate ids,
//! `move_node` does not check that the new parent lives one level shallower
//! and never cascades to descendants, and operations on unknown ids are silent
//! no-ops. Lookups by id always return the first match, which keeps behavior
//! deterministic even in a duplicate-id state. Stricter checking is available
//! at the document boundary via
//! [`ChartDocument::validate`](crate::document::ChartDocument::validate).

use std::collections::BTreeMap;

use crate::hierarchy;
use crate::model::PositionNode;

/// Owned node collection with derived level/children views
#[derive(Debug, Clone, Default)]
pub struct OrgStore {
    nodes: Vec<PositionNode>,
    /// level -> indices into `nodes`, in insertion order.
    /// Keyed by i32 because the unassigned pool lives at level -1.
    by_level: BTreeMap<i32, Vec<usize>>,
    /// parent id -> indices of its direct children, in insertion order.
    /// Only ids actually referenced as a parent appear as keys.
    children: BTreeMap<String, Vec<usize>>,
}

impl OrgStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing collection, preserving its order
    pub fn from_nodes(nodes: Vec<PositionNode>) -> Self {
        let mut store = Self {
            nodes,
            by_level: BTreeMap::new(),
            children: BTreeMap::new(),
        };
        store.rebuild_views();
        store
    }

    /// The built-in demo chart (see [`crate::document::SEED_CHART`])
    pub fn seed() -> Self {
        crate::document::ChartDocument::default().into_store()
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Append a node to the collection.
    ///
    /// No validation: a duplicate id is accepted and simply shadows the
    /// earlier node in id lookups (first match wins).
    pub fn add_node(&mut self, node: PositionNode) {
        self.nodes.push(node);
        self.rebuild_views();
    }

    /// Re-level and re-parent the first node matching `id`.
    ///
    /// Only `level` and `parent` change; every other field is untouched.
    /// Unknown ids are a no-op. The caller is responsible for the invariant
    /// that `new_parent` names a node at `new_level - 1` (and is `None` when
    /// `new_level <= 0`); descendants are never moved along.
    pub fn move_node(&mut self, id: &str, new_level: i32, new_parent: Option<String>) {
        if let Some(idx) = self.index_of(id) {
            let node = &mut self.nodes[idx];
            node.level = new_level;
            node.parent = new_parent;
            self.rebuild_views();
        }
    }

    /// Remove the node matching `id` and every transitive descendant.
    ///
    /// Descendants are resolved before any mutation, so the removed set is
    /// exactly `[id] ∪ descendants(id)`. Unknown ids remove nothing.
    /// Surviving nodes keep their relative order.
    pub fn remove_node(&mut self, id: &str) {
        if self.index_of(id).is_none() {
            return;
        }
        let mut doomed = hierarchy::descendants(self, id);
        doomed.push(id.to_string());
        self.nodes.retain(|n| !doomed.contains(&n.id));
        self.rebuild_views();
    }

    // ── Reads ───────────────────────────────────────────────────────

    /// The full collection in insertion order
    pub fn nodes(&self) -> &[PositionNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node matching `id`
    pub fn get(&self, id: &str) -> Option<&PositionNode> {
        self.index_of(id).map(|idx| &self.nodes[idx])
    }

    /// Nodes grouped by level, insertion order within each group.
    /// The `-1` pool bucket is included when non-empty.
    pub fn nodes_by_level(&self) -> BTreeMap<i32, Vec<&PositionNode>> {
        self.by_level
            .iter()
            .map(|(&level, idxs)| (level, idxs.iter().map(|&i| &self.nodes[i]).collect()))
            .collect()
    }

    /// Nodes at one level, insertion order
    pub fn level(&self, level: i32) -> Vec<&PositionNode> {
        self.by_level
            .get(&level)
            .map(|idxs| idxs.iter().map(|&i| &self.nodes[i]).collect())
            .unwrap_or_default()
    }

    /// Direct children grouped by parent id. An id appears as a key iff at
    /// least one node names it as parent.
    pub fn children_by_parent(&self) -> BTreeMap<&str, Vec<&PositionNode>> {
        self.children
            .iter()
            .map(|(id, idxs)| {
                (
                    id.as_str(),
                    idxs.iter().map(|&i| &self.nodes[i]).collect(),
                )
            })
            .collect()
    }

    /// Direct children of `id`, insertion order
    pub fn children(&self, id: &str) -> Vec<&PositionNode> {
        self.children
            .get(id)
            .map(|idxs| idxs.iter().map(|&i| &self.nodes[i]).collect())
            .unwrap_or_default()
    }

    /// Nodes in the unassigned pool (`level < 0`)
    pub fn available(&self) -> Vec<&PositionNode> {
        self.nodes.iter().filter(|n| n.is_unassigned()).collect()
    }

    /// Deepest assigned level, or `None` when every node is in the pool
    pub fn max_level(&self) -> Option<i32> {
        self.by_level.keys().copied().filter(|&l| l >= 0).max()
    }

    /// Ids transitively reachable below `id` (see [`hierarchy::descendants`])
    pub fn descendants(&self, id: &str) -> Vec<String> {
        hierarchy::descendants(self, id)
    }

    /// Parent chain above `id`, nearest first (see [`hierarchy::ancestors`])
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        hierarchy::ancestors(self, id)
    }

    /// Display name of a node's parent, with the fallbacks the editor shows
    pub fn parent_name(&self, node: &PositionNode) -> &str {
        match &node.parent {
            None => "No Parent",
            Some(pid) => self.get(pid).map(|p| p.name.as_str()).unwrap_or("Unknown Parent"),
        }
    }

    // ── Internals ───────────────────────────────────────────────────

    fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    fn rebuild_views(&mut self) {
        self.by_level.clear();
        self.children.clear();
        for (idx, node) in self.nodes.iter().enumerate() {
            self.by_level.entry(node.level).or_default().push(idx);
            if let Some(parent) = &node.parent {
                self.children.entry(parent.clone()).or_default().push(idx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SalaryType;

    fn small_chart() -> OrgStore {
        OrgStore::from_nodes(vec![
            PositionNode::new("ceo", "CEO").at_level(0),
            PositionNode::new("cto", "CTO").at_level(1).with_parent("ceo"),
            PositionNode::new("cfo", "CFO").at_level(1).with_parent("ceo"),
            PositionNode::new("vp", "VP Engineering")
                .at_level(2)
                .with_parent("cto"),
            PositionNode::new("pool", "Sales Executive")
                .with_salary_type(SalaryType::Commission),
        ])
    }

    #[test]
    fn test_add_appends_and_preserves_fields() {
        let mut store = small_chart();
        let node = PositionNode::new("new", "Recruiter")
            .in_section("HR")
            .with_localized_name("th", "ผู้สรรหา");
        store.add_node(node.clone());

        assert_eq!(store.len(), 6);
        assert_eq!(store.nodes().last().unwrap(), &node);
        assert_eq!(store.get("new"), Some(&node));
    }

    #[test]
    fn test_add_tolerates_duplicate_ids_first_match_wins() {
        let mut store = small_chart();
        store.add_node(PositionNode::new("ceo", "Shadow CEO").at_level(3));

        assert_eq!(store.len(), 6);
        // Lookup resolves to the original node.
        assert_eq!(store.get("ceo").unwrap().name, "CEO");
        // Both copies still show up in the level grouping.
        assert_eq!(store.level(0).len(), 1);
        assert_eq!(store.level(3).len(), 1);
    }

    #[test]
    fn test_move_changes_only_level_and_parent() {
        let mut store = small_chart();
        let before = store.get("cfo").unwrap().clone();
        store.move_node("cfo", 2, Some("cto".to_string()));

        let after = store.get("cfo").unwrap();
        assert_eq!(after.level, 2);
        assert_eq!(after.parent.as_deref(), Some("cto"));
        assert_eq!(after.name, before.name);
        assert_eq!(after.section, before.section);
        assert_eq!(after.salary_type, before.salary_type);
        assert_eq!(after.name_localized, before.name_localized);
    }

    #[test]
    fn test_move_unknown_id_is_a_noop() {
        let mut store = small_chart();
        let before: Vec<_> = store.nodes().to_vec();
        store.move_node("ghost", 0, None);
        assert_eq!(store.nodes(), &before[..]);
    }

    #[test]
    fn test_move_to_pool() {
        let mut store = small_chart();
        store.move_node("vp", -1, None);
        let vp = store.get("vp").unwrap();
        assert!(vp.is_unassigned());
        assert!(vp.parent.is_none());
        assert_eq!(store.available().len(), 2);
    }

    #[test]
    fn test_move_does_not_cascade_to_descendants() {
        let mut store = small_chart();
        store.move_node("cto", -1, None);
        // vp keeps its now-dangling level and parent; that is the contract.
        let vp = store.get("vp").unwrap();
        assert_eq!(vp.level, 2);
        assert_eq!(vp.parent.as_deref(), Some("cto"));
    }

    #[test]
    fn test_remove_cascades_exactly_the_prior_descendants() {
        let mut store = small_chart();
        let mut expected = store.descendants("cto");
        expected.push("cto".to_string());
        store.remove_node("cto");

        assert_eq!(store.len(), 3);
        for id in &expected {
            assert!(store.get(id).is_none());
        }
        // Survivors keep their relative order.
        let ids: Vec<_> = store.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["ceo", "cfo", "pool"]);
    }

    #[test]
    fn test_remove_unknown_id_removes_nothing() {
        let mut store = small_chart();
        store.remove_node("ghost");
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_remove_leaf() {
        let mut store = small_chart();
        store.remove_node("vp");
        assert_eq!(store.len(), 4);
        assert!(store.get("cto").is_some());
    }

    #[test]
    fn test_nodes_by_level_partitions_the_collection() {
        let store = small_chart();
        let grouped = store.nodes_by_level();

        assert_eq!(grouped[&-1].len(), 1);
        assert_eq!(grouped[&0].len(), 1);
        assert_eq!(grouped[&1].len(), 2);
        assert_eq!(grouped[&2].len(), 1);

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, store.len());
    }

    #[test]
    fn test_children_by_parent_keys_are_exactly_referenced_parents() {
        let store = small_chart();
        let children = store.children_by_parent();

        assert_eq!(children.len(), 2);
        let ceo_kids: Vec<_> = children[&"ceo"].iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ceo_kids, ["cto", "cfo"]);
        // Leaves and pool nodes never appear as keys.
        assert!(!children.contains_key(&"vp"));
        assert!(!children.contains_key(&"pool"));
    }

    #[test]
    fn test_views_reflect_mutations_immediately() {
        let mut store = small_chart();
        store.move_node("cfo", 2, Some("cto".to_string()));
        assert_eq!(store.level(1).len(), 1);
        assert_eq!(store.children("cto").len(), 2);

        store.remove_node("cto");
        assert!(store.children("cto").is_empty());
        assert!(store.level(2).is_empty());
    }

    #[test]
    fn test_max_level_ignores_the_pool() {
        let store = small_chart();
        assert_eq!(store.max_level(), Some(2));

        let pool_only = OrgStore::from_nodes(vec![PositionNode::new("a", "A")]);
        assert_eq!(pool_only.max_level(), None);
    }

    #[test]
    fn test_parent_name_fallbacks() {
        let mut store = small_chart();
        let cto = store.get("cto").unwrap().clone();
        assert_eq!(store.parent_name(&cto), "CEO");

        let pool = store.get("pool").unwrap().clone();
        assert_eq!(store.parent_name(&pool), "No Parent");

        store.remove_node("ceo");
        assert_eq!(store.parent_name(&cto), "Unknown Parent");
    }
}
