//! Hierarchy queries over the parent-pointer tree
//!
//! The chart stores hierarchy as parent pointers on a flat list; these
//! traversals recover subtree and ancestor-chain views from it. Both walks
//! carry a visited set so they terminate even if a caller has managed to
//! wire up a parent cycle.

use std::collections::HashSet;

use crate::store::OrgStore;

/// Ids of every node transitively below `id`, depth-first, children in
/// insertion order. Callers must not rely on the order. A node with no
/// children (or an unknown id) yields an empty list.
pub fn descendants(store: &OrgStore, id: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut stack: Vec<String> = vec![id.to_string()];
    seen.insert(id.to_string());

    while let Some(current) = stack.pop() {
        for child in store.children(&current) {
            if seen.insert(child.id.clone()) {
                found.push(child.id.clone());
                stack.push(child.id.clone());
            }
        }
    }

    found
}

/// Parent chain above `id`, nearest ancestor first. A dangling parent id is
/// included as the final entry (the chain follows ids, not nodes); a cycle
/// ends the chain at the first repeat.
pub fn ancestors(store: &OrgStore, id: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(id.to_string());

    let mut current = store.get(id).and_then(|n| n.parent.clone());
    while let Some(pid) = current {
        if !seen.insert(pid.clone()) {
            break;
        }
        current = store.get(&pid).and_then(|n| n.parent.clone());
        chain.push(pid);
    }

    chain
}
