//! Chart layout: card placement and connector routing
//!
//! The original editor leaves placement to the browser (flex rows of cards)
//! and measures the resulting rectangles; here placement is closed-form so a
//! chart can be rendered with no UI at all. Each assigned level becomes one
//! horizontal row of fixed-size cards, rows are centered on the widest row,
//! and unassigned pool nodes stack in a column on the left — the same shape
//! the editor draws.
//!
//! Hosts that do measure real card rectangles can skip [`compute`] entirely
//! and hand their own rect map to [`routing::route_connectors`].

pub mod config;
pub mod routing;
pub mod types;

pub use config::LayoutConfig;
pub use routing::{compute_connector, route_connectors, ConnectorPath, PathSegment};
pub use types::{BoundingBox, ChartLayout, ConnectorLayout, Point};

use crate::store::OrgStore;

/// Place every node and route every drawable connector.
///
/// With duplicate ids only the first node's rectangle is kept, matching the
/// store's first-match rule; later duplicates simply draw nowhere.
pub fn compute(store: &OrgStore, config: &LayoutConfig) -> ChartLayout {
    let (node_w, node_h) = config.node_size;
    let mut layout = ChartLayout::default();

    let pool = store.available();
    let chart_x = if pool.is_empty() {
        0.0
    } else {
        node_w + config.pool_gap
    };

    for (i, node) in pool.iter().enumerate() {
        let y = i as f64 * (node_h + config.pool_spacing);
        layout
            .rects
            .entry(node.id.clone())
            .or_insert(BoundingBox::new(0.0, y, node_w, node_h));
    }

    if let Some(max_level) = store.max_level() {
        // Width of the widest row decides the centering reference.
        let row_width = |count: usize| {
            count as f64 * node_w + count.saturating_sub(1) as f64 * config.node_spacing
        };
        let chart_width = (0..=max_level)
            .map(|level| row_width(store.level(level).len()))
            .fold(0.0, f64::max);

        for level in 0..=max_level {
            let row = store.level(level);
            if row.is_empty() {
                continue;
            }
            let y = level as f64 * (node_h + config.level_spacing);
            let x0 = chart_x + (chart_width - row_width(row.len())) / 2.0;
            for (i, node) in row.iter().enumerate() {
                let x = x0 + i as f64 * (node_w + config.node_spacing);
                layout
                    .rects
                    .entry(node.id.clone())
                    .or_insert(BoundingBox::new(x, y, node_w, node_h));
            }
        }
    }

    layout.connectors = routing::route_connectors(store, &layout.rects);
    layout.compute_bounds();
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PositionNode;

    fn chart() -> OrgStore {
        OrgStore::from_nodes(vec![
            PositionNode::new("root", "Root").at_level(0),
            PositionNode::new("l", "Left").at_level(1).with_parent("root"),
            PositionNode::new("r", "Right").at_level(1).with_parent("root"),
            PositionNode::new("pool", "Pool"),
        ])
    }

    #[test]
    fn test_every_node_gets_a_rect() {
        let layout = compute(&chart(), &LayoutConfig::default());
        assert_eq!(layout.rects.len(), 4);
        assert_eq!(layout.connectors.len(), 2);
    }

    #[test]
    fn test_levels_stack_downward() {
        let config = LayoutConfig::default();
        let layout = compute(&chart(), &config);
        let (_, node_h) = config.node_size;

        assert_eq!(layout.rects["root"].y, 0.0);
        assert_eq!(layout.rects["l"].y, node_h + config.level_spacing);
        assert_eq!(layout.rects["l"].y, layout.rects["r"].y);
    }

    #[test]
    fn test_narrow_row_is_centered_on_the_widest() {
        let config = LayoutConfig::default();
        let layout = compute(&chart(), &config);

        // Level 1 is the widest row; the single root card sits over its middle.
        let row_left = layout.rects["l"].x;
        let row_right = layout.rects["r"].right();
        let root = layout.rects["root"];
        let root_center = root.x + root.width / 2.0;
        assert!((root_center - (row_left + row_right) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_pool_column_sits_left_of_the_chart() {
        let config = LayoutConfig::default();
        let layout = compute(&chart(), &config);

        let pool = layout.rects["pool"];
        assert_eq!(pool.x, 0.0);
        let chart_left = layout.rects["root"].x.min(layout.rects["l"].x);
        assert!(chart_left >= pool.right() + config.pool_gap);
    }

    #[test]
    fn test_no_pool_means_chart_starts_at_origin() {
        let store = OrgStore::from_nodes(vec![PositionNode::new("root", "Root").at_level(0)]);
        let layout = compute(&store, &LayoutConfig::default());
        assert_eq!(layout.rects["root"].x, 0.0);
    }

    #[test]
    fn test_empty_store_yields_empty_layout() {
        let layout = compute(&OrgStore::new(), &LayoutConfig::default());
        assert!(layout.rects.is_empty());
        assert!(layout.connectors.is_empty());
        assert_eq!(layout.bounds, BoundingBox::zero());
    }

    #[test]
    fn test_duplicate_ids_keep_the_first_rect() {
        let store = OrgStore::from_nodes(vec![
            PositionNode::new("a", "First").at_level(0),
            PositionNode::new("a", "Second").at_level(1),
        ]);
        let layout = compute(&store, &LayoutConfig::default());
        assert_eq!(layout.rects.len(), 1);
        assert_eq!(layout.rects["a"].y, 0.0);
    }

    #[test]
    fn test_connectors_connect_anchor_to_anchor() {
        let layout = compute(&chart(), &LayoutConfig::default());
        for conn in &layout.connectors {
            let parent = layout.rects[&conn.parent_id];
            let child = layout.rects[&conn.child_id];
            assert_eq!(conn.path.start(), Some(parent.bottom_center()));
            assert_eq!(conn.path.end(), Some(child.top_center()));
        }
    }
}
