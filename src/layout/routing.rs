//! Connector routing between parent and child cards
//!
//! Connectors leave the parent at the midpoint of its bottom edge, drop to the
//! vertical midpoint between the two cards, run horizontally with a rounded
//! corner at each end of the run, and drop into the midpoint of the child's
//! top edge. Everything here is pure geometry: rectangles in, path segments
//! out. Where the rectangles come from (the built-in level layout, or rects
//! measured by a host UI) is the caller's concern.

use std::collections::BTreeMap;

use crate::store::OrgStore;

use super::types::{BoundingBox, ConnectorLayout, Point};

/// Corner radius for the two elbow turns, before clamping
const CORNER_RADIUS: f64 = 20.0;

/// Below this horizontal offset between anchors a curve is visually
/// meaningless and the connector degenerates to a straight line.
const STRAIGHT_THRESHOLD: f64 = 2.0;

/// A segment in a connector path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Quadratic Bezier curve
    QuadraticTo { control: Point, end: Point },
}

/// An ordered list of path segments, ready for SVG rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectorPath {
    pub segments: Vec<PathSegment>,
}

impl ConnectorPath {
    /// The path's first point, if any
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|seg| match *seg {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
            PathSegment::QuadraticTo { end, .. } => end,
        })
    }

    /// The path's final point, if any
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|seg| match *seg {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
            PathSegment::QuadraticTo { end, .. } => end,
        })
    }

    /// Convert to an SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => {
                    d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
                }
                PathSegment::LineTo(p) => {
                    d.push_str(&format!(" L{:.2} {:.2}", p.x, p.y));
                }
                PathSegment::QuadraticTo { control, end } => {
                    d.push_str(&format!(
                        " Q{:.2} {:.2} {:.2} {:.2}",
                        control.x, control.y, end.x, end.y
                    ));
                }
            }
        }
        d
    }
}

/// Route one connector from a parent card to a child card.
///
/// Both boxes must be expressed relative to the same origin. The result is
/// either a single straight line (near-zero horizontal offset) or the full
/// five-segment elbow: down, quarter turn, across, quarter turn, down. The
/// corner radius is clamped to half the horizontal offset and to the vertical
/// distance to the midline, so curves never overshoot the available space.
pub fn compute_connector(parent: &BoundingBox, child: &BoundingBox) -> ConnectorPath {
    let p = parent.bottom_center();
    let c = child.top_center();

    let dx = c.x - p.x;
    let dy = c.y - p.y;

    if dx.abs() < STRAIGHT_THRESHOLD {
        return ConnectorPath {
            segments: vec![PathSegment::MoveTo(p), PathSegment::LineTo(c)],
        };
    }

    let mid_y = p.y + dy / 2.0;
    let r = CORNER_RADIUS.min(dx.abs() / 2.0).min((mid_y - p.y).abs());
    let mx = if dx > 0.0 { 1.0 } else { -1.0 };

    ConnectorPath {
        segments: vec![
            PathSegment::MoveTo(p),
            PathSegment::LineTo(Point::new(p.x, mid_y - r)),
            PathSegment::QuadraticTo {
                control: Point::new(p.x, mid_y),
                end: Point::new(p.x + r * mx, mid_y),
            },
            PathSegment::LineTo(Point::new(c.x - r * mx, mid_y)),
            PathSegment::QuadraticTo {
                control: Point::new(c.x, mid_y),
                end: Point::new(c.x, mid_y + r),
            },
            PathSegment::LineTo(c),
        ],
    }
}

/// Route every drawable parent-child edge in the chart.
///
/// One connector is produced per node that has a parent and whose own rect
/// AND parent rect are both present in `rects`; edges with a missing rect are
/// skipped without comment, mirroring how an unrendered card simply has no
/// line. Connectors come out in node insertion order.
pub fn route_connectors(
    store: &OrgStore,
    rects: &BTreeMap<String, BoundingBox>,
) -> Vec<ConnectorLayout> {
    let mut connectors = Vec::new();
    for node in store.nodes() {
        let Some(parent_id) = &node.parent else {
            continue;
        };
        let (Some(parent_rect), Some(child_rect)) = (rects.get(parent_id), rects.get(&node.id))
        else {
            continue;
        };
        connectors.push(ConnectorLayout {
            parent_id: parent_id.clone(),
            child_id: node.id.clone(),
            path: compute_connector(parent_rect, child_rect),
        });
    }
    connectors
}
