//! Core types for chart layout

use std::collections::BTreeMap;

use super::routing::ConnectorPath;

/// A 2D point in the shared chart coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing a node card's on-screen rectangle
///
/// `x`/`y` is the top-left corner. All boxes fed into routing must share one
/// coordinate origin; translating measured rects into that space is the
/// caller's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoint of the top edge — the child-side connector anchor
    pub fn top_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y)
    }

    /// Midpoint of the bottom edge — the parent-side connector anchor
    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.bottom())
    }

    /// Smallest box containing both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// A routed parent-to-child connector
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorLayout {
    pub parent_id: String,
    pub child_id: String,
    pub path: ConnectorPath,
}

/// A fully placed chart: one rectangle per node plus the routed connectors
///
/// `rects` is keyed by node id; with duplicate ids the first node keeps the
/// key, matching the store's first-match lookup rule.
#[derive(Debug, Clone, Default)]
pub struct ChartLayout {
    pub rects: BTreeMap<String, BoundingBox>,
    pub connectors: Vec<ConnectorLayout>,
    /// Union of every placed rectangle
    pub bounds: BoundingBox,
}

impl ChartLayout {
    /// Recompute `bounds` from the current rectangles
    pub fn compute_bounds(&mut self) {
        let mut rects = self.rects.values();
        let Some(first) = rects.next() else {
            self.bounds = BoundingBox::zero();
            return;
        };
        self.bounds = rects.fold(*first, |acc, r| acc.union(r));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors() {
        let b = BoundingBox::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(b.bottom_center(), Point::new(60.0, 60.0));
        assert_eq!(b.top_center(), Point::new(60.0, 20.0));
        assert_eq!(b.center(), Point::new(60.0, 40.0));
        assert_eq!(b.right(), 110.0);
        assert_eq!(b.bottom(), 60.0);
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, 5.0, 10.0, 10.0);
        assert_eq!(a.union(&b), BoundingBox::new(0.0, 0.0, 30.0, 15.0));
    }

    #[test]
    fn test_compute_bounds_of_empty_layout_is_zero() {
        let mut layout = ChartLayout::default();
        layout.compute_bounds();
        assert_eq!(layout.bounds, BoundingBox::zero());
    }
}
