//! Configuration for chart layout

/// Configuration options for level-row placement
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Size of every node card (width, height)
    pub node_size: (f64, f64),

    /// Horizontal gap between cards in a level row
    pub node_spacing: f64,

    /// Vertical gap between level rows
    pub level_spacing: f64,

    /// Vertical gap between cards in the unassigned pool column
    pub pool_spacing: f64,

    /// Horizontal gap between the pool column and the chart area
    pub pool_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: (160.0, 64.0),
            node_spacing: 24.0,
            level_spacing: 60.0,
            pool_spacing: 16.0,
            pool_gap: 48.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node card size
    pub fn with_node_size(mut self, width: f64, height: f64) -> Self {
        self.node_size = (width, height);
        self
    }

    /// Set the gap between cards in a row
    pub fn with_node_spacing(mut self, spacing: f64) -> Self {
        self.node_spacing = spacing;
        self
    }

    /// Set the gap between level rows
    pub fn with_level_spacing(mut self, spacing: f64) -> Self {
        self.level_spacing = spacing;
        self
    }

    /// Set the gap between pool cards
    pub fn with_pool_spacing(mut self, spacing: f64) -> Self {
        self.pool_spacing = spacing;
        self
    }

    /// Set the gap between the pool column and the chart
    pub fn with_pool_gap(mut self, gap: f64) -> Self {
        self.pool_gap = gap;
        self
    }
}
