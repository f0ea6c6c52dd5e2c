//! ParentFlow - an org-chart hierarchy editor core
//!
//! This library provides the data model, mutation store, hierarchy queries,
//! connector routing, and SVG rendering for level-based org charts.
//!
//! # Example
//!
//! ```rust
//! use parentflow::{OrgStore, PositionNode};
//!
//! let mut store = OrgStore::seed();
//! store.add_node(PositionNode::new("10", "Designer").in_section("Engineering"));
//! store.move_node("10", 3, Some("4".to_string()));
//! assert!(store.descendants("2").contains(&"10".to_string()));
//! ```

pub mod document;
pub mod error;
pub mod hierarchy;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod store;

pub use document::{ChartDocument, DocumentError};
pub use error::ChartError;
pub use hierarchy::{ancestors, descendants};
pub use layout::{
    compute_connector, route_connectors, BoundingBox, ChartLayout, ConnectorLayout, ConnectorPath,
    LayoutConfig, PathSegment, Point,
};
pub use model::{PositionNode, SalaryType};
pub use renderer::{render_svg, SvgConfig};
pub use store::OrgStore;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the chart document
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Consistency violation found by strict validation
    #[error("invalid chart: {0}")]
    Invalid(#[from] ChartError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Run strict document validation before rendering
    pub strict: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable strict validation
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Render chart TOML to SVG with default configuration
///
/// This is the main entry point for the library: parse the document, place
/// the cards, route the connectors, and emit SVG.
///
/// # Example
///
/// ```rust
/// use parentflow::render;
///
/// let svg = render(parentflow::document::SEED_CHART).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render chart TOML to SVG with a custom configuration
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let doc: ChartDocument = source.parse()?;
    if config.strict {
        doc.validate()?;
    }
    let title = doc.title.clone();
    let store = doc.into_store();
    Ok(render_svg(
        &store,
        title.as_deref(),
        &config.layout,
        &config.svg,
    ))
}
