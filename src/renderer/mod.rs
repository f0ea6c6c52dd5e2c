//! SVG renderer for drawing a chart without a browser

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, SvgBuilder};
