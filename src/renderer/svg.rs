//! SVG generation from a placed chart

use crate::layout::{self, BoundingBox, ChartLayout, LayoutConfig};
use crate::model::PositionNode;
use crate::store::OrgStore;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    connectors: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            connectors: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the default card/connector stylesheet
    pub fn add_default_styles(&mut self) {
        let p = self.prefix();
        self.styles.extend([
            format!(".{p}card {{ fill: #ffffff; stroke: #90a4ae; stroke-width: 1.5; }}"),
            format!(".{p}card-pool {{ stroke-dasharray: 6,3; }}"),
            format!(".{p}name {{ font: 600 14px sans-serif; fill: #263238; }}"),
            format!(".{p}meta {{ font: 11px sans-serif; fill: #607d8b; }}"),
            format!(".{p}connector {{ fill: none; stroke: #90a4ae; stroke-width: 2; }}"),
            format!(".{p}title {{ font: 700 18px sans-serif; fill: #263238; }}"),
        ]);
    }

    /// Add one routed connector path
    pub fn add_connector(&mut self, d: &str) {
        let prefix = self.prefix();
        self.connectors.push(format!(
            "{}<path class=\"{}connector\" d=\"{}\"/>",
            self.indent_str(),
            prefix,
            d
        ));
    }

    /// Add a node card: rectangle, name, and a section/salary caption
    pub fn add_node_card(&mut self, node: &PositionNode, rect: &BoundingBox) {
        let prefix = self.prefix();
        let indent = self.indent_str();
        let nl = self.newline();

        let pool_class = if node.is_unassigned() {
            format!(" {}card-pool", prefix)
        } else {
            String::new()
        };

        let mut card = format!(
            "{indent}<g id=\"node-{id}\">{nl}\
             {indent}  <rect class=\"{prefix}card{pool_class}\" x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"8\"/>{nl}\
             {indent}  <text class=\"{prefix}name\" x=\"{cx:.2}\" y=\"{ny:.2}\" text-anchor=\"middle\">{name}</text>",
            id = escape_xml(&node.id),
            x = rect.x,
            y = rect.y,
            w = rect.width,
            h = rect.height,
            cx = rect.center().x,
            ny = rect.y + rect.height / 2.0,
            name = escape_xml(&node.name),
        );

        let mut meta = vec![node.salary_type.label().to_string()];
        if let Some(section) = &node.section {
            meta.insert(0, section.clone());
        }
        card.push_str(&format!(
            "{nl}{indent}  <text class=\"{prefix}meta\" x=\"{cx:.2}\" y=\"{my:.2}\" text-anchor=\"middle\">{meta}</text>",
            cx = rect.center().x,
            my = rect.y + rect.height / 2.0 + 16.0,
            meta = escape_xml(&meta.join(" · ")),
        ));

        card.push_str(&format!("{nl}{indent}</g>"));
        self.elements.push(card);
    }

    /// Add the chart title above the drawing
    pub fn add_title(&mut self, title: &str, bounds: &BoundingBox) {
        let prefix = self.prefix();
        self.elements.push(format!(
            "{}<text class=\"{}title\" x=\"{:.2}\" y=\"{:.2}\">{}</text>",
            self.indent_str(),
            prefix,
            bounds.x,
            bounds.y - 12.0,
            escape_xml(title)
        ));
    }

    /// Assemble the final SVG document around the given drawing bounds
    pub fn build(self, bounds: &BoundingBox) -> String {
        let pad = self.config.viewbox_padding;
        let nl = if self.config.pretty_print { "\n" } else { "" };

        let view_x = bounds.x - pad;
        let view_y = bounds.y - pad;
        let view_w = bounds.width + pad * 2.0;
        let view_h = bounds.height + pad * 2.0;

        let mut svg = String::new();
        if self.config.standalone {
            svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
            svg.push_str(nl);
        }
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.2} {:.2} {:.2} {:.2}\" width=\"{:.0}\" height=\"{:.0}\">",
            view_x, view_y, view_w, view_h, view_w, view_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            let sep = if self.config.pretty_print { "\n    " } else { " " };
            svg.push_str(&format!(
                "  <style>{nl}    {}{nl}  </style>{nl}",
                self.styles.join(sep)
            ));
        }

        // Connectors first so cards draw over the line ends.
        if !self.connectors.is_empty() {
            svg.push_str(&format!(
                "  <g class=\"{}connectors\">{nl}{}{nl}  </g>{nl}",
                self.prefix(),
                self.connectors.join(nl)
            ));
        }
        if !self.elements.is_empty() {
            svg.push_str(&format!(
                "  <g class=\"{}nodes\">{nl}{}{nl}  </g>{nl}",
                self.prefix(),
                self.elements.join(nl)
            ));
        }

        svg.push_str("</svg>");
        svg.push_str(nl);
        svg
    }
}

/// Render a whole store as an SVG document
pub fn render_svg(
    store: &OrgStore,
    title: Option<&str>,
    layout_config: &LayoutConfig,
    svg_config: &SvgConfig,
) -> String {
    let chart: ChartLayout = layout::compute(store, layout_config);
    let mut builder = SvgBuilder::new(svg_config.clone());
    builder.add_default_styles();

    for conn in &chart.connectors {
        builder.add_connector(&conn.path.to_svg_d());
    }
    for node in store.nodes() {
        // Duplicate ids: only the first node owns the rect, later ones skip.
        if already_drawn(store, node) {
            continue;
        }
        if let Some(rect) = chart.rects.get(&node.id) {
            builder.add_node_card(node, rect);
        }
    }
    if let Some(title) = title {
        builder.add_title(title, &chart.bounds);
    }

    builder.build(&chart.bounds)
}

/// Whether an earlier node with the same id already claimed the card
fn already_drawn(store: &OrgStore, node: &PositionNode) -> bool {
    store
        .nodes()
        .iter()
        .take_while(|n| !std::ptr::eq(*n, node))
        .any(|n| n.id == node.id)
}

/// Escape the five XML-significant characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
