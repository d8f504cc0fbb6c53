use super::scene::Scene;
use crate::config::EditorConfig;
use std::fmt;

/// Writes a scene as a standalone SVG document.
///
/// Links are emitted before nodes so node circles sit on top of path ends.
pub struct SvgDocument<'a> {
    pub scene: &'a Scene,
    pub config: &'a EditorConfig,
}

impl<'a> SvgDocument<'a> {
    pub fn new(scene: &'a Scene, config: &'a EditorConfig) -> Self {
        Self { scene, config }
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            c.canvas_width, c.canvas_height
        )?;
        writeln!(f, "  <defs>")?;
        writeln!(
            f,
            r#"    <marker id="end-arrow" viewBox="0 -5 10 10" refX="{}" refY="0" markerWidth="{}" markerHeight="{}" orient="auto">"#,
            c.marker_ref_x(),
            c.marker_size,
            c.marker_size
        )?;
        writeln!(f, r#"      <path d="M0,-5L10,0L0,5"/>"#)?;
        writeln!(f, "    </marker>")?;
        writeln!(f, "  </defs>")?;
        writeln!(f, r#"  <g class="graph">"#)?;

        writeln!(f, r#"    <g class="links">"#)?;
        for link in self.scene.links() {
            writeln!(
                f,
                r#"      <path data-link="{}-{}" d="{}" style="stroke: {}; stroke-width: {}px" marker-end="url(#end-arrow)"/>"#,
                escape(link.key.0.as_str()),
                escape(link.key.1.as_str()),
                link.path(),
                escape(&c.link_stroke),
                c.link_stroke_width
            )?;
        }
        writeln!(f, "    </g>")?;

        writeln!(f, r#"    <g class="nodes">"#)?;
        for node in self.scene.nodes() {
            writeln!(
                f,
                r#"      <g data-node="{}" transform="{}">"#,
                escape(node.node_id.as_str()),
                node.transform()
            )?;
            writeln!(
                f,
                r#"        <circle r="{}" style="stroke: {}; stroke-width: {}px; fill: {}"/>"#,
                c.node_radius,
                escape(&c.node_stroke),
                c.node_stroke_width,
                escape(&c.node_fill)
            )?;
            writeln!(
                f,
                r#"        <text text-anchor="middle">{}</text>"#,
                escape(&node.label)
            )?;
            writeln!(f, "      </g>")?;
        }
        writeln!(f, "    </g>")?;

        writeln!(f, "  </g>")?;
        writeln!(f, "</svg>")
    }
}

/// Renders the scene to an SVG string.
pub fn to_svg(scene: &Scene, config: &EditorConfig) -> String {
    SvgDocument::new(scene, config).to_string()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
