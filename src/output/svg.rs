//! SVG output encoder.
//!
//! Serializes a [`RenderTree`] to an SVG document. Group transforms become
//! `transform="translate(x,y) rotate(r)"`, text rotation is applied on the
//! `<text>` element itself, and all text is XML-escaped.

use crate::color::Rgba;
use crate::error::Result;
use crate::render::{Group, Node, PathNode, RectNode, RenderTree, TextAnchor, TextNode, Transform};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG encoder for render trees.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// Font family for all text
    font_family: String,
    /// Default font size for text without one
    font_size: f32,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgEncoder {
    /// Create an encoder with a white background and 10px sans-serif text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Some(Rgba::WHITE),
            font_family: "sans-serif".to_string(),
            font_size: 10.0,
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Render a tree to an SVG string.
    #[must_use]
    pub fn render(&self, tree: &RenderTree) -> String {
        let mut svg = String::with_capacity(4096);
        let (width, height) = tree.size();

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="{}" font-size="{}">"#,
            escape(&self.font_family),
            self.font_size
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                bg.to_css()
            );
        }

        write_node(&mut svg, tree.root(), 1);

        svg.push_str("</svg>\n");
        svg
    }

    /// Render a tree and write it to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, tree: &RenderTree, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render(tree).as_bytes())?;
        Ok(())
    }
}

fn write_node(svg: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Group(group) => write_group(svg, group, depth),
        Node::Path(path) => {
            let _ = writeln!(svg, "{indent}{}", path_to_svg(path));
        }
        Node::Rect(rect) => {
            let _ = writeln!(svg, "{indent}{}", rect_to_svg(rect));
        }
        Node::Text(text) => {
            let _ = writeln!(svg, "{indent}{}", text_to_svg(text));
        }
    }
}

fn write_group(svg: &mut String, group: &Group, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(svg, "{indent}<g{}", class_attr(group.class.as_deref()));
    if !group.transform.is_identity() {
        let _ = write!(svg, r#" transform="{}""#, transform_attr(&group.transform));
    }
    if group.children.is_empty() {
        svg.push_str("/>\n");
        return;
    }
    svg.push_str(">\n");
    for child in &group.children {
        write_node(svg, child, depth + 1);
    }
    let _ = writeln!(svg, "{indent}</g>");
}

fn transform_attr(transform: &Transform) -> String {
    let Transform { translate, rotate } = transform;
    if *rotate == 0.0 {
        format!("translate({},{})", translate.x, translate.y)
    } else {
        format!("translate({},{}) rotate({rotate})", translate.x, translate.y)
    }
}

fn class_attr(class: Option<&str>) -> String {
    class
        .map(|c| format!(r#" class="{}""#, escape(c)))
        .unwrap_or_default()
}

fn path_to_svg(path: &PathNode) -> String {
    let fill_attr = path.fill.map_or_else(|| "none".to_string(), Rgba::to_css);
    let stroke_attr = path
        .stroke
        .map(|s| format!(r#" stroke="{}" stroke-width="{}""#, s.to_css(), path.stroke_width))
        .unwrap_or_default();
    format!(
        r#"<path{} d="{}" fill="{fill_attr}"{stroke_attr}/>"#,
        class_attr(path.class.as_deref()),
        path.data.to_svg()
    )
}

fn rect_to_svg(node: &RectNode) -> String {
    let r = node.rect;
    let index_attr = node
        .data_index
        .map(|i| format!(r#" data-index="{i}""#))
        .unwrap_or_default();
    format!(
        r#"<rect{} x="{}" y="{}" width="{}" height="{}" fill="{}"{index_attr}/>"#,
        class_attr(node.class.as_deref()),
        r.x,
        r.y,
        r.width,
        r.height,
        node.fill.to_css()
    )
}

fn text_to_svg(text: &TextNode) -> String {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let mut attrs = format!(
        r#"{} x="{}" y="{}" text-anchor="{anchor}""#,
        class_attr(text.class.as_deref()),
        text.position.x,
        text.position.y
    );
    if text.dy_em != 0.0 {
        let _ = write!(attrs, r#" dy="{}em""#, text.dy_em);
    }
    if text.rotation != 0.0 {
        let _ = write!(attrs, r#" transform="rotate({})""#, text.rotation);
    }
    if let Some(size) = text.font_size {
        let _ = write!(attrs, r#" font-size="{size}""#);
    }
    format!("<text{attrs}>{}</text>", escape(&text.content))
}

/// Escape XML special characters.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
