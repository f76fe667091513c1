//! Render-tree node types.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

/// Horizontal text alignment relative to the text position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR).
    #[default]
    Start,
    /// Center text at position.
    Middle,
    /// Align text end at position (right-aligned for LTR).
    End,
}

/// Translation followed by rotation, applied to a node's coordinate frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    /// Translation in parent coordinates.
    pub translate: Point,
    /// Rotation in degrees (negative is counter-clockwise on screen).
    pub rotate: f32,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        translate: Point::ORIGIN,
        rotate: 0.0,
    };

    /// Pure translation.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: Point::new(x, y),
            rotate: 0.0,
        }
    }

    /// Whether the transform does nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// One command of a path outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight segment to a point.
    LineTo(Point),
    /// Horizontal segment to an x coordinate.
    HorizontalTo(f32),
    /// Vertical segment to a y coordinate.
    VerticalTo(f32),
}

/// Outline of a path node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Polyline through `points` (empty input gives an empty path).
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        let mut data = Self::new();
        for (i, &p) in points.iter().enumerate() {
            data = if i == 0 { data.move_to(p) } else { data.line_to(p) };
        }
        data
    }

    /// Append a move.
    #[must_use]
    pub fn move_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Append a straight segment.
    #[must_use]
    pub fn line_to(mut self, p: Point) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Append a horizontal segment.
    #[must_use]
    pub fn horizontal_to(mut self, x: f32) -> Self {
        self.commands.push(PathCommand::HorizontalTo(x));
        self
    }

    /// Append a vertical segment.
    #[must_use]
    pub fn vertical_to(mut self, y: f32) -> Self {
        self.commands.push(PathCommand::VerticalTo(y));
        self
    }

    /// Commands in order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Points visited by `MoveTo`/`LineTo` commands, in order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// SVG path-data string (`M0,6V0H100V6`).
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(p) => d.push_str(&format!("M{},{}", p.x, p.y)),
                PathCommand::LineTo(p) => d.push_str(&format!("L{},{}", p.x, p.y)),
                PathCommand::HorizontalTo(x) => d.push_str(&format!("H{x}")),
                PathCommand::VerticalTo(y) => d.push_str(&format!("V{y}")),
            }
        }
        d
    }
}

/// A container that applies a transform to its children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    /// Space-separated class names.
    pub class: Option<String>,
    /// Transform of the group's frame.
    pub transform: Transform,
    /// Children in paint order.
    pub children: Vec<Node>,
}

impl Group {
    /// Empty group with the given class.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Self::default()
        }
    }

    /// Set the transform.
    #[must_use]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }
}

/// A stroked and/or filled outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    /// Space-separated class names.
    pub class: Option<String>,
    /// Outline.
    pub data: PathData,
    /// Stroke color, `None` for no stroke.
    pub stroke: Option<Rgba>,
    /// Stroke width in pixels.
    pub stroke_width: f32,
    /// Fill color, `None` for no fill.
    pub fill: Option<Rgba>,
}

impl PathNode {
    /// Unstroked, unfilled path.
    #[must_use]
    pub fn new(data: PathData) -> Self {
        Self {
            class: None,
            data,
            stroke: None,
            stroke_width: 1.0,
            fill: None,
        }
    }

    /// Set the class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the stroke.
    #[must_use]
    pub fn stroke(mut self, color: Rgba, width: f32) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }
}

/// An axis-aligned rectangle, optionally bound to a data record.
#[derive(Debug, Clone, PartialEq)]
pub struct RectNode {
    /// Space-separated class names.
    pub class: Option<String>,
    /// Bounds in the parent frame.
    pub rect: Rect,
    /// Fill color.
    pub fill: Rgba,
    /// Index of the data point this rectangle represents.
    pub data_index: Option<usize>,
}

impl RectNode {
    /// Rectangle with the given class and fill.
    #[must_use]
    pub fn new(class: impl Into<String>, rect: Rect, fill: Rgba) -> Self {
        Self {
            class: Some(class.into()),
            rect,
            fill,
            data_index: None,
        }
    }

    /// Bind to a data point.
    #[must_use]
    pub fn data_index(mut self, index: usize) -> Self {
        self.data_index = Some(index);
        self
    }
}

/// A text leaf.
///
/// `rotation` turns the text's own frame before `position` is applied,
/// matching SVG `transform="rotate(r)"` on a `<text x y>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    /// Space-separated class names.
    pub class: Option<String>,
    /// Anchor point in the (rotated) text frame.
    pub position: Point,
    /// Vertical shift in em units.
    pub dy_em: f32,
    /// Text content.
    pub content: String,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Font size in pixels, `None` to inherit.
    pub font_size: Option<f32>,
}

impl TextNode {
    /// Start-anchored, unrotated text.
    #[must_use]
    pub fn new(position: Point, content: impl Into<String>) -> Self {
        Self {
            class: None,
            position,
            dy_em: 0.0,
            content: content.into(),
            anchor: TextAnchor::Start,
            rotation: 0.0,
            font_size: None,
        }
    }

    /// Set the class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the anchor.
    #[must_use]
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the rotation in degrees.
    #[must_use]
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set the vertical em shift.
    #[must_use]
    pub fn dy_em(mut self, em: f32) -> Self {
        self.dy_em = em;
        self
    }

    /// Set the font size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }
}

/// A drawable node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Container.
    Group(Group),
    /// Outline.
    Path(PathNode),
    /// Rectangle.
    Rect(RectNode),
    /// Text leaf.
    Text(TextNode),
}

impl Node {
    /// Class attribute of the node.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        match self {
            Node::Group(g) => g.class.as_deref(),
            Node::Path(p) => p.class.as_deref(),
            Node::Rect(r) => r.class.as_deref(),
            Node::Text(t) => t.class.as_deref(),
        }
    }

    /// Whether one of the node's classes equals `name`.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.class()
            .is_some_and(|c| c.split_whitespace().any(|part| part == name))
    }

    /// Children (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Group(g) => &g.children,
            _ => &[],
        }
    }
}

impl From<Group> for Node {
    fn from(g: Group) -> Self {
        Node::Group(g)
    }
}

impl From<PathNode> for Node {
    fn from(p: PathNode) -> Self {
        Node::Path(p)
    }
}

impl From<RectNode> for Node {
    fn from(r: RectNode) -> Self {
        Node::Rect(r)
    }
}

impl From<TextNode> for Node {
    fn from(t: TextNode) -> Self {
        Node::Text(t)
    }
}

/// An immutable, ordered description of what to draw.
///
/// Children paint in order, so later nodes cover earlier ones. Two trees
/// compare equal when they have the same structure and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTree {
    width: f32,
    height: f32,
    root: Node,
}

impl RenderTree {
    /// Wrap a root group for a surface of the given outer size.
    #[must_use]
    pub fn new(width: f32, height: f32, root: Group) -> Self {
        Self {
            width,
            height,
            root: Node::Group(root),
        }
    }

    /// Outer surface size.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Root node (always a group).
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Depth-first, pre-order traversal of every node including the root.
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![&self.root],
        }
    }

    /// Every node carrying class `name`, in paint order.
    #[must_use]
    pub fn find_class(&self, name: &str) -> Vec<&Node> {
        self.nodes().filter(|n| n.has_class(name)).collect()
    }

    /// Every text leaf, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&TextNode> {
        self.nodes()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }
}

/// Pre-order iterator over a [`RenderTree`].
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
