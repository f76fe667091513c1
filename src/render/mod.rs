//! Render tree: the immutable output of chart composition.
//!
//! A [`RenderTree`] is plain data. It holds groups, paths, rectangles and
//! text leaves in paint order, with geometry already in pixels and any
//! rotation or alignment recorded as attributes. Painting it is the job of
//! a separate drawing stage such as [`crate::output::SvgEncoder`].

mod tree;

pub use tree::{
    Group, Node, Nodes, PathCommand, PathData, PathNode, RectNode, RenderTree, TextAnchor,
    TextNode, Transform,
};
