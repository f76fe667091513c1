//! Output encoders.
//!
//! Encoders consume a finished [`RenderTree`](crate::render::RenderTree);
//! chart composition never calls them.

mod svg;

pub use svg::SvgEncoder;
