//! Chart geometry generators.
//!
//! Each generator turns a dataset plus its scales into pixel geometry in
//! plot coordinates, and reports one [`Anchor`] per data point for the
//! interaction layer.

mod bar;
mod line;

pub use bar::{Bar, BarGeometry};
pub use line::{Curve, LineGeometry};

use crate::geometry::Point;

/// The pixel a data point is pinned to, plus the value it shows on hover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Position of the point in the dataset.
    pub index: usize,
    /// Anchor pixel in plot coordinates.
    pub point: Point,
    /// Y value of the data point.
    pub value: f64,
}
