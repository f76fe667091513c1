//! Line chart geometry.

use serde::{Deserialize, Serialize};

use super::Anchor;
use crate::chart::ChartKind;
use crate::color::Rgba;
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::render::{Node, PathData, PathNode};
use crate::scale::{LinearScale, Scale};

/// How consecutive vertices are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Curve {
    /// Straight segments.
    #[default]
    Linear,
    /// Horizontal to the next x, then vertical to its y.
    StepAfter,
}

/// One polyline through every data point, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGeometry {
    anchors: Vec<Anchor>,
    curve: Curve,
}

impl LineGeometry {
    /// Map every point to `(x(p.x), y(p.y))`.
    ///
    /// # Errors
    ///
    /// [`Error::DataShape`] if a point has no numeric x.
    pub fn generate(
        data: &Dataset,
        x_scale: &LinearScale,
        y_scale: &LinearScale,
        curve: Curve,
    ) -> Result<Self> {
        let anchors = data
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let x = p.numeric_x().ok_or(Error::DataShape {
                    index,
                    kind: ChartKind::Line,
                })?;
                Ok(Anchor {
                    index,
                    point: Point::new(x_scale.scale(x), y_scale.scale(p.y)),
                    value: p.y,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { anchors, curve })
    }

    /// Vertices in dataset order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.anchors.iter().map(|a| a.point).collect()
    }

    /// Per-point anchors (the vertices themselves).
    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Curve style.
    #[must_use]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Outline of the line.
    #[must_use]
    pub fn path(&self) -> PathData {
        match self.curve {
            Curve::Linear => PathData::polyline(&self.points()),
            Curve::StepAfter => {
                let mut points = self.anchors.iter().map(|a| a.point);
                let Some(first) = points.next() else {
                    return PathData::new();
                };
                points.fold(PathData::new().move_to(first), |d, p| {
                    d.horizontal_to(p.x).vertical_to(p.y)
                })
            }
        }
    }

    /// Stroked, unfilled path with class `line`.
    #[must_use]
    pub fn to_node(&self, color: Rgba, width: f32) -> Node {
        PathNode::new(self.path()).class("line").stroke(color, width).into()
    }
}
