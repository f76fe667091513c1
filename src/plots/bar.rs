//! Bar chart geometry.

use super::Anchor;
use crate::chart::ChartKind;
use crate::color::Rgba;
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::render::{Group, Node, RectNode};
use crate::scale::{BandScale, LinearScale, Scale};

/// One bar: the data point it draws and its rectangle in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Position of the point in the dataset.
    pub index: usize,
    /// Y value drawn.
    pub value: f64,
    /// Bar rectangle.
    pub rect: Rect,
}

impl Bar {
    /// Top-centre of the bar at the value end.
    #[must_use]
    pub fn anchor(&self, baseline: f32) -> Point {
        let x = self.rect.x + self.rect.width / 2.0;
        // For a bar hanging below the baseline the value end is the bottom edge.
        let y = if self.rect.y < baseline {
            self.rect.y
        } else {
            self.rect.bottom()
        };
        Point::new(x, y)
    }
}

/// One rectangle per data point, grown up from the bottom of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    bars: Vec<Bar>,
    baseline: f32,
}

impl BarGeometry {
    /// Place a bar for every point in its category's band.
    ///
    /// The bar spans from `y(value)` down to `inner_height`. Values that map
    /// below the baseline produce a bar hanging from it, so heights are never
    /// negative.
    ///
    /// # Errors
    ///
    /// [`Error::DataShape`] if a point has no category or its category is not
    /// in the band scale.
    pub fn generate(
        data: &Dataset,
        band: &BandScale,
        y_scale: &LinearScale,
        inner_height: f32,
    ) -> Result<Self> {
        let width = band.bandwidth();
        let bars = data
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let shape_error = || Error::DataShape {
                    index,
                    kind: ChartKind::Bar,
                };
                let category = p.category().ok_or_else(shape_error)?;
                let x = band.scale(&*category).ok_or_else(shape_error)?;

                let top = y_scale.scale(p.y);
                let rect = if top <= inner_height {
                    Rect::new(x, top, width, inner_height - top)
                } else {
                    Rect::new(x, inner_height, width, top - inner_height)
                };
                Ok(Bar {
                    index,
                    value: p.y,
                    rect,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            bars,
            baseline: inner_height,
        })
    }

    /// Bars in dataset order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Per-point anchors (top-centre of each bar).
    #[must_use]
    pub fn anchors(&self) -> Vec<Anchor> {
        self.bars
            .iter()
            .map(|bar| Anchor {
                index: bar.index,
                point: bar.anchor(self.baseline),
                value: bar.value,
            })
            .collect()
    }

    /// Group of filled rectangles with class `bar`.
    #[must_use]
    pub fn to_node(&self, color: Rgba) -> Node {
        Group::new("bars")
            .children(
                self.bars
                    .iter()
                    .map(|bar| RectNode::new("bar", bar.rect, color).data_index(bar.index)),
            )
            .into()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_bars_non_negative_and_inside(
            values in prop::collection::vec(0.0f64..1.0e6, 1..30),
            height in 1.0f32..1000.0
        ) {
            let points = values
                .iter()
                .enumerate()
                .map(|(i, &v)| crate::data::DataPoint::labeled(format!("c{i}"), v))
                .collect();
            let data = Dataset::new(points);
            let band = BandScale::new(data.categories(), (0.0, 500.0), 0.1).unwrap();
            let y = LinearScale::with_headroom(data.y_values(), (height, 0.0)).unwrap();
            let geometry = BarGeometry::generate(&data, &band, &y, height).unwrap();
            for bar in geometry.bars() {
                prop_assert!(bar.rect.height >= 0.0);
                prop_assert!(bar.rect.y >= -1e-3);
                prop_assert!(bar.rect.bottom() <= height + 1e-3);
            }
        }
    }
}
