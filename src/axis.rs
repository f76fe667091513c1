//! Axis geometry: tick placement, tick labels and axis titles.
//!
//! [`AxisBuilder`] reads a scale through the [`AxisScale`] trait and
//! produces an [`AxisGeometry`], which is still plain data. Turning it into
//! render-tree nodes is a separate step ([`AxisGeometry::to_node`]).

use crate::chart::ChartOptions;
use crate::color::Rgba;
use crate::geometry::Point;
use crate::layout::PlotArea;
use crate::render::{Group, Node, PathData, PathNode, TextAnchor, TextNode, Transform};
use crate::scale::{BandScale, LinearScale, Scale};

/// Default number of ticks asked of continuous scales.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Rotation applied to bottom-axis tick labels, in degrees.
pub const BOTTOM_LABEL_ROTATION: f32 = -45.0;

/// Which side of the plot the axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal axis below the plot, ticks pointing down.
    Bottom,
    /// Vertical axis left of the plot, ticks pointing left.
    Left,
}

impl Orientation {
    fn class(self) -> &'static str {
        match self {
            Orientation::Bottom => "axis axis-bottom",
            Orientation::Left => "axis axis-left",
        }
    }
}

/// One tick: where it sits along the axis and what it says.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis.
    pub position: f32,
    /// Label text.
    pub label: String,
}

/// A scale that can be drawn as an axis.
pub trait AxisScale {
    /// Ticks for the scale; `count` is a hint that banded scales ignore.
    fn axis_ticks(&self, count: usize) -> Vec<AxisTick>;

    /// Pixel extent covered by the axis line.
    fn pixel_range(&self) -> (f32, f32);
}

impl AxisScale for LinearScale {
    fn axis_ticks(&self, count: usize) -> Vec<AxisTick> {
        let ticks = self.ticks(count);
        ticks
            .values
            .iter()
            .map(|&v| AxisTick {
                position: self.scale(v),
                label: ticks.label(v),
            })
            .collect()
    }

    fn pixel_range(&self) -> (f32, f32) {
        self.range()
    }
}

impl AxisScale for BandScale {
    fn axis_ticks(&self, _count: usize) -> Vec<AxisTick> {
        self.domain()
            .iter()
            .filter_map(|category| {
                self.band_center(category).map(|position| AxisTick {
                    position,
                    label: category.clone(),
                })
            })
            .collect()
    }

    fn pixel_range(&self) -> (f32, f32) {
        let (start, end) = self.range();
        (start.unwrap_or(0.0), end.unwrap_or(0.0))
    }
}

/// Computed axis, ready to turn into nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGeometry {
    /// Side of the plot.
    pub orientation: Orientation,
    /// Pixel extent of the axis line.
    pub range: (f32, f32),
    /// Ticks in scale order.
    pub ticks: Vec<AxisTick>,
    /// Length of tick marks.
    pub tick_size: f32,
    /// Gap between tick mark and label.
    pub tick_padding: f32,
    /// Tick label rotation in degrees.
    pub label_rotation: f32,
    /// Tick label alignment.
    pub label_anchor: TextAnchor,
    /// Where the axis group sits in plot coordinates.
    pub offset: Point,
    /// Axis line color.
    pub color: Rgba,
}

impl AxisGeometry {
    /// Move the axis group (the bottom axis sits at `(0, inner_height)`).
    #[must_use]
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Convert into a render-tree group: domain line, then one group per tick.
    #[must_use]
    pub fn to_node(&self) -> Node {
        let (r0, r1) = self.range;
        let size = self.tick_size;
        let domain = match self.orientation {
            Orientation::Bottom => PathData::new()
                .move_to(Point::new(r0, size))
                .vertical_to(0.0)
                .horizontal_to(r1)
                .vertical_to(size),
            Orientation::Left => PathData::new()
                .move_to(Point::new(-size, r0))
                .horizontal_to(0.0)
                .vertical_to(r1)
                .horizontal_to(-size),
        };

        let ticks = self.ticks.iter().map(|tick| self.tick_node(tick));

        Group::new(self.orientation.class())
            .transform(Transform {
                translate: self.offset,
                rotate: 0.0,
            })
            .child(PathNode::new(domain).class("domain").stroke(self.color, 1.0))
            .children(ticks)
            .into()
    }

    fn tick_node(&self, tick: &AxisTick) -> Group {
        let reach = self.tick_size + self.tick_padding;
        let (translate, mark, label_at, dy_em) = match self.orientation {
            Orientation::Bottom => (
                Transform::translate(tick.position, 0.0),
                PathData::new().move_to(Point::ORIGIN).vertical_to(self.tick_size),
                Point::new(0.0, reach),
                0.71,
            ),
            Orientation::Left => (
                Transform::translate(0.0, tick.position),
                PathData::new().move_to(Point::ORIGIN).horizontal_to(-self.tick_size),
                Point::new(-reach, 0.0),
                0.32,
            ),
        };

        Group::new("tick")
            .transform(translate)
            .child(PathNode::new(mark).stroke(self.color, 1.0))
            .child(
                TextNode::new(label_at, tick.label.clone())
                    .class("tick-label")
                    .anchor(self.label_anchor)
                    .rotation(self.label_rotation)
                    .dy_em(dy_em),
            )
    }
}

/// Builds [`AxisGeometry`] from scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBuilder {
    tick_count: usize,
    tick_size: f32,
    tick_padding: f32,
}

impl Default for AxisBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisBuilder {
    /// Builder with the default tick count (10), 6px ticks and 3px padding.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            tick_size: 6.0,
            tick_padding: 3.0,
        }
    }

    /// Set the tick count hint (at least 1).
    #[must_use]
    pub fn tick_count(mut self, count: usize) -> Self {
        self.tick_count = count.max(1);
        self
    }

    /// Build the axis for `scale` on the given side.
    #[must_use]
    pub fn build(&self, scale: &dyn AxisScale, orientation: Orientation) -> AxisGeometry {
        let mut axis = self.empty(orientation, scale.pixel_range());
        axis.ticks = scale.axis_ticks(self.tick_count);
        axis
    }

    /// An axis line without ticks, used when there is no data.
    #[must_use]
    pub fn empty(&self, orientation: Orientation, range: (f32, f32)) -> AxisGeometry {
        let label_rotation = match orientation {
            Orientation::Bottom => BOTTOM_LABEL_ROTATION,
            Orientation::Left => 0.0,
        };
        AxisGeometry {
            orientation,
            range,
            ticks: Vec::new(),
            tick_size: self.tick_size,
            tick_padding: self.tick_padding,
            label_rotation,
            label_anchor: TextAnchor::End,
            offset: Point::ORIGIN,
            color: Rgba::BLACK,
        }
    }
}

/// Optional axis titles for the x and y axes, in plot coordinates.
///
/// Only options that are set produce a node.
#[must_use]
pub fn axis_titles(area: PlotArea, options: &ChartOptions) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(label) = &options.x_label {
        nodes.push(
            TextNode::new(Point::new(area.width / 2.0, area.height + 40.0), label.clone())
                .class("x-label")
                .anchor(TextAnchor::Middle)
                .into(),
        );
    }
    if let Some(label) = &options.y_label {
        nodes.push(
            TextNode::new(Point::new(-area.height / 2.0, -40.0), label.clone())
                .class("y-label")
                .anchor(TextAnchor::Middle)
                .rotation(-90.0)
                .into(),
        );
    }
    nodes
}
