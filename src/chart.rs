//! Chart composition: data and options in, render tree and hit regions out.
//!
//! # Example
//!
//! ```
//! use dataviz::prelude::*;
//!
//! let data = Dataset::from_xy(&[(0.0, 10.0), (1.0, 20.0), (2.0, 5.0)]);
//! let chart = ChartComposer::default()
//!     .render_line_chart(&data, &ChartOptions::default().title("Scores"))
//!     .unwrap();
//!
//! assert_eq!(chart.hit_regions.len(), 3);
//! assert_eq!(chart.tree.find_class("line").len(), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axis::{axis_titles, AxisBuilder, AxisGeometry, Orientation};
use crate::config::ChartConfig;
use crate::data::Dataset;
use crate::error::Result;
use crate::geometry::Point;
use crate::interaction::{build_hit_regions, hit_region_node, HitRegion, InteractionLayer};
use crate::layout::PlotArea;
use crate::plots::{Anchor, BarGeometry, LineGeometry};
use crate::render::{Group, Node, PathData, PathNode, RenderTree, TextAnchor, TextNode, Transform};
use crate::scale::{BandScale, LinearScale};

/// Font size of the chart title in pixels.
const TITLE_FONT_SIZE: f32 = 16.0;

/// Supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Polyline over a numeric x axis.
    Line,
    /// One bar per category over a banded x axis.
    Bar,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}

/// Optional text decorations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Title above the plot.
    #[serde(default)]
    pub title: Option<String>,
    /// Label under the x axis.
    #[serde(default)]
    pub x_label: Option<String>,
    /// Label beside the y axis.
    #[serde(default)]
    pub y_label: Option<String>,
}

impl ChartOptions {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }
}

/// Output of one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    /// Kind that was rendered.
    pub kind: ChartKind,
    /// What to draw.
    pub tree: RenderTree,
    /// One region per data point, in dataset order.
    pub hit_regions: Vec<HitRegion>,
    /// Top-left corner of the plot area in outer coordinates.
    pub plot_origin: Point,
    tooltip_offset: Point,
}

impl RenderedChart {
    /// Fresh interaction layer over this chart's hit regions.
    #[must_use]
    pub fn interaction(&self) -> InteractionLayer {
        InteractionLayer::new(self.hit_regions.clone(), self.plot_origin, self.tooltip_offset)
    }
}

/// Builds render trees for line and bar charts under one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartComposer {
    config: ChartConfig,
    area: PlotArea,
}

impl Default for ChartComposer {
    fn default() -> Self {
        let config = ChartConfig::default();
        let area = PlotArea {
            width: config.layout.width - config.layout.margins.left - config.layout.margins.right,
            height: config.layout.height - config.layout.margins.top - config.layout.margins.bottom,
        };
        Self { config, area }
    }
}

impl ChartComposer {
    /// Composer for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        let area = config.layout.inner()?;
        Ok(Self { config, area })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Plot area every chart is drawn into.
    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.area
    }

    /// Render either kind.
    ///
    /// # Errors
    ///
    /// See [`render_line_chart`](Self::render_line_chart) and
    /// [`render_bar_chart`](Self::render_bar_chart).
    pub fn render(
        &self,
        kind: ChartKind,
        data: &Dataset,
        options: &ChartOptions,
    ) -> Result<RenderedChart> {
        match kind {
            ChartKind::Line => self.render_line_chart(data, options),
            ChartKind::Bar => self.render_bar_chart(data, options),
        }
    }

    /// Line chart: linear x over the x extent, linear y over `[0, 1.1 * max]`.
    ///
    /// # Errors
    ///
    /// [`DataShape`](crate::Error::DataShape) if a point has no numeric x,
    /// [`NonFiniteValue`](crate::Error::NonFiniteValue) for NaN or infinite values,
    /// and [`ScaleDomain`](crate::Error::ScaleDomain) when the values are too large
    /// to span a scale.
    pub fn render_line_chart(
        &self,
        data: &Dataset,
        options: &ChartOptions,
    ) -> Result<RenderedChart> {
        data.check_shape(ChartKind::Line)?;
        let PlotArea { width, height } = self.area;
        let axes = self.axis_builder();

        if data.is_empty() {
            let geometry = PathNode::new(PathData::new())
                .class("line")
                .stroke(self.config.line.color, self.config.line.stroke_width);
            return Ok(self.assemble_empty(ChartKind::Line, geometry.into(), options));
        }

        let x = LinearScale::from_extent(data.x_values(), (0.0, width))?;
        let y = LinearScale::with_headroom(data.y_values(), (height, 0.0))?;
        let line = LineGeometry::generate(data, &x, &y, self.config.line.curve)?;
        let x_axis = axes.build(&x, Orientation::Bottom);
        let y_axis = axes.build(&y, Orientation::Left);
        let geometry = line.to_node(self.config.line.color, self.config.line.stroke_width);

        Ok(self.assemble(ChartKind::Line, [x_axis, y_axis], geometry, line.anchors(), options))
    }

    /// Bar chart: banded x over the categories, linear y over `[0, 1.1 * max]`.
    ///
    /// # Errors
    ///
    /// [`DataShape`](crate::Error::DataShape) if a point has no category,
    /// [`NonFiniteValue`](crate::Error::NonFiniteValue) for NaN or infinite values,
    /// and [`ScaleDomain`](crate::Error::ScaleDomain) when the y maximum overflows
    /// its headroom.
    pub fn render_bar_chart(
        &self,
        data: &Dataset,
        options: &ChartOptions,
    ) -> Result<RenderedChart> {
        data.check_shape(ChartKind::Bar)?;
        let PlotArea { width, height } = self.area;
        let axes = self.axis_builder();

        if data.is_empty() {
            return Ok(self.assemble_empty(ChartKind::Bar, Group::new("bars").into(), options));
        }

        let y = LinearScale::with_headroom(data.y_values(), (height, 0.0))?;
        let band = BandScale::new(data.categories(), (0.0, width), self.config.band_padding)?;

        let bars = BarGeometry::generate(data, &band, &y, height)?;
        let x_axis = axes.build(&band, Orientation::Bottom);
        let y_axis = axes.build(&y, Orientation::Left);
        let geometry = bars.to_node(self.config.bar_color);

        Ok(self.assemble(ChartKind::Bar, [x_axis, y_axis], geometry, &bars.anchors(), options))
    }

    fn axis_builder(&self) -> AxisBuilder {
        AxisBuilder::new().tick_count(self.config.tick_count)
    }

    fn assemble_empty(
        &self,
        kind: ChartKind,
        geometry: Node,
        options: &ChartOptions,
    ) -> RenderedChart {
        let PlotArea { width, height } = self.area;
        let axes = self.axis_builder();
        let x_axis = axes.empty(Orientation::Bottom, (0.0, width));
        let y_axis = axes.empty(Orientation::Left, (height, 0.0));
        self.assemble(kind, [x_axis, y_axis], geometry, &[], options)
    }

    fn assemble(
        &self,
        kind: ChartKind,
        [x_axis, y_axis]: [AxisGeometry; 2],
        geometry: Node,
        anchors: &[Anchor],
        options: &ChartOptions,
    ) -> RenderedChart {
        let area = self.area;
        let layout = &self.config.layout;
        let origin = layout.margins.origin();

        tracing::debug!(
            %kind,
            points = anchors.len(),
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            "composing chart"
        );

        let axes = Group::new("axes")
            .child(x_axis.with_offset(Point::new(0.0, area.height)).to_node())
            .child(y_axis.to_node())
            .children(axis_titles(area, options));

        let hit_regions = build_hit_regions(
            anchors,
            area.height,
            self.config.interaction.hit_half_width,
        );

        let mut root = Group::new("chart")
            .transform(Transform::translate(origin.x, origin.y))
            .child(axes)
            .child(geometry)
            .child(hit_region_node(&hit_regions));
        if let Some(title) = &options.title {
            root = root.child(
                TextNode::new(Point::new(area.width / 2.0, -10.0), title.clone())
                    .class("title")
                    .anchor(TextAnchor::Middle)
                    .font_size(TITLE_FONT_SIZE),
            );
        }

        RenderedChart {
            kind,
            tree: RenderTree::new(layout.width, layout.height, root),
            hit_regions,
            plot_origin: origin,
            tooltip_offset: self.config.interaction.tooltip_offset(),
        }
    }
}
