//! # DataViz
//!
//! Pure chart-rendering core for line and bar charts.
//!
//! A render call takes a [`Dataset`](data::Dataset) plus
//! [`ChartOptions`](chart::ChartOptions) and returns an immutable
//! [`RenderTree`](render::RenderTree) together with one hit region per data
//! point. Nothing is drawn and nothing global is touched: identical inputs
//! give identical trees, and each chart owns its own tooltip state.
//!
//! ## Pipeline
//!
//! - **Layout**: outer size minus margins gives the plot area
//! - **Scales**: linear x (line) or banded x (bar), linear y with 10% headroom
//! - **Axes**: nice ticks, rotated bottom labels, optional axis titles
//! - **Geometry**: one polyline or one rectangle per point
//! - **Interaction**: hit strips, hover state machine, tooltip events
//!
//! ## Quick Start
//!
//! ```rust
//! use dataviz::prelude::*;
//!
//! let data = Dataset::from_labels(&[("a", 10.0), ("b", 20.0)]);
//! let chart = ChartComposer::default()
//!     .render_bar_chart(&data, &ChartOptions::default().title("Totals"))?;
//!
//! let mut hover = chart.interaction();
//! let pointer = chart.hit_regions[1].anchor.offset(chart.plot_origin);
//! let events = hover.handle(PointerEvent::Move(pointer));
//! assert_eq!(events.len(), 1);
//!
//! let svg = SvgEncoder::new().render(&chart.tree);
//! assert!(svg.contains("Totals"));
//! # Ok::<(), dataviz::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and hex parsing.
pub mod color;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Input records and datasets.
pub mod data;

/// Outer size, margins and plot area.
pub mod layout;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// Chart configuration (YAML).
pub mod config;

// ============================================================================
// Chart Modules
// ============================================================================

/// Axis ticks, labels and titles.
pub mod axis;

/// Line and bar geometry generators.
pub mod plots;

/// Hit regions, hover state and tooltip events.
pub mod interaction;

/// Chart composition.
pub mod chart;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Immutable render tree.
pub mod render;

/// Output encoders (SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chart construction.
pub mod error;

pub use error::{ConfigurationError, Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use dataviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chart::{ChartComposer, ChartKind, ChartOptions, RenderedChart};
    pub use crate::color::Rgba;
    pub use crate::config::ChartConfig;
    pub use crate::data::{DataPoint, Dataset, XValue};
    pub use crate::error::{ConfigurationError, Error, Result};
    pub use crate::geometry::{Point, Rect};
    pub use crate::interaction::{InteractionLayer, PointerEvent, TooltipEvent};
    pub use crate::layout::{Layout, Margins};
    pub use crate::output::SvgEncoder;
    pub use crate::plots::Curve;
    pub use crate::render::{Node, RenderTree};
    pub use crate::scale::{BandScale, LinearScale, Scale};
}
