//! Fixed canvas geometry: outer size, margins and the derived plot area.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};
use crate::geometry::Point;

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin (title lives here).
    #[serde(default = "default_top")]
    pub top: f32,
    /// Right margin.
    #[serde(default = "default_right")]
    pub right: f32,
    /// Bottom margin (x tick labels and x label).
    #[serde(default = "default_bottom")]
    pub bottom: f32,
    /// Left margin (y tick labels and y label).
    #[serde(default = "default_left")]
    pub left: f32,
}

fn default_top() -> f32 {
    40.0
}
fn default_right() -> f32 {
    30.0
}
fn default_bottom() -> f32 {
    50.0
}
fn default_left() -> f32 {
    60.0
}

impl Margins {
    /// Create margins.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same margin on all four sides.
    #[must_use]
    pub const fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Top-left corner of the plot area in outer coordinates.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(default_top(), default_right(), default_bottom(), default_left())
    }
}

/// Size of the inner plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    /// Inner width.
    pub width: f32,
    /// Inner height.
    pub height: f32,
}

/// Outer chart size plus margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Outer width in pixels.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Outer height in pixels.
    #[serde(default = "default_height")]
    pub height: f32,
    /// Margins around the plot area.
    #[serde(default)]
    pub margins: Margins,
}

fn default_width() -> f32 {
    800.0
}
fn default_height() -> f32 {
    500.0
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            margins: Margins::default(),
        }
    }
}

impl Layout {
    /// Create a layout.
    #[must_use]
    pub const fn new(width: f32, height: f32, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    /// Layout whose plot area is exactly `width` x `height` with zero margins.
    #[must_use]
    pub const fn plot_only(width: f32, height: f32) -> Self {
        Self::new(width, height, Margins::uniform(0.0))
    }

    /// Derived plot area.
    ///
    /// # Errors
    ///
    /// See [`compute_inner`].
    pub fn inner(&self) -> Result<PlotArea> {
        compute_inner(self.width, self.height, &self.margins)
    }
}

/// Compute the plot area left inside `outer` once `margins` are removed.
///
/// # Errors
///
/// Returns [`ConfigurationError::NonPositivePlotArea`] when either derived
/// dimension is not a positive finite number.
pub fn compute_inner(outer_width: f32, outer_height: f32, margins: &Margins) -> Result<PlotArea> {
    let width = outer_width - margins.left - margins.right;
    let height = outer_height - margins.top - margins.bottom;

    // NaN fails both comparisons.
    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(ConfigurationError::NonPositivePlotArea { width, height }.into());
    }

    Ok(PlotArea { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_layout_inner() {
        let area = Layout::default().inner().unwrap();
        assert!((area.width - 710.0).abs() < f32::EPSILON);
        assert!((area.height - 410.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_plot_only() {
        let area = Layout::plot_only(100.0, 50.0).inner().unwrap();
        assert_eq!(area, PlotArea { width: 100.0, height: 50.0 });
    }

    #[test]
    fn test_margins_swallow_width() {
        let layout = Layout::new(80.0, 500.0, Margins::default());
        let err = layout.inner().unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::NonPositivePlotArea { .. })
        ));
    }

    #[test]
    fn test_zero_height_is_error() {
        let margins = Margins::new(25.0, 0.0, 25.0, 0.0);
        assert!(compute_inner(100.0, 50.0, &margins).is_err());
    }

    #[test]
    fn test_nan_is_error() {
        assert!(compute_inner(f32::NAN, 50.0, &Margins::uniform(0.0)).is_err());
        assert!(compute_inner(f32::INFINITY, 50.0, &Margins::uniform(0.0)).is_err());
    }

    #[test]
    fn test_origin() {
        assert_eq!(Margins::default().origin(), Point::new(60.0, 40.0));
    }
}
