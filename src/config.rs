//! Chart configuration.
//!
//! Every field has a default, so an empty YAML document is a valid config.
//!
//! ```yaml
//! layout:
//!   width: 800
//!   height: 500
//!   margins: { top: 40, right: 30, bottom: 50, left: 60 }
//! band_padding: 0.1
//! tick_count: 10
//! interaction:
//!   hit_half_width: 5
//!   tooltip_offset: [10, -28]
//! line:
//!   color: "#4682b4"
//!   stroke_width: 2
//!   curve: linear
//! bar_color: "#4682b4"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::DEFAULT_TICK_COUNT;
use crate::color::Rgba;
use crate::error::{ConfigurationError, Result};
use crate::geometry::Point;
use crate::interaction::{DEFAULT_HIT_HALF_WIDTH, DEFAULT_TOOLTIP_OFFSET};
use crate::layout::Layout;
use crate::plots::Curve;

/// Full chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Outer size and margins.
    #[serde(default)]
    pub layout: Layout,

    /// Band padding fraction for bar charts, in `[0, 1)`.
    #[serde(default = "default_band_padding")]
    pub band_padding: f32,

    /// Tick count hint for continuous axes.
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,

    /// Hover behaviour.
    #[serde(default)]
    pub interaction: InteractionConfig,

    /// Line chart styling.
    #[serde(default)]
    pub line: LineStyle,

    /// Bar fill color.
    #[serde(default = "default_color")]
    pub bar_color: Rgba,
}

/// Hover behaviour settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Half width of each hit strip in pixels.
    #[serde(default = "default_hit_half_width")]
    pub hit_half_width: f32,

    /// Tooltip offset from the pointer, `[dx, dy]`.
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: [f32; 2],
}

impl InteractionConfig {
    /// Tooltip offset as a point.
    #[must_use]
    pub fn tooltip_offset(&self) -> Point {
        Point::new(self.tooltip_offset[0], self.tooltip_offset[1])
    }
}

/// Line stroke settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke color.
    #[serde(default = "default_color")]
    pub color: Rgba,

    /// Stroke width in pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,

    /// Segment style.
    #[serde(default)]
    pub curve: Curve,
}

fn default_band_padding() -> f32 {
    0.1
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

fn default_color() -> Rgba {
    Rgba::STEELBLUE
}

fn default_hit_half_width() -> f32 {
    DEFAULT_HIT_HALF_WIDTH
}

fn default_tooltip_offset() -> [f32; 2] {
    [DEFAULT_TOOLTIP_OFFSET.x, DEFAULT_TOOLTIP_OFFSET.y]
}

fn default_stroke_width() -> f32 {
    2.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            band_padding: default_band_padding(),
            tick_count: default_tick_count(),
            interaction: InteractionConfig::default(),
            line: LineStyle::default(),
            bar_color: default_color(),
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hit_half_width: default_hit_half_width(),
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: default_color(),
            stroke_width: default_stroke_width(),
            curve: Curve::default(),
        }
    }
}

impl ChartConfig {
    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the values are invalid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check every value is usable.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    pub fn validate(&self) -> Result<()> {
        self.layout.inner()?;
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(ConfigurationError::InvalidPadding(self.band_padding).into());
        }
        let hw = self.interaction.hit_half_width;
        if !(hw > 0.0 && hw.is_finite()) {
            return Err(ConfigurationError::InvalidHitWidth(hw).into());
        }
        if self.tick_count == 0 {
            return Err(ConfigurationError::InvalidTickCount.into());
        }
        Ok(())
    }
}
