//! Error types for chart construction.

use std::io;
use thiserror::Error;

use crate::chart::ChartKind;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration problems detected at build time.
///
/// These are fatal to the render call that hit them and never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Margins leave no room for the plot area.
    #[error("Plot area must be positive, got {width}x{height}")]
    NonPositivePlotArea {
        /// Derived inner width.
        width: f32,
        /// Derived inner height.
        height: f32,
    },

    /// Band padding outside `[0, 1)`.
    #[error("Band padding must be in [0, 1), got {0}")]
    InvalidPadding(f32),

    /// Hit-region half width must be positive and finite.
    #[error("Hit region half width must be positive, got {0}")]
    InvalidHitWidth(f32),

    /// Tick count hint of zero.
    #[error("Tick count hint must be at least 1")]
    InvalidTickCount,

    /// Unparseable color string.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Errors that can occur while building a chart.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid chart configuration.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A data point does not have the shape the chart kind needs.
    #[error("Data point {index} cannot be plotted on a {kind} chart")]
    DataShape {
        /// Position of the offending point in the dataset.
        index: usize,
        /// Chart kind being rendered.
        kind: ChartKind,
    },

    /// A data point carries NaN or an infinite value.
    #[error("Data point {index} has a non-finite value")]
    NonFiniteValue {
        /// Position of the offending point in the dataset.
        index: usize,
    },

    /// Scale domain error (e.g. non-finite bounds).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// I/O error (config loading, SVG output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed YAML configuration.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),
}

impl Error {
    /// Whether this error stems from configuration rather than data.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::ConfigParse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(ConfigurationError::NonPositivePlotArea {
            width: -10.0,
            height: 100.0,
        });
        assert!(err.to_string().contains("Plot area must be positive"));
        assert!(err.to_string().contains("-10x100"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_data_shape_mentions_kind() {
        let err = Error::DataShape {
            index: 3,
            kind: ChartKind::Line,
        };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains("line"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_invalid_padding_display() {
        let err = ConfigurationError::InvalidPadding(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}
