//! Input data model: points and datasets.
//!
//! A [`Dataset`] is an ordered list of [`DataPoint`]s. Line charts read a
//! numeric `x`; bar charts read a category key (the `label`, or the `x`
//! value when no label is given). Order is preserved everywhere.

use std::borrow::Cow;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::chart::ChartKind;
use crate::error::{Error, Result};

/// The x value of a data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    /// A numeric position (line charts).
    Number(f64),
    /// A category (bar charts).
    Category(String),
}

impl From<f64> for XValue {
    fn from(v: f64) -> Self {
        XValue::Number(v)
    }
}

impl From<&str> for XValue {
    fn from(s: &str) -> Self {
        XValue::Category(s.to_string())
    }
}

impl From<String> for XValue {
    fn from(s: String) -> Self {
        XValue::Category(s)
    }
}

/// One record to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// X value, numeric or categorical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<XValue>,
    /// Y value.
    pub y: f64,
    /// Category label (bar charts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DataPoint {
    /// Point with a numeric x.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(XValue::Number(x)),
            y,
            label: None,
        }
    }

    /// Point keyed by a category label.
    #[must_use]
    pub fn labeled(label: impl Into<String>, y: f64) -> Self {
        Self {
            x: None,
            y,
            label: Some(label.into()),
        }
    }

    /// Attach a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Numeric x, if the point has one.
    #[must_use]
    pub fn numeric_x(&self) -> Option<f64> {
        match self.x {
            Some(XValue::Number(x)) => Some(x),
            _ => None,
        }
    }

    /// Category key used by bar charts.
    ///
    /// Falls back from `label` to a categorical `x`, then to the numeric `x`
    /// rendered as text.
    #[must_use]
    pub fn category(&self) -> Option<Cow<'_, str>> {
        if let Some(label) = &self.label {
            return Some(Cow::Borrowed(label.as_str()));
        }
        match &self.x {
            Some(XValue::Category(c)) => Some(Cow::Borrowed(c.as_str())),
            Some(XValue::Number(n)) => Some(Cow::Owned(format_value(*n))),
            None => None,
        }
    }
}

/// Format a data value the way tooltips and category keys show it.
///
/// Integral values drop the fractional part (`20`, not `20.0`).
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    value.to_string()
}

/// An ordered sequence of data points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Create from points.
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Create from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().map(|&(x, y)| DataPoint::xy(x, y)).collect())
    }

    /// Create from `(label, y)` pairs.
    #[must_use]
    pub fn from_labels(pairs: &[(&str, f64)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|&(label, y)| DataPoint::labeled(label, y))
                .collect(),
        )
    }

    /// All points in order.
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Iterate over points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check every point has the shape `kind` needs.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteValue`] for NaN/infinite values,
    /// [`Error::DataShape`] for points missing their x/category.
    pub fn check_shape(&self, kind: ChartKind) -> Result<()> {
        for (index, point) in self.points.iter().enumerate() {
            if !point.y.is_finite() {
                return Err(Error::NonFiniteValue { index });
            }
            match kind {
                ChartKind::Line => {
                    let x = point.numeric_x().ok_or(Error::DataShape { index, kind })?;
                    if !x.is_finite() {
                        return Err(Error::NonFiniteValue { index });
                    }
                }
                ChartKind::Bar => {
                    if point.category().is_none() {
                        return Err(Error::DataShape { index, kind });
                    }
                }
            }
        }
        Ok(())
    }

    /// Y values in order.
    pub fn y_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Numeric x values in order (points without one are skipped).
    pub fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(DataPoint::numeric_x)
    }

    /// Distinct category keys in first-seen order.
    #[must_use]
    pub fn categories(&self) -> IndexSet<String> {
        self.points
            .iter()
            .filter_map(DataPoint::category)
            .map(Cow::into_owned)
            .collect()
    }
}

impl From<Vec<DataPoint>> for Dataset {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_first_seen_order() {
        let data = Dataset::from_labels(&[("b", 1.0), ("a", 2.0), ("b", 3.0), ("c", 4.0)]);
        let cats: Vec<_> = data.categories().into_iter().collect();
        assert_eq!(cats, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_category_fallbacks() {
        assert_eq!(DataPoint::labeled("q1", 1.0).category().as_deref(), Some("q1"));

        let categorical = DataPoint {
            x: Some(XValue::from("mon")),
            y: 1.0,
            label: None,
        };
        assert_eq!(categorical.category().as_deref(), Some("mon"));
        assert_eq!(DataPoint::xy(3.0, 1.0).category().as_deref(), Some("3"));

        // Label wins over x.
        let both = DataPoint::xy(3.0, 1.0).with_label("third");
        assert_eq!(both.category().as_deref(), Some("third"));
    }

    #[test]
    fn test_check_shape_line_needs_numeric_x() {
        let data = Dataset::new(vec![DataPoint::xy(0.0, 1.0), DataPoint::labeled("a", 2.0)]);
        let err = data.check_shape(ChartKind::Line).unwrap_err();
        assert!(matches!(err, Error::DataShape { index: 1, kind: ChartKind::Line }));
        assert!(data.check_shape(ChartKind::Bar).is_ok());
    }

    #[test]
    fn test_check_shape_rejects_non_finite() {
        let data = Dataset::from_xy(&[(0.0, 1.0), (1.0, f64::NAN)]);
        assert!(matches!(
            data.check_shape(ChartKind::Line),
            Err(Error::NonFiniteValue { index: 1 })
        ));

        let data = Dataset::from_xy(&[(f64::INFINITY, 1.0)]);
        assert!(matches!(
            data.check_shape(ChartKind::Line),
            Err(Error::NonFiniteValue { index: 0 })
        ));
    }

    #[test]
    fn test_check_shape_bar_without_key() {
        let data = Dataset::new(vec![DataPoint {
            x: None,
            y: 1.0,
            label: None,
        }]);
        assert!(matches!(
            data.check_shape(ChartKind::Bar),
            Err(Error::DataShape { index: 0, kind: ChartKind::Bar })
        ));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(20.0), "20");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(-3.0), "-3");
    }

    #[test]
    fn test_dataset_from_yaml() {
        let yaml = "- { x: 0, y: 10 }\n- { x: 1, y: 20 }\n- { label: a, y: 4 }\n";
        let data: Dataset = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.points()[1].numeric_x(), Some(1.0));
        assert_eq!(data.points()[2].category().as_deref(), Some("a"));
    }
}
