//! Scale functions for data-to-pixel mappings.
//!
//! Two scales cover every chart kind:
//!
//! - [`LinearScale`]: continuous numeric domain to a pixel range.
//! - [`BandScale`]: ordered categories to equal-width slots with padding.
//!
//! Tick values for continuous axes come from [`nice_ticks`], which picks a
//! step of 1, 2 or 5 times a power of ten so that roughly `count` ticks
//! land inside the domain.

use indexmap::IndexSet;

use crate::data::format_value;
use crate::error::{ConfigurationError, Error, Result};

/// Factor applied to the y maximum so the top data point clears the plot edge.
pub const HEADROOM: f64 = 1.1;

/// Upper bound on generated ticks, whatever the hint.
const MAX_TICKS: usize = 1_000;

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

// ============================================================================
// Linear Scale
// ============================================================================

/// Linear scale for continuous-to-pixel mapping.
///
/// The domain is kept exactly as given, so a reversed domain (`min > max`)
/// still maps its first bound to `range.0`. A degenerate domain
/// (`min == max`) maps every value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if a domain bound is NaN or infinite, or if the
    /// span between the bounds overflows `f64`.
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Result<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(Error::ScaleDomain(format!(
                "Domain bounds must be finite, got [{}, {}]",
                domain.0, domain.1
            )));
        }
        if !(domain.1 - domain.0).is_finite() {
            return Err(Error::ScaleDomain(format!(
                "Domain span overflows, got [{}, {}]",
                domain.0, domain.1
            )));
        }
        if domain.0 == domain.1 {
            tracing::debug!(value = domain.0, "degenerate scale domain, mapping to range midpoint");
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Create a scale whose domain is the inclusive extent of `values`.
    ///
    /// # Errors
    ///
    /// [`Error::ScaleDomain`] when `values` holds no finite value or the
    /// extent is rejected by [`LinearScale::new`].
    pub fn from_extent<I>(values: I, range: (f32, f32)) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = extent(values)?;
        Self::new((min, max), range)
    }

    /// Create a y scale with domain `[0, max * HEADROOM]`.
    ///
    /// The floor is always 0. The headroom factor is applied whatever the
    /// sign of `max`: a zero maximum gives a degenerate domain and a
    /// negative one gives a reversed domain `[0, 1.1 * max]`.
    ///
    /// # Errors
    ///
    /// [`Error::ScaleDomain`] when `values` holds no finite value or
    /// `max * HEADROOM` overflows.
    pub fn with_headroom<I>(values: I, range: (f32, f32)) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (_, max) = extent(values)?;
        Self::new((0.0, max * HEADROOM), range)
    }

    /// Domain bounds as given.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Whether both domain bounds coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.domain_min == self.domain_max
    }

    /// Invert the scale (pixel to domain).
    ///
    /// A degenerate scale inverts everything to its single domain value.
    #[must_use]
    pub fn invert(&self, pixel: f32) -> f64 {
        let span = f64::from(self.range_max) - f64::from(self.range_min);
        if self.is_degenerate() || span == 0.0 {
            return self.domain_min;
        }
        let t = (f64::from(pixel) - f64::from(self.range_min)) / span;
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Nice ticks covering the domain, about `count` of them.
    #[must_use]
    pub fn ticks(&self, count: usize) -> NiceTicks {
        nice_ticks(self.domain_min, self.domain_max, count)
    }
}

impl Scale<f64, f32> for LinearScale {
    fn scale(&self, value: f64) -> f32 {
        let r0 = f64::from(self.range_min);
        let r1 = f64::from(self.range_max);
        if self.is_degenerate() {
            return ((r0 + r1) / 2.0) as f32;
        }
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        (r0 + t * (r1 - r0)) as f32
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Inclusive `(min, max)` of the finite values.
fn extent<I: IntoIterator<Item = f64>>(values: I) -> Result<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .ok_or_else(|| Error::ScaleDomain("No finite values to take an extent of".to_string()))
}

// ============================================================================
// Nice Ticks
// ============================================================================

/// Tick values for a continuous axis plus the precision to label them with.
#[derive(Debug, Clone, PartialEq)]
pub struct NiceTicks {
    /// Tick values in ascending order.
    pub values: Vec<f64>,
    /// Decimal places implied by the tick step; `None` for a lone tick.
    pub precision: Option<usize>,
}

impl NiceTicks {
    /// Label for a tick value.
    #[must_use]
    pub fn label(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => {
                let text = format!("{value:.precision$}");
                // Rounding can produce "-0" or "-0.0".
                if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
                    text[1..].to_string()
                } else {
                    text
                }
            }
            None => format_value(value),
        }
    }
}

/// Generate "nice" tick values inside `[a, b]` (bounds in either order).
///
/// The step is 1, 2 or 5 times a power of ten, chosen so that about `count`
/// ticks fit. Ticks are integer multiples of the step, so they are exactly
/// evenly spaced. A degenerate domain yields a single tick at its value.
#[must_use]
pub fn nice_ticks(a: f64, b: f64, count: usize) -> NiceTicks {
    let empty = NiceTicks {
        values: Vec::new(),
        precision: None,
    };
    if !a.is_finite() || !b.is_finite() || count == 0 {
        return empty;
    }

    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo == hi {
        return NiceTicks {
            values: vec![lo],
            precision: None,
        };
    }

    let count = count.min(MAX_TICKS);
    let raw_step = (hi - lo) / count as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        // Work with the inverse step so 0.1 * 3 never shows up as 0.30000000000000004.
        let inverse = 10f64.powf(-power) / factor;
        let mut first = (lo * inverse).round();
        let mut last = (hi * inverse).round();
        if first / inverse < lo {
            first += 1.0;
        }
        if last / inverse > hi {
            last -= 1.0;
        }
        NiceTicks {
            values: multiples(first, last, |i| i / inverse),
            precision: Some(inverse.log10().ceil().max(0.0) as usize),
        }
    } else {
        let step = 10f64.powf(power) * factor;
        let mut first = (lo / step).round();
        let mut last = (hi / step).round();
        if first * step < lo {
            first += 1.0;
        }
        if last * step > hi {
            last -= 1.0;
        }
        NiceTicks {
            values: multiples(first, last, |i| i * step),
            precision: Some(0),
        }
    }
}

fn multiples(first: f64, last: f64, value: impl Fn(f64) -> f64) -> Vec<f64> {
    if !(first <= last) || last - first > MAX_TICKS as f64 {
        return Vec::new();
    }
    let n = (last - first) as usize + 1;
    (0..n).map(|k| value(first + k as f64)).collect()
}

// ============================================================================
// Band Scale
// ============================================================================

/// Banded scale for categorical-to-pixel mapping.
///
/// Each category owns a slot of width `step = (r1 - r0) / n`. The drawn band
/// is `step * (1 - padding)` wide and starts `step * padding / 2` into its
/// slot, so bands and the gaps between them tile the range exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_min: f32,
    range_max: f32,
    padding: f32,
}

impl BandScale {
    /// Create a band scale. Duplicate categories collapse into one slot,
    /// keeping first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPadding`] unless `0 <= padding < 1`.
    pub fn new<I, S>(categories: I, range: (f32, f32), padding: f32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(0.0..1.0).contains(&padding) {
            return Err(ConfigurationError::InvalidPadding(padding).into());
        }

        Ok(Self {
            domain: categories.into_iter().map(Into::into).collect(),
            range_min: range.0,
            range_max: range.1,
            padding,
        })
    }

    /// Categories in slot order.
    #[must_use]
    pub fn domain(&self) -> &IndexSet<String> {
        &self.domain
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Whether there are no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Padding fraction.
    #[must_use]
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Slot width (0 for an empty domain).
    #[must_use]
    pub fn step(&self) -> f32 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range_max - self.range_min) / self.domain.len() as f32
    }

    /// Drawn band width.
    #[must_use]
    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding)
    }

    /// Offset of the band from the start of its slot.
    #[must_use]
    pub fn band_offset(&self) -> f32 {
        self.step() * self.padding / 2.0
    }

    /// Slot start for a category.
    #[must_use]
    pub fn slot_start(&self, category: &str) -> Option<f32> {
        let index = self.domain.get_index_of(category)?;
        Some(self.range_min + index as f32 * self.step())
    }

    /// Band start (slot start plus offset) for a category.
    #[must_use]
    pub fn band_start(&self, category: &str) -> Option<f32> {
        self.slot_start(category).map(|s| s + self.band_offset())
    }

    /// Band center for a category.
    #[must_use]
    pub fn band_center(&self, category: &str) -> Option<f32> {
        self.band_start(category).map(|s| s + self.bandwidth() / 2.0)
    }

    /// `(start, end)` of every band in slot order.
    pub fn bands(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        let (step, offset, width) = (self.step(), self.band_offset(), self.bandwidth());
        (0..self.domain.len()).map(move |i| {
            let start = self.range_min + i as f32 * step + offset;
            (start, start + width)
        })
    }
}

impl Scale<&str, Option<f32>> for BandScale {
    fn scale(&self, value: &str) -> Option<f32> {
        self.band_start(value)
    }

    fn range(&self) -> (Option<f32>, Option<f32>) {
        (Some(self.range_min), Some(self.range_max))
    }
}
