use ordered_float::OrderedFloat;
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// Affine map from a numeric domain onto a pixel range.
///
/// The range may be inverted (`[height, 0]`) so larger values render higher
/// on vertical axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::DegenerateScale {
                start: domain_start,
                end: domain_end,
            });
        }
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds `[0, max]`; a non-positive or non-finite `max` falls back to `1`.
    pub fn zero_based(max: f64, range: (f64, f64)) -> ChartResult<Self> {
        let max = if max.is_finite() && max > 0.0 {
            max
        } else {
            warn!(max, "zero-range value domain, using [0, 1]");
            1.0
        };
        Self::new((0.0, max), range)
    }

    /// Builds `[min, max]`; a collapsed extent widens to `[min - 1, max + 1]`.
    pub fn from_extent(min: f64, max: f64, range: (f64, f64)) -> ChartResult<Self> {
        if min == max && min.is_finite() {
            warn!(value = min, "single-valued extent, widening domain by 1");
            return Self::new((min - 1.0, max + 1.0), range);
        }
        Self::new((min, max), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a zero-width range".to_owned(),
            ));
        }

        let normalized = (pixel - self.range_start) / span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

/// Largest finite value, or `None` for an empty/non-finite input.
#[must_use]
pub fn max_finite(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner)
}

/// `(min, max)` over finite values, or `None` for an empty/non-finite input.
#[must_use]
pub fn extent_finite(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
        .map(|(min, max)| (min.into_inner(), max.into_inner()))
}
