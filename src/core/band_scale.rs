use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Maps an ordered set of category labels onto evenly spaced, padded bands.
///
/// Inner and outer padding are both expressed as a fraction of one step and
/// bands are centred in the range (align 0.5).
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    step: f64,
    bandwidth: f64,
    first_band_start: f64,
}

impl BandScale {
    pub fn new<I, S>(categories: I, range: (f64, f64)) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_padding(categories, range, 0.0)
    }

    pub fn with_padding<I, S>(categories: I, range: (f64, f64), padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: IndexSet<String> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return Err(ChartError::InvalidData(
                "band scale needs at least one category".to_owned(),
            ));
        }
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be in [0, 1)".to_owned(),
            ));
        }

        let count = categories.len() as f64;
        let inner = padding;
        let outer = padding;
        let span = range_end - range_start;
        let step = span / (count - inner + 2.0 * outer).max(1.0);
        let first_band_start = range_start + (span - step * (count - inner)) * 0.5;

        Ok(Self {
            categories,
            range_start,
            range_end,
            padding,
            step,
            bandwidth: step * (1.0 - inner),
            first_band_start,
        })
    }

    /// Start coordinate of the band for `label`.
    #[must_use]
    pub fn band(&self, label: &str) -> Option<f64> {
        self.categories
            .get_index_of(label)
            .map(|index| self.first_band_start + self.step * index as f64)
    }

    /// `(start, end)` of the band for `label`.
    #[must_use]
    pub fn extent(&self, label: &str) -> Option<(f64, f64)> {
        self.band(label).map(|start| (start, start + self.bandwidth))
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }
}
