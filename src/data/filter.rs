use serde::{Deserialize, Serialize};

use crate::data::{Side, StatRecord};

/// Keeps records whose factor is in `allow_list`, in their original order.
#[must_use]
pub fn filter_factors<S: AsRef<str>>(records: &[StatRecord], allow_list: &[S]) -> Vec<StatRecord> {
    records
        .iter()
        .filter(|record| {
            allow_list
                .iter()
                .any(|allowed| allowed.as_ref() == record.factor)
        })
        .cloned()
        .collect()
}

/// Records where `side` has a value.
pub fn records_for_side(
    records: &[StatRecord],
    side: Side,
) -> impl Iterator<Item = (&StatRecord, f64)> + '_ {
    records
        .iter()
        .filter_map(move |record| record.value(side).map(|value| (record, value)))
}

/// Rescales outliers recorded in a different unit (e.g. tenths) back onto the
/// range of the other factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierRescale {
    pub threshold: f64,
    pub divisor: f64,
}

impl Default for OutlierRescale {
    fn default() -> Self {
        Self {
            threshold: 1000.0,
            divisor: 10.0,
        }
    }
}

impl OutlierRescale {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        if value > self.threshold {
            value / self.divisor
        } else {
            value
        }
    }

    #[must_use]
    pub fn apply_record(self, record: &StatRecord) -> StatRecord {
        StatRecord {
            factor: record.factor.clone(),
            values: record.values.map(|value| value.map(|value| self.apply(value))),
        }
    }
}
