use serde::{Deserialize, Serialize};

use crate::charts::{BarChartConfig, RadarChartConfig, ScatterChartConfig};
use crate::data::Subjects;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public configuration of all three charts.
///
/// Every field has a serde default, so a partial JSON document (or `{}`)
/// yields the stock layout for the fields it omits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartsConfig {
    #[serde(default)]
    pub subjects: Subjects,
    #[serde(default)]
    pub bar: BarChartConfig,
    #[serde(default)]
    pub scatter: ScatterChartConfig,
    #[serde(default)]
    pub radar: RadarChartConfig,
}

impl ChartsConfig {
    #[must_use]
    pub fn with_subjects(mut self, subjects: Subjects) -> Self {
        self.subjects = subjects;
        self
    }

    #[must_use]
    pub fn with_bar(mut self, bar: BarChartConfig) -> Self {
        self.bar = bar;
        self
    }

    #[must_use]
    pub fn with_scatter(mut self, scatter: ScatterChartConfig) -> Self {
        self.scatter = scatter;
        self
    }

    #[must_use]
    pub fn with_radar(mut self, radar: RadarChartConfig) -> Self {
        self.radar = radar;
        self
    }

    /// Checks viewports and colors up front so a bad config fails before any
    /// data is loaded.
    pub fn validate(&self) -> ChartResult<()> {
        self.bar.viewport.validate()?;
        self.scatter.viewport.validate()?;
        self.radar.viewport.validate()?;
        if self.subjects.first.is_empty() || self.subjects.second.is_empty() {
            return Err(ChartError::InvalidData(
                "subject names must not be empty".to_owned(),
            ));
        }
        if self.subjects.first == self.subjects.second {
            return Err(ChartError::InvalidData(format!(
                "subjects must differ, both are `{}`",
                self.subjects.first
            )));
        }
        let colors = self
            .bar
            .palette
            .iter()
            .chain(&self.scatter.colors)
            .chain(&self.radar.colors);
        for hex in colors {
            Color::from_hex(hex)?;
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse charts config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize charts config: {e}"))
        })
    }
}
