//! File-to-scene pipelines used by the CLI and embedding hosts.
//!
//! A chart whose resource cannot be loaded still yields a scene: the error is
//! logged and a placeholder frame takes the chart's place.

use std::path::Path;

use tracing::{debug, warn};

use crate::charts::{
    ChartScene, ScatterState, render_bar_chart, render_placeholder, render_radar_chart,
    render_scatter_plot,
};
use crate::core::Viewport;
use crate::data::{LoadReport, StatRecord, Subjects, YearlyRecord, load_factors, load_yearly};
use crate::error::ChartResult;

use super::ChartsConfig;

/// The three charts rendered from the two input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Scatter,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Scatter, ChartKind::Radar];

    /// Output file stem (`bar`, `scatter`, `radar`).
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Scatter => "scatter",
            Self::Radar => "radar",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Bar => "Shots comparison",
            Self::Scatter => "Season statistics",
            Self::Radar => "Player factors",
        }
    }

    #[must_use]
    pub fn viewport(self, config: &ChartsConfig) -> Viewport {
        match self {
            Self::Bar => config.bar.viewport,
            Self::Scatter => config.scatter.viewport,
            Self::Radar => config.radar.viewport,
        }
    }
}

pub fn load_factor_records(
    path: impl AsRef<Path>,
    subjects: &Subjects,
) -> ChartResult<Vec<StatRecord>> {
    load_factors(path, subjects).map(log_report)
}

pub fn load_yearly_records(
    path: impl AsRef<Path>,
    subjects: &Subjects,
) -> ChartResult<Vec<YearlyRecord>> {
    load_yearly(path, subjects).map(log_report)
}

fn log_report<T>(report: LoadReport<T>) -> Vec<T> {
    if !report.is_clean() {
        warn!(
            skipped = report.skipped.len(),
            kept = report.records.len(),
            "rows skipped while loading"
        );
    }
    report.records
}

pub fn bar_scene_from_file(
    path: impl AsRef<Path>,
    config: &ChartsConfig,
) -> ChartResult<ChartScene> {
    let records = load_factor_records(path, &config.subjects)?;
    render_bar_chart(&records, &config.subjects, &config.bar)
}

pub fn radar_scene_from_file(
    path: impl AsRef<Path>,
    config: &ChartsConfig,
) -> ChartResult<ChartScene> {
    let records = load_factor_records(path, &config.subjects)?;
    render_radar_chart(&records, &config.subjects, &config.radar)
}

pub fn scatter_scene_from_file(
    path: impl AsRef<Path>,
    config: &ChartsConfig,
    state: ScatterState,
) -> ChartResult<ChartScene> {
    let records = load_yearly_records(path, &config.subjects)?;
    render_scatter_plot(&records, &config.subjects, &config.scatter, state)
}

/// Unwraps a scene result, substituting the placeholder on failure or when
/// the built frame does not validate.
#[must_use]
pub fn scene_or_placeholder(
    kind: ChartKind,
    result: ChartResult<ChartScene>,
    config: &ChartsConfig,
) -> ChartScene {
    match result.and_then(|scene| scene.frame.validate().map(|()| scene)) {
        Ok(scene) => scene,
        Err(err) => {
            warn!(chart = kind.file_stem(), error = %err, "chart data unavailable");
            render_placeholder(kind.viewport(config), &err.to_string())
        }
    }
}

/// Builds all three scenes, loading each input table once.
///
/// Never fails: every chart falls back to a placeholder independently.
#[must_use]
pub fn build_scenes(
    factors_path: impl AsRef<Path>,
    yearly_path: impl AsRef<Path>,
    config: &ChartsConfig,
    scatter_state: ScatterState,
) -> Vec<(ChartKind, ChartScene)> {
    let factors = load_factor_records(factors_path, &config.subjects);
    let yearly = load_yearly_records(yearly_path, &config.subjects);

    let bar = match &factors {
        Ok(records) => render_bar_chart(records, &config.subjects, &config.bar),
        Err(err) => Err(err.clone()),
    };
    let radar = match &factors {
        Ok(records) => render_radar_chart(records, &config.subjects, &config.radar),
        Err(err) => Err(err.clone()),
    };
    let scatter = yearly.and_then(|records| {
        render_scatter_plot(&records, &config.subjects, &config.scatter, scatter_state)
    });

    let scenes = vec![
        (ChartKind::Bar, scene_or_placeholder(ChartKind::Bar, bar, config)),
        (
            ChartKind::Scatter,
            scene_or_placeholder(ChartKind::Scatter, scatter, config),
        ),
        (ChartKind::Radar, scene_or_placeholder(ChartKind::Radar, radar, config)),
    ];
    debug!(charts = scenes.len(), "built chart scenes");
    scenes
}
