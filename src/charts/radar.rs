//! Radar (star) chart comparing both subjects over a fixed set of factors.
//!
//! Factor `i` of `n` sits at angle `i * 2π / n`, measured clockwise from
//! 12 o'clock. Spokes, labels, filled areas and markers all share that angle.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::ChartScene;
use crate::core::{LinearScale, Viewport, cardinal_closed, circle_path, max_finite, polar_point};
use crate::data::{OutlierRescale, Side, StatRecord, Subjects, filter_factors};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitRegion, HitShape, TooltipContent, TooltipOffset, format_value};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

const RING_STROKE_PX: f64 = 0.5;
const SPOKE_STROKE_PX: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Chart centre in document pixels.
    #[serde(default = "default_center")]
    pub center: (f64, f64),
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_factors")]
    pub factors: Vec<String>,
    #[serde(default)]
    pub rescale: OutlierRescale,
    /// Reference ring values in data units.
    #[serde(default = "default_ring_levels")]
    pub ring_levels: Vec<f64>,
    /// Extra data units between the spoke tip and its label.
    #[serde(default = "default_label_offset")]
    pub label_offset: f64,
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,
    #[serde(default = "default_area_opacity")]
    pub area_opacity: f64,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default = "default_point_opacity")]
    pub point_opacity: f64,
    #[serde(default)]
    pub curve_tension: f64,
    #[serde(default = "default_colors")]
    pub colors: [String; 2],
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: TooltipOffset,
}

impl Default for RadarChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            center: default_center(),
            radius: default_radius(),
            factors: default_factors(),
            rescale: OutlierRescale::default(),
            ring_levels: default_ring_levels(),
            label_offset: default_label_offset(),
            label_font_size: default_label_font_size(),
            area_opacity: default_area_opacity(),
            point_radius: default_point_radius(),
            point_opacity: default_point_opacity(),
            curve_tension: 0.0,
            colors: default_colors(),
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

impl RadarChartConfig {
    #[must_use]
    pub fn with_factors<S: Into<String>>(mut self, factors: impl IntoIterator<Item = S>) -> Self {
        self.factors = factors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_rescale(mut self, rescale: OutlierRescale) -> Self {
        self.rescale = rescale;
        self
    }

    #[must_use]
    pub fn with_ring_levels(mut self, ring_levels: Vec<f64>) -> Self {
        self.ring_levels = ring_levels;
        self
    }

    fn color(&self, side: Side) -> ChartResult<Color> {
        Color::from_hex(&self.colors[side.index()])
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(900, 1000)
}

fn default_center() -> (f64, f64) {
    (430.0, 500.0)
}

fn default_radius() -> f64 {
    400.0
}

fn default_factors() -> Vec<String> {
    [
        "MOTM",
        "Free Kick Goals",
        "Header",
        "Dribbles",
        "Hat-tricks",
        "Penalties",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

fn default_ring_levels() -> Vec<f64> {
    (1..=12).rev().map(|step| f64::from(step) * 26.0).collect()
}

fn default_label_offset() -> f64 {
    10.0
}

fn default_label_font_size() -> f64 {
    12.0
}

fn default_area_opacity() -> f64 {
    0.7
}

fn default_point_radius() -> f64 {
    5.0
}

fn default_point_opacity() -> f64 {
    0.8
}

fn default_colors() -> [String; 2] {
    ["#0000ff".to_owned(), "#ff0000".to_owned()]
}

fn default_tooltip_offset() -> TooltipOffset {
    TooltipOffset::new(10.0, -28.0)
}

/// Polar layout shared by every layer of one radar render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: (f64, f64),
    pub radial: LinearScale,
    pub factor_count: usize,
}

impl RadarGeometry {
    #[must_use]
    pub fn angle(&self, index: usize) -> f64 {
        index as f64 * TAU / self.factor_count as f64
    }

    /// Document position of `value` on factor `index`'s spoke.
    pub fn point(&self, index: usize, value: f64) -> ChartResult<(f64, f64)> {
        let (dx, dy) = polar_point(self.radial.map(value)?, self.angle(index));
        Ok((self.center.0 + dx, self.center.1 + dy))
    }

    /// Largest value of the radial domain; spokes end here.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.radial.domain().1
    }
}

/// Allow-listed and rescaled radar rows, in file order.
#[must_use]
pub fn radar_records(records: &[StatRecord], config: &RadarChartConfig) -> Vec<StatRecord> {
    filter_factors(records, config.factors.as_slice())
        .iter()
        .map(|record| config.rescale.apply_record(record))
        .collect()
}

/// Geometry for already-prepared rows (see [`radar_records`]).
pub fn radar_geometry(
    records: &[StatRecord],
    config: &RadarChartConfig,
) -> ChartResult<RadarGeometry> {
    if records.is_empty() {
        return Err(ChartError::InvalidData(format!(
            "no rows for radar factors {:?}",
            config.factors
        )));
    }
    if !config.radius.is_finite() || config.radius <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "radar radius must be positive, got {}",
            config.radius
        )));
    }
    let max = max_finite(records.iter().filter_map(StatRecord::max_value)).unwrap_or(0.0);
    let radial = LinearScale::zero_based(max, (0.0, config.radius))?;
    Ok(RadarGeometry {
        center: config.center,
        radial,
        factor_count: records.len(),
    })
}

pub fn render_radar_chart(
    records: &[StatRecord],
    subjects: &Subjects,
    config: &RadarChartConfig,
) -> ChartResult<ChartScene> {
    let records = radar_records(records, config);
    let geometry = radar_geometry(&records, config)?;
    let (cx, cy) = geometry.center;
    let max = geometry.max_value();

    let mut frame = RenderFrame::new(config.viewport);
    let mut hit_regions = Vec::with_capacity(records.len() * 2);

    for &level in &config.ring_levels {
        let ring = geometry.radial.map(level)?;
        frame.paths.push(PathPrimitive::stroked(
            circle_path(cx, cy, ring),
            Color::BLACK,
            RING_STROKE_PX,
        ));
    }

    for (index, record) in records.iter().enumerate() {
        let (x, y) = geometry.point(index, max)?;
        frame
            .lines
            .push(LinePrimitive::new(cx, cy, x, y, SPOKE_STROKE_PX, Color::BLACK));

        let (label_x, label_y) = geometry.point(index, max + config.label_offset)?;
        frame.texts.push(TextPrimitive::new(
            record.factor.as_str(),
            label_x,
            label_y,
            config.label_font_size,
            Color::BLACK,
            TextHAlign::Center,
        ));
    }

    for side in Side::BOTH {
        let subject = subjects.name(side);
        let color = config.color(side)?;

        let points = records
            .iter()
            .enumerate()
            .map(|(index, record)| geometry.point(index, record.value(side).unwrap_or(0.0)))
            .collect::<ChartResult<Vec<_>>>()?;
        frame.paths.push(PathPrimitive::filled(
            cardinal_closed(&points, config.curve_tension),
            color,
            config.area_opacity,
        ));

        for (record, &(x, y)) in records.iter().zip(&points) {
            let value = record.value(side).unwrap_or(0.0);
            frame.circles.push(
                CirclePrimitive::filled(x, y, config.point_radius, color)
                    .with_opacity(config.point_opacity),
            );
            hit_regions.push(HitRegion::new(
                HitShape::Circle {
                    cx: x,
                    cy: y,
                    radius: config.point_radius,
                },
                TooltipContent::new()
                    .line(format!("{subject}: {}", format_value(value)))
                    .line(format!("Factor: {}", record.factor)),
            ));
        }
    }

    debug!(factors = records.len(), max, "rendered radar chart");
    let mut scene = ChartScene::new(frame, config.tooltip_offset);
    scene.hit_regions = hit_regions;
    Ok(scene)
}
