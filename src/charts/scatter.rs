//! Connected scatter plot of per-season assists or goals.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::ChartScene;
use crate::charts::axis::{
    AXIS_FONT_SIZE_PX, push_left_axis_title, push_linear_axis_bottom, push_linear_axis_left,
};
use crate::core::{
    LinearScale, Margins, PlotArea, Viewport, extent_finite, max_finite, nice_ticks, polyline,
};
use crate::data::{Metric, Side, Subjects, YearlyRecord};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitRegion, HitShape, TooltipContent, TooltipOffset, format_value};
use crate::render::{
    CirclePrimitive, Color, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

/// Which metric the scatter plot currently shows.
///
/// Held by the caller and passed into every render; `toggle` returns the
/// next state instead of mutating shared data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterState {
    pub metric: Metric,
}

impl Default for ScatterState {
    fn default() -> Self {
        Self {
            metric: Metric::Assists,
        }
    }
}

impl ScatterState {
    #[must_use]
    pub const fn new(metric: Metric) -> Self {
        Self { metric }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        Self {
            metric: self.metric.other(),
        }
    }

    #[must_use]
    pub const fn showing_goals(self) -> bool {
        matches!(self.metric, Metric::Goals)
    }

    #[must_use]
    pub const fn y_label(self) -> &'static str {
        self.metric.label()
    }

    /// Label of the control that switches to the other metric.
    #[must_use]
    pub const fn control_label(self) -> &'static str {
        match self.metric {
            Metric::Assists => "Goals by Season",
            Metric::Goals => "Assists by Season",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_margins")]
    pub margins: Margins,
    /// `#rrggbb` line/marker color per subject.
    #[serde(default = "default_colors")]
    pub colors: [String; 2],
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: TooltipOffset,
}

impl Default for ScatterChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: default_margins(),
            colors: default_colors(),
            line_width: default_line_width(),
            point_radius: default_point_radius(),
            tick_count: default_tick_count(),
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

impl ScatterChartConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    fn color(&self, side: Side) -> ChartResult<Color> {
        Color::from_hex(&self.colors[side.index()])
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(800, 600)
}

fn default_margins() -> Margins {
    Margins::new(10.0, 100.0, 30.0, 50.0)
}

fn default_colors() -> [String; 2] {
    ["#0000ff".to_owned(), "#ff0000".to_owned()]
}

fn default_line_width() -> f64 {
    2.0
}

fn default_point_radius() -> f64 {
    4.0
}

fn default_tick_count() -> usize {
    10
}

fn default_tooltip_offset() -> TooltipOffset {
    TooltipOffset::new(10.0, -10.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterScales {
    pub plot: PlotArea,
    pub x: LinearScale,
    pub y: LinearScale,
}

/// X spans the year extent; Y spans `[0, max]` over both metrics so the axis
/// stays put when the metric is toggled.
pub fn scatter_scales(
    records: &[YearlyRecord],
    config: &ScatterChartConfig,
) -> ChartResult<ScatterScales> {
    let plot = PlotArea::from_viewport(config.viewport, config.margins)?;
    let (first_year, last_year) = extent_finite(records.iter().map(|record| f64::from(record.year)))
        .ok_or_else(|| ChartError::InvalidData("no yearly records".to_owned()))?;
    let x = LinearScale::from_extent(first_year, last_year, (0.0, plot.width))?;
    let max = max_finite(records.iter().flat_map(YearlyRecord::all_values)).unwrap_or(0.0);
    let y = LinearScale::zero_based(max, (plot.height, 0.0))?;
    Ok(ScatterScales { plot, x, y })
}

/// Builds the full scene for `state`; callers redraw by rendering again with
/// the toggled state.
pub fn render_scatter_plot(
    records: &[YearlyRecord],
    subjects: &Subjects,
    config: &ScatterChartConfig,
    state: ScatterState,
) -> ChartResult<ChartScene> {
    let mut owned = records.to_vec();
    owned.sort_by_key(|record| record.year);
    let ScatterScales { plot, x, y } = scatter_scales(&owned, config)?;

    let mut frame = RenderFrame::new(config.viewport);
    let mut hit_regions = Vec::with_capacity(owned.len() * 2);

    let (x_start, x_end) = x.domain();
    let year_ticks: Vec<f64> = nice_ticks(x_start, x_end, config.tick_count)
        .into_iter()
        .filter(|tick| tick.fract() == 0.0)
        .collect();
    push_linear_axis_bottom(&mut frame, plot, x, &year_ticks)?;
    let (_, y_max) = y.domain();
    push_linear_axis_left(&mut frame, plot, y, &nice_ticks(0.0, y_max, config.tick_count))?;

    let (label_x, label_y) = plot.to_document(plot.width / 2.0, plot.height + config.margins.bottom);
    frame.texts.push(TextPrimitive::new(
        "Year",
        label_x,
        label_y,
        AXIS_FONT_SIZE_PX,
        Color::BLACK,
        TextHAlign::Center,
    ));
    push_left_axis_title(&mut frame, plot, config.margins.left, state.y_label());

    let metric = state.metric;
    for side in Side::BOTH {
        let subject = subjects.name(side);
        let color = config.color(side)?;
        let mut points = Vec::with_capacity(owned.len());
        for record in &owned {
            let value = record.value(side, metric);
            let (cx, cy) = plot.to_document(x.map(f64::from(record.year))?, y.map(value)?);
            points.push((cx, cy));

            frame.circles.push(CirclePrimitive::filled(
                cx,
                cy,
                config.point_radius,
                color,
            ));
            hit_regions.push(HitRegion::new(
                HitShape::Circle {
                    cx,
                    cy,
                    radius: config.point_radius,
                },
                TooltipContent::new()
                    .line(format!("Player: {subject}"))
                    .line(format!("Year: {}", record.year))
                    .line(format!("{}: {}", metric.label(), format_value(value))),
            ));
        }
        if points.len() >= 2 {
            frame
                .paths
                .push(PathPrimitive::stroked(polyline(&points), color, config.line_width));
        }
    }

    debug!(
        points = hit_regions.len(),
        metric = metric.label(),
        "rendered scatter plot"
    );
    let mut scene = ChartScene::new(frame, config.tooltip_offset);
    scene.hit_regions = hit_regions;
    scene.control_label = Some(state.control_label().to_owned());
    Ok(scene)
}
