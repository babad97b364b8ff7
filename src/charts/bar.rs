//! Grouped bar chart of shot totals per subject.
//!
//! Each subject owns one band of the x axis. Within a band the subject's
//! bars share one half (first subject left, second right) and overlap, so
//! smaller factors listed later (e.g. shots on target) paint over larger
//! ones (total shots) as a nested bar.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::axis::{
    AXIS_FONT_SIZE_PX, push_band_axis_bottom, push_left_axis_title, push_linear_axis_left,
};
use crate::charts::{ChartScene, OrdinalPalette};
use crate::core::{BandScale, LinearScale, Margins, PlotArea, Viewport, max_finite, nice_ticks};
use crate::data::{Side, StatRecord, Subjects, filter_factors, records_for_side};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitRegion, HitShape, TooltipContent, TooltipOffset, format_value};
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const LEGEND_SWATCH_PX: f64 = 19.0;
const BAR_BORDER_PX: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    /// Factors drawn as bars, in legend/palette order.
    #[serde(default = "default_factors")]
    pub factors: Vec<String>,
    /// `#rrggbb` colors keyed by `subject × factor` in order.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_legend_column_width")]
    pub legend_column_width: f64,
    #[serde(default = "default_legend_row_height")]
    pub legend_row_height: f64,
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: TooltipOffset,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: default_margins(),
            band_padding: default_band_padding(),
            factors: default_factors(),
            palette: default_palette(),
            y_label: default_y_label(),
            tick_count: default_tick_count(),
            legend_column_width: default_legend_column_width(),
            legend_row_height: default_legend_row_height(),
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn with_factors<S: Into<String>>(mut self, factors: impl IntoIterator<Item = S>) -> Self {
        self.factors = factors.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Palette key of one bar: `"{subject}_{factor}"`.
    #[must_use]
    pub fn palette_key(subject: &str, factor: &str) -> String {
        format!("{subject}_{factor}")
    }

    fn palette(&self, subjects: &Subjects) -> ChartResult<OrdinalPalette> {
        let keys = subjects.names().into_iter().flat_map(|subject| {
            self.factors
                .iter()
                .map(move |factor| Self::palette_key(subject, factor))
        });
        OrdinalPalette::from_hex(keys, &self.palette)
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(850, 600)
}

fn default_margins() -> Margins {
    Margins::new(10.0, 30.0, 20.0, 50.0)
}

fn default_band_padding() -> f64 {
    0.2
}

fn default_factors() -> Vec<String> {
    vec!["Shots".to_owned(), "Shots on Target".to_owned()]
}

fn default_palette() -> Vec<String> {
    ["#4794de", "#07097e", "#e35b58", "#881804"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_y_label() -> String {
    "Shots Total".to_owned()
}

fn default_tick_count() -> usize {
    10
}

fn default_legend_column_width() -> f64 {
    180.0
}

fn default_legend_row_height() -> f64 {
    20.0
}

fn default_tooltip_offset() -> TooltipOffset {
    TooltipOffset::new(10.0, -30.0)
}

/// Scales used by one bar chart render, exposed for geometry checks.
#[derive(Debug, Clone, PartialEq)]
pub struct BarScales {
    pub plot: PlotArea,
    pub x: BandScale,
    pub y: LinearScale,
}

/// Builds both scales from the allow-listed records.
pub fn bar_scales(
    records: &[StatRecord],
    subjects: &Subjects,
    config: &BarChartConfig,
) -> ChartResult<BarScales> {
    let plot = PlotArea::from_viewport(config.viewport, config.margins)?;
    let x = BandScale::with_padding(subjects.names(), (0.0, plot.width), config.band_padding)?;
    let max = max_finite(records.iter().filter_map(StatRecord::max_value)).unwrap_or(0.0);
    let y = LinearScale::zero_based(max, (plot.height, 0.0))?;
    Ok(BarScales { plot, x, y })
}

pub fn render_bar_chart(
    records: &[StatRecord],
    subjects: &Subjects,
    config: &BarChartConfig,
) -> ChartResult<ChartScene> {
    let records = filter_factors(records, config.factors.as_slice());
    if records.is_empty() {
        return Err(ChartError::InvalidData(format!(
            "no rows for bar factors {:?}",
            config.factors
        )));
    }

    let BarScales { plot, x, y } = bar_scales(&records, subjects, config)?;
    let palette = config.palette(subjects)?;
    let mut frame = RenderFrame::new(config.viewport);
    let mut hit_regions = Vec::new();

    push_band_axis_bottom(&mut frame, plot, &x);
    let (_, y_max) = y.domain();
    push_linear_axis_left(&mut frame, plot, y, &nice_ticks(0.0, y_max, config.tick_count))?;
    push_left_axis_title(&mut frame, plot, config.margins.left, &config.y_label);

    let half = x.bandwidth() / 2.0;
    for side in Side::BOTH {
        let subject = subjects.name(side);
        let band_start = x.band(subject).ok_or_else(|| {
            ChartError::InvalidData(format!("subject `{subject}` missing from band scale"))
        })?;
        let bar_x = match side {
            Side::First => band_start,
            Side::Second => band_start + half,
        };

        for (record, value) in records_for_side(&records, side) {
            let key = BarChartConfig::palette_key(subject, &record.factor);
            let fill = palette.color(&key).ok_or_else(|| {
                ChartError::InvalidData(format!("no palette color for `{key}`"))
            })?;
            let bar_y = y.map(value)?;
            let (doc_x, doc_y) = plot.to_document(bar_x, bar_y);
            let height = plot.height - bar_y;

            frame.rects.push(
                RectPrimitive::new(doc_x, doc_y, half, height, fill)
                    .with_border(Color::GREY, BAR_BORDER_PX),
            );
            hit_regions.push(HitRegion::new(
                HitShape::Rect {
                    x: doc_x,
                    y: doc_y,
                    width: half,
                    height,
                },
                TooltipContent::new()
                    .line(format!("Player: {subject}"))
                    .line(format!("{}: {}", record.factor, format_value(value))),
            ));
        }
    }

    push_legend(&mut frame, plot, &palette, subjects, config)?;

    debug!(bars = hit_regions.len(), y_max, "rendered bar chart");
    let mut scene = ChartScene::new(frame, config.tooltip_offset);
    scene.hit_regions = hit_regions;
    Ok(scene)
}

/// Swatch + "Subject: Factor" entries laid out in columns from the plot's
/// top-right corner, one row per subject.
fn push_legend(
    frame: &mut RenderFrame,
    plot: PlotArea,
    palette: &OrdinalPalette,
    subjects: &Subjects,
    config: &BarChartConfig,
) -> ChartResult<()> {
    let columns = config.factors.len().max(1);
    let entries = subjects
        .names()
        .into_iter()
        .flat_map(|subject| config.factors.iter().map(move |factor| (subject, factor)));
    for (index, (subject, factor)) in entries.enumerate() {
        let key = BarChartConfig::palette_key(subject, factor);
        let color = palette
            .color(&key)
            .ok_or_else(|| ChartError::InvalidData(format!("no palette color for `{key}`")))?;
        let column = index % columns;
        let row = index / columns;
        let swatch_x = plot.width
            - LEGEND_SWATCH_PX
            - (columns - 1 - column) as f64 * config.legend_column_width;
        let row_y = row as f64 * config.legend_row_height;

        let (doc_x, doc_y) = plot.to_document(swatch_x, row_y);
        frame.rects.push(RectPrimitive::new(
            doc_x,
            doc_y,
            LEGEND_SWATCH_PX,
            LEGEND_SWATCH_PX,
            color,
        ));

        frame.texts.push(TextPrimitive::new(
            format!("{subject}: {factor}"),
            doc_x - 5.0,
            doc_y + LEGEND_SWATCH_PX / 2.0 + AXIS_FONT_SIZE_PX * 0.32,
            AXIS_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Right,
        ));
    }
    Ok(())
}
