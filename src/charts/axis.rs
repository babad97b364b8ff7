use crate::core::{BandScale, LinearScale, PlotArea};
use crate::error::ChartResult;
use crate::interaction::format_value;
use crate::render::{Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

pub const AXIS_FONT_SIZE_PX: f64 = 10.0;
pub const AXIS_TICK_SIZE_PX: f64 = 6.0;
const AXIS_TICK_PADDING_PX: f64 = 3.0;
const AXIS_STROKE_PX: f64 = 1.0;

/// Bottom axis with one centred label per band, no outer ticks.
pub fn push_band_axis_bottom(frame: &mut RenderFrame, plot: PlotArea, band: &BandScale) {
    let (x0, y) = plot.to_document(0.0, plot.height);
    let (x1, _) = plot.to_document(plot.width, plot.height);
    frame
        .lines
        .push(LinePrimitive::new(x0, y, x1, y, AXIS_STROKE_PX, Color::BLACK));

    let half = band.bandwidth() / 2.0;
    for label in band.categories() {
        let Some(start) = band.band(label) else {
            continue;
        };
        let (x, _) = plot.to_document(start + half, 0.0);
        push_bottom_tick(frame, x, y, label);
    }
}

/// Bottom axis for a linear scale. `ticks` are domain values.
pub fn push_linear_axis_bottom(
    frame: &mut RenderFrame,
    plot: PlotArea,
    scale: LinearScale,
    ticks: &[f64],
) -> ChartResult<()> {
    let (x0, y) = plot.to_document(0.0, plot.height);
    let (x1, _) = plot.to_document(plot.width, plot.height);
    frame
        .lines
        .push(LinePrimitive::new(x0, y, x1, y, AXIS_STROKE_PX, Color::BLACK));

    for &tick in ticks {
        let (x, _) = plot.to_document(scale.map(tick)?, 0.0);
        push_bottom_tick(frame, x, y, &format_value(tick));
    }
    Ok(())
}

/// Left axis for a vertical linear scale. `ticks` are domain values.
pub fn push_linear_axis_left(
    frame: &mut RenderFrame,
    plot: PlotArea,
    scale: LinearScale,
    ticks: &[f64],
) -> ChartResult<()> {
    let (x, y0) = plot.to_document(0.0, 0.0);
    let (_, y1) = plot.to_document(0.0, plot.height);
    frame
        .lines
        .push(LinePrimitive::new(x, y0, x, y1, AXIS_STROKE_PX, Color::BLACK));

    for &tick in ticks {
        let (_, y) = plot.to_document(0.0, scale.map(tick)?);
        frame.lines.push(LinePrimitive::new(
            x - AXIS_TICK_SIZE_PX,
            y,
            x,
            y,
            AXIS_STROKE_PX,
            Color::BLACK,
        ));
        frame.texts.push(TextPrimitive::new(
            format_value(tick),
            x - AXIS_TICK_SIZE_PX - AXIS_TICK_PADDING_PX,
            y + AXIS_FONT_SIZE_PX * 0.32,
            AXIS_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Right,
        ));
    }
    Ok(())
}

/// Vertical axis title rotated -90° and centred along the left margin.
pub fn push_left_axis_title(frame: &mut RenderFrame, plot: PlotArea, margin_left: f64, title: &str) {
    let (_, y) = plot.to_document(0.0, plot.height / 2.0);
    let x = plot.origin_x - margin_left + AXIS_FONT_SIZE_PX;
    frame.texts.push(
        TextPrimitive::new(
            title,
            x,
            y,
            AXIS_FONT_SIZE_PX,
            Color::BLACK,
            TextHAlign::Center,
        )
        .rotated(-90.0),
    );
}

fn push_bottom_tick(frame: &mut RenderFrame, x: f64, y: f64, label: &str) {
    frame.lines.push(LinePrimitive::new(
        x,
        y,
        x,
        y + AXIS_TICK_SIZE_PX,
        AXIS_STROKE_PX,
        Color::BLACK,
    ));
    if label.is_empty() {
        return;
    }
    frame.texts.push(TextPrimitive::new(
        label,
        x,
        y + AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX + AXIS_FONT_SIZE_PX * 0.71,
        AXIS_FONT_SIZE_PX,
        Color::BLACK,
        TextHAlign::Center,
    ));
}
