//! Chart scene builders: records + config in, frame + hit regions out.

pub mod axis;
pub mod bar;
pub mod palette;
pub mod placeholder;
pub mod radar;
pub mod scatter;

pub use bar::{BarChartConfig, BarScales, bar_scales, render_bar_chart};
pub use palette::OrdinalPalette;
pub use placeholder::render_placeholder;
pub use radar::{
    RadarChartConfig, RadarGeometry, radar_geometry, radar_records, render_radar_chart,
};
pub use scatter::{
    ScatterChartConfig, ScatterScales, ScatterState, render_scatter_plot, scatter_scales,
};

use crate::interaction::{HitRegion, TooltipController, TooltipOffset};
use crate::render::RenderFrame;

/// Output of one chart render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub frame: RenderFrame,
    /// Pointer-sensitive shapes, in paint order (last is topmost).
    pub hit_regions: Vec<HitRegion>,
    /// Text of the chart's toggle control, when it has one.
    pub control_label: Option<String>,
    pub tooltip_offset: TooltipOffset,
}

impl ChartScene {
    #[must_use]
    pub fn new(frame: RenderFrame, tooltip_offset: TooltipOffset) -> Self {
        Self {
            frame,
            hit_regions: Vec::new(),
            control_label: None,
            tooltip_offset,
        }
    }

    #[must_use]
    pub fn tooltip_controller(&self) -> TooltipController {
        TooltipController::new(self.tooltip_offset)
    }
}
