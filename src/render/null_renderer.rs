use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::TooltipState;
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, Renderer, TextPrimitive,
};

/// No-op renderer used by tests and headless pipelines.
///
/// Frames are still validated, and the primitive counts of the last frame are
/// kept so tests can check what would have been drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_path_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub tooltip: Option<TooltipState>,
}

impl Renderer for NullRenderer {
    fn begin_frame(&mut self, _viewport: Viewport) -> ChartResult<()> {
        self.last_line_count = 0;
        self.last_rect_count = 0;
        self.last_path_count = 0;
        self.last_circle_count = 0;
        self.last_text_count = 0;
        Ok(())
    }

    fn draw_line(&mut self, _line: &LinePrimitive) -> ChartResult<()> {
        self.last_line_count += 1;
        Ok(())
    }

    fn draw_rect(&mut self, _rect: &RectPrimitive) -> ChartResult<()> {
        self.last_rect_count += 1;
        Ok(())
    }

    fn draw_path(&mut self, _path: &PathPrimitive) -> ChartResult<()> {
        self.last_path_count += 1;
        Ok(())
    }

    fn draw_circle(&mut self, _circle: &CirclePrimitive) -> ChartResult<()> {
        self.last_circle_count += 1;
        Ok(())
    }

    fn draw_text(&mut self, _text: &TextPrimitive) -> ChartResult<()> {
        self.last_text_count += 1;
        Ok(())
    }

    fn set_tooltip(&mut self, tooltip: &TooltipState) -> ChartResult<()> {
        self.tooltip = Some(tooltip.clone());
        Ok(())
    }
}
