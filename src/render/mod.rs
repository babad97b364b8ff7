mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use svg_backend::SvgRenderer;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::TooltipState;

/// Contract implemented by any rendering backend.
///
/// Chart code never talks to a backend directly: it materializes a
/// deterministic `RenderFrame` and `render` replays it through the `draw_*`
/// hooks in layer order. The tooltip overlay is updated independently of the
/// frame so pointer movement does not require a redraw of the shapes.
pub trait Renderer {
    fn begin_frame(&mut self, _viewport: Viewport) -> ChartResult<()> {
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;

    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;

    fn draw_path(&mut self, path: &PathPrimitive) -> ChartResult<()>;

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;

    fn set_tooltip(&mut self, tooltip: &TooltipState) -> ChartResult<()>;

    fn end_frame(&mut self) -> ChartResult<()> {
        Ok(())
    }

    /// Clears previous output and draws `frame` from scratch.
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.begin_frame(frame.viewport)?;
        for line in &frame.lines {
            self.draw_line(line)?;
        }
        for rect in &frame.rects {
            self.draw_rect(rect)?;
        }
        for path in &frame.paths {
            self.draw_path(path)?;
        }
        for circle in &frame.circles {
            self.draw_circle(circle)?;
        }
        for text in &frame.texts {
            self.draw_text(text)?;
        }
        self.end_frame()
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
