use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use std::f64::consts::TAU;
use std::path::Path;

use crate::core::{PathCommand, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
        tooltip: &TooltipState,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo raster backend.
///
/// Frames are painted onto an owned image surface through `Renderer::render`
/// or onto a caller-provided context through `CairoContextRenderer`. The
/// tooltip is painted on top of the last frame when it is visible; on the
/// owned surface every tooltip update first restores a copy of the frame taken
/// at `end_frame`, so earlier overlays never linger.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    context: Option<Context>,
    external: bool,
    frame_snapshot: Option<ImageSurface>,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            context: None,
            external: false,
            frame_snapshot: None,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    pub fn for_viewport(viewport: Viewport) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::InvalidData("viewport width overflows i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::InvalidData("viewport height overflows i32".to_owned()))?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = std::fs::File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn context(&self) -> ChartResult<&Context> {
        self.context
            .as_ref()
            .ok_or_else(|| ChartError::InvalidData("no active cairo frame".to_owned()))
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
        tooltip: &TooltipState,
    ) -> ChartResult<()> {
        self.context = Some(context.clone());
        self.external = true;
        let result = Renderer::render(self, frame).and_then(|()| self.set_tooltip(tooltip));
        self.external = false;
        self.context = None;
        result
    }

    fn snapshot_surface(&self) -> ChartResult<ImageSurface> {
        self.surface.flush();
        let snapshot =
            ImageSurface::create(Format::ARgb32, self.surface.width(), self.surface.height())
                .map_err(|err| map_backend_error("failed to create frame snapshot", err))?;
        let context = Context::new(&snapshot)
            .map_err(|err| map_backend_error("failed to create snapshot context", err))?;
        context
            .set_source_surface(&self.surface, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to read surface", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to copy surface", err))?;
        drop(context);
        snapshot.flush();
        Ok(snapshot)
    }

    /// Repaints the last rendered frame over any previous tooltip.
    fn restore_frame(&self, context: &Context) -> ChartResult<()> {
        let Some(snapshot) = &self.frame_snapshot else {
            return Ok(());
        };
        context
            .save()
            .map_err(|err| map_backend_error("failed to save state", err))?;
        context.set_operator(Operator::Source);
        context
            .set_source_surface(snapshot, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to select frame snapshot", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to restore frame", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))
    }
}

impl Renderer for CairoRenderer {
    fn begin_frame(&mut self, _viewport: Viewport) -> ChartResult<()> {
        if self.context.is_none() {
            let context = Context::new(&self.surface)
                .map_err(|err| map_backend_error("failed to create cairo context", err))?;
            self.context = Some(context);
        }
        self.clear_color.validate()?;
        let context = self.context()?;
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.last_stats = CairoRenderStats::default();
        Ok(())
    }

    fn end_frame(&mut self) -> ChartResult<()> {
        if !self.external {
            self.frame_snapshot = Some(self.snapshot_surface()?);
        }
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        let context = self.context()?;
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        self.last_stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(context, rect.fill_color);
        if rect.border_width > 0.0 {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            apply_color(context, rect.border_color);
            context.set_line_width(rect.border_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
        } else {
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        }
        self.last_stats.rects_drawn += 1;
        Ok(())
    }

    fn draw_path(&mut self, path: &PathPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        context.new_path();
        for command in &path.commands {
            match *command {
                PathCommand::MoveTo { x, y } => context.move_to(x, y),
                PathCommand::LineTo { x, y } => context.line_to(x, y),
                PathCommand::CubicTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => context.curve_to(x1, y1, x2, y2, x, y),
                PathCommand::Close => context.close_path(),
            }
        }
        paint_current_path(
            context,
            path.fill,
            path.stroke,
            path.stroke_width,
            path.opacity,
        )?;
        self.last_stats.paths_drawn += 1;
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()> {
        let context = self.context()?;
        context.new_path();
        context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
        paint_current_path(
            context,
            circle.fill,
            circle.stroke,
            circle.stroke_width,
            circle.opacity,
        )?;
        self.last_stats.circles_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let context = self.context()?;
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let dx = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -f64::from(text_width) / 2.0,
            TextHAlign::Right => -f64::from(text_width),
        };

        context.save().map_err(|err| map_backend_error("failed to save state", err))?;
        context.translate(text.x, text.y);
        context.rotate(text.rotation_deg.to_radians());
        apply_color(context, text.color);
        // Pango lays out from the top-left corner; `y` is the baseline.
        context.move_to(dx, -f64::from(text_height) * 0.8);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore state", err))?;
        self.last_stats.texts_drawn += 1;
        Ok(())
    }

    fn set_tooltip(&mut self, tooltip: &TooltipState) -> ChartResult<()> {
        let owned;
        let context = match &self.context {
            Some(context) => context,
            None => {
                owned = Context::new(&self.surface)
                    .map_err(|err| map_backend_error("failed to create cairo context", err))?;
                &owned
            }
        };
        if !self.external {
            self.restore_frame(context)?;
        }
        if !tooltip.is_visible() {
            self.last_stats.tooltip_drawn = false;
            return Ok(());
        }

        let lines = tooltip.content.lines();
        let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let width = longest as f64 * 7.2 + 20.0;
        let height = lines.len() as f64 * 16.0 + 20.0;

        context.push_group();
        context.rectangle(tooltip.x, tooltip.y, width, height);
        apply_color(context, Color::WHITE);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill tooltip", err))?;
        apply_color(context, Color::BLACK);
        context.set_line_width(1.0);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke tooltip", err))?;
        for (index, line) in lines.iter().enumerate() {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&FontDescription::from_string("Sans 12")));
            layout.set_text(line);
            context.move_to(tooltip.x + 10.0, tooltip.y + 10.0 + 16.0 * index as f64);
            pangocairo::functions::show_layout(context, &layout);
        }
        context
            .pop_group_to_source()
            .map_err(|err| map_backend_error("failed to compose tooltip", err))?;
        context
            .paint_with_alpha(tooltip.opacity)
            .map_err(|err| map_backend_error("failed to paint tooltip", err))?;
        self.last_stats.tooltip_drawn = true;
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
        tooltip: &TooltipState,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame, tooltip)
    }
}

fn paint_current_path(
    context: &Context,
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
    opacity: f64,
) -> ChartResult<()> {
    if let Some(color) = fill {
        apply_color(context, Color::rgba(color.red, color.green, color.blue, color.alpha * opacity));
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
    }
    if let Some(color) = stroke.filter(|_| stroke_width > 0.0) {
        apply_color(context, Color::rgba(color.red, color.green, color.blue, color.alpha * opacity));
        context.set_line_width(stroke_width);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
    }
    context.new_path();
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
