use std::fmt::Write;

use crate::core::{PathCommand, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, Renderer, TextHAlign,
    TextPrimitive,
};

const TOOLTIP_FONT_SIZE_PX: f64 = 12.0;
const TOOLTIP_PADDING_PX: f64 = 10.0;
const TOOLTIP_LINE_HEIGHT_PX: f64 = 16.0;

/// Renders frames into a standalone SVG document.
///
/// The tooltip is emitted as a trailing `<g class="tooltip">` overlay whose
/// `opacity` mirrors the tooltip state, so a hidden tooltip stays in the
/// document at opacity `0`.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    viewport: Viewport,
    title: Option<String>,
    body: String,
    tooltip: Option<TooltipState>,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(1, 1),
            title: None,
            body: String::new(),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Complete SVG document for the last rendered frame plus tooltip overlay.
    #[must_use]
    pub fn document(&self) -> String {
        let Viewport { width, height } = self.viewport;
        let mut out = String::with_capacity(self.body.len() + 512);
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
        );
        if let Some(title) = &self.title {
            let _ = writeln!(out, "  <title>{}</title>", xml_escape(title));
        }
        out.push_str(&self.body);
        if let Some(tooltip) = &self.tooltip {
            write_tooltip(&mut out, tooltip);
        }
        out.push_str("</svg>\n");
        out
    }

    pub fn write_to(&self, path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.document()).map_err(|err| {
            ChartError::InvalidData(format!("failed to write `{}`: {err}", path.display()))
        })
    }
}

impl Renderer for SvgRenderer {
    fn begin_frame(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = viewport;
        self.body.clear();
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            line.color.to_hex(),
            alpha_attr("stroke-opacity", line.color),
            num(line.stroke_width),
        );
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        let _ = write!(
            self.body,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}"#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            rect.fill_color.to_hex(),
            alpha_attr("fill-opacity", rect.fill_color),
        );
        if rect.border_width > 0.0 {
            let _ = write!(
                self.body,
                r#" stroke="{}" stroke-width="{}""#,
                rect.border_color.to_hex(),
                num(rect.border_width),
            );
        }
        self.body.push_str("/>\n");
        Ok(())
    }

    fn draw_path(&mut self, path: &PathPrimitive) -> ChartResult<()> {
        let _ = write!(self.body, r#"  <path d="{}""#, path_data(&path.commands));
        write_paint(
            &mut self.body,
            path.fill,
            path.stroke,
            path.stroke_width,
            path.opacity,
        );
        self.body.push_str("/>\n");
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> ChartResult<()> {
        let _ = write!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{}""#,
            num(circle.cx),
            num(circle.cy),
            num(circle.radius),
        );
        write_paint(
            &mut self.body,
            circle.fill,
            circle.stroke,
            circle.stroke_width,
            circle.opacity,
        );
        self.body.push_str("/>\n");
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let _ = write!(
            self.body,
            r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}""#,
            num(text.x),
            num(text.y),
            num(text.font_size_px),
            text.color.to_hex(),
        );
        if text.rotation_deg != 0.0 {
            let _ = write!(
                self.body,
                r#" transform="rotate({} {} {})""#,
                num(text.rotation_deg),
                num(text.x),
                num(text.y),
            );
        }
        let _ = writeln!(self.body, ">{}</text>", xml_escape(&text.text));
        Ok(())
    }

    fn set_tooltip(&mut self, tooltip: &TooltipState) -> ChartResult<()> {
        self.tooltip = Some(tooltip.clone());
        Ok(())
    }
}

fn write_tooltip(out: &mut String, tooltip: &TooltipState) {
    let longest = tooltip
        .content
        .lines()
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = longest as f64 * TOOLTIP_FONT_SIZE_PX * 0.6 + TOOLTIP_PADDING_PX * 2.0;
    let height =
        tooltip.content.lines().len() as f64 * TOOLTIP_LINE_HEIGHT_PX + TOOLTIP_PADDING_PX * 2.0;

    let _ = writeln!(
        out,
        r#"  <g class="tooltip" opacity="{}" transform="translate({} {})">"#,
        num(tooltip.opacity),
        num(tooltip.x),
        num(tooltip.y),
    );
    let _ = writeln!(
        out,
        r##"    <rect width="{}" height="{}" rx="5" fill="#ffffff" stroke="#000000" stroke-width="1"/>"##,
        num(width),
        num(height),
    );
    for (index, line) in tooltip.content.lines().iter().enumerate() {
        let baseline = TOOLTIP_PADDING_PX + TOOLTIP_LINE_HEIGHT_PX * (index as f64 + 0.75);
        let _ = writeln!(
            out,
            r##"    <text x="{}" y="{}" font-size="{}" fill="#000000">{}</text>"##,
            num(TOOLTIP_PADDING_PX),
            num(baseline),
            num(TOOLTIP_FONT_SIZE_PX),
            xml_escape(line),
        );
    }
    out.push_str("  </g>\n");
}

fn write_paint(
    out: &mut String,
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
    opacity: f64,
) {
    match fill {
        Some(color) => {
            let _ = write!(
                out,
                r#" fill="{}"{}"#,
                color.to_hex(),
                alpha_attr("fill-opacity", color)
            );
        }
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(color) = stroke {
        let _ = write!(
            out,
            r#" stroke="{}"{} stroke-width="{}""#,
            color.to_hex(),
            alpha_attr("stroke-opacity", color),
            num(stroke_width),
        );
    }
    if opacity < 1.0 {
        let _ = write!(out, r#" opacity="{}""#, num(opacity));
    }
}

fn alpha_attr(name: &str, color: Color) -> String {
    if color.alpha < 1.0 {
        format!(r#" {name}="{}""#, num(color.alpha))
    } else {
        String::new()
    }
}

fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::with_capacity(commands.len() * 24);
    for command in commands {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match *command {
            PathCommand::MoveTo { x, y } => write!(d, "M{} {}", num(x), num(y)),
            PathCommand::LineTo { x, y } => write!(d, "L{} {}", num(x), num(y)),
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => write!(
                d,
                "C{} {} {} {} {} {}",
                num(x1),
                num(y1),
                num(x2),
                num(y2),
                num(x),
                num(y)
            ),
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}

/// Fixed three-decimal output with trailing zeros trimmed.
fn num(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_owned(),
        other => other.to_owned(),
    }
}

/// Escapes the five XML special characters.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{num, path_data, xml_escape};
    use crate::core::PathCommand;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(72.72727), "72.727");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(0.5), "0.5");
    }

    #[test]
    fn path_data_uses_absolute_commands() {
        let d = path_data(&[
            PathCommand::MoveTo { x: 0.0, y: 1.0 },
            PathCommand::LineTo { x: 2.5, y: 3.0 },
            PathCommand::Close,
        ]);
        assert_eq!(d, "M0 1 L2.5 3 Z");
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(xml_escape("Goals & <Assists>"), "Goals &amp; &lt;Assists&gt;");
    }
}
