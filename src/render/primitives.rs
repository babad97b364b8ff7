use serde::{Deserialize, Serialize};

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREY: Self = Self::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rgb`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: String = match digits.len() {
            _ if !digits.is_ascii() => {
                return Err(ChartError::InvalidData(format!(
                    "invalid hex color `{hex}`"
                )));
            }
            3 => digits.chars().flat_map(|ch| [ch, ch]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "invalid hex color `{hex}`"
                )));
            }
        };
        let channel = |start: usize| {
            u8::from_str_radix(&expanded[start..start + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("invalid hex color `{hex}`")))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `#rrggbb`, ignoring alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_opacity(opacity: f64) -> ChartResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(ChartError::InvalidData(
            "opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    Ok(())
}

fn validate_stroke_width(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width < 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Axis-aligned filled rectangle with an optional border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_color: fill_color,
            border_width: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_color: Color, border_width: f64) -> Self {
        self.border_color = border_color;
        self.border_width = border_width;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if ![self.x, self.y, self.width, self.height]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        validate_stroke_width(self.border_width)?;
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Circle marker or reference ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn filled(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn outlined(cx: f64, cy: f64, radius: f64, stroke: Color, stroke_width: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        validate_opacity(self.opacity)?;
        for color in self.fill.iter().chain(self.stroke.iter()) {
            color.validate()?;
        }
        Ok(())
    }
}

/// Polyline or curve made of path commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(commands: Vec<PathCommand>, stroke: Color, stroke_width: f64) -> Self {
        Self {
            commands,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn filled(commands: Vec<PathCommand>, fill: Color, opacity: f64) -> Self {
        Self {
            commands,
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
            opacity,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self.commands.first() {
            Some(PathCommand::MoveTo { .. }) => {}
            Some(_) => {
                return Err(ChartError::InvalidData(
                    "path must start with a move command".to_owned(),
                ));
            }
            None => {
                return Err(ChartError::InvalidData(
                    "path must not be empty".to_owned(),
                ));
            }
        }
        if !self.commands.iter().all(|command| command.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        validate_opacity(self.opacity)?;
        for color in self.fill.iter().chain(self.stroke.iter()) {
            color.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `y` is the baseline. `rotation_deg` rotates clockwise around `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
