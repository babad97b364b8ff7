//! Pointer-driven tooltip behavior shared by all charts.
//!
//! Charts publish `HitRegion`s next to their frame. A `TooltipController`
//! turns pointer enter/move/leave events over those regions into a
//! `TooltipState` that renderers draw as a floating annotation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Text lines shown inside the tooltip for one shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipContent {
    lines: SmallVec<[String; 3]>,
}

impl TooltipContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Formats a statistic the way tooltips display it (`12`, `12.5`).
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Pointer-sensitive area of one rendered shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitShape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
    },
}

impl HitShape {
    #[must_use]
    pub fn contains(self, px: f64, py: f64) -> bool {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
            } => px >= x && px <= x + width && py >= y && py <= y + height,
            Self::Circle { cx, cy, radius } => {
                let dx = px - cx;
                let dy = py - cy;
                dx * dx + dy * dy <= radius * radius
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub shape: HitShape,
    pub content: TooltipContent,
}

impl HitRegion {
    #[must_use]
    pub fn new(shape: HitShape, content: TooltipContent) -> Self {
        Self { shape, content }
    }
}

/// Distance from the pointer to the tooltip's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl TooltipOffset {
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Public tooltip state handed to renderers.
///
/// Content and position survive a hide; only `opacity` drops to `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub content: TooltipContent,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            opacity: 0.0,
            content: TooltipContent::default(),
        }
    }
}

impl TooltipState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && !self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipController {
    offset: TooltipOffset,
    state: TooltipState,
    hovered: Option<usize>,
}

impl TooltipController {
    #[must_use]
    pub fn new(offset: TooltipOffset) -> Self {
        Self {
            offset,
            state: TooltipState::default(),
            hovered: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    #[must_use]
    pub fn hovered_region(&self) -> Option<usize> {
        self.hovered
    }

    /// Reveals the tooltip with `content` next to the pointer.
    pub fn pointer_enter(&mut self, content: TooltipContent, x: f64, y: f64) {
        trace!(x, y, "tooltip enter");
        self.state.content = content;
        self.state.opacity = 1.0;
        self.place(x, y);
    }

    /// Follows the pointer while the tooltip is shown.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.state.opacity > 0.0 {
            self.place(x, y);
        }
    }

    pub fn pointer_leave(&mut self) {
        trace!("tooltip leave");
        self.state.opacity = 0.0;
        self.hovered = None;
    }

    /// Hit-tests `regions` (last one on top) and dispatches enter/move/leave.
    ///
    /// Returns the index of the region under the pointer.
    pub fn pointer_at(&mut self, x: f64, y: f64, regions: &[HitRegion]) -> Option<usize> {
        let hit = regions.iter().rposition(|region| region.shape.contains(x, y));
        match (self.hovered, hit) {
            (Some(current), Some(index)) if current == index => self.pointer_move(x, y),
            (_, Some(index)) => {
                if self.hovered.is_some() {
                    self.pointer_leave();
                }
                self.pointer_enter(regions[index].content.clone(), x, y);
                self.hovered = Some(index);
            }
            (Some(_), None) => self.pointer_leave(),
            (None, None) => {}
        }
        hit
    }

    fn place(&mut self, x: f64, y: f64) {
        self.state.x = x + self.offset.dx;
        self.state.y = y + self.offset.dy;
    }
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(format_value(672.0), "672");
        assert_eq!(format_value(48.5), "48.5");
        assert_eq!(format_value(-3.0), "-3");
    }
}
