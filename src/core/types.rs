use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Outer pixel size of one rendered chart document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Space reserved around the plot area for axes, labels and legends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Inner drawing rectangle of a chart, in document pixels.
///
/// Shapes are computed in plot-local coordinates and shifted by
/// `(origin_x, origin_y)` when pushed into a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area inside {}x{}",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            origin_x: margins.left,
            origin_y: margins.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn to_document(self, x: f64, y: f64) -> (f64, f64) {
        (self.origin_x + x, self.origin_y + y)
    }
}
