use crate::charts::ChartScene;
use crate::core::Viewport;
use crate::interaction::TooltipOffset;
use crate::render::{Color, RenderFrame, TextHAlign, TextPrimitive};

pub const PLACEHOLDER_MESSAGE: &str = "Data unavailable";
const MESSAGE_FONT_SIZE_PX: f64 = 16.0;
const REASON_FONT_SIZE_PX: f64 = 11.0;

/// Frame shown in place of a chart whose data could not be loaded.
///
/// An empty `reason` omits the detail line.
#[must_use]
pub fn render_placeholder(viewport: Viewport, reason: &str) -> ChartScene {
    let cx = f64::from(viewport.width) / 2.0;
    let cy = f64::from(viewport.height) / 2.0;

    let mut frame = RenderFrame::new(viewport).with_text(TextPrimitive::new(
        PLACEHOLDER_MESSAGE,
        cx,
        cy,
        MESSAGE_FONT_SIZE_PX,
        Color::BLACK,
        TextHAlign::Center,
    ));
    if !reason.is_empty() {
        frame = frame.with_text(TextPrimitive::new(
            reason,
            cx,
            cy + MESSAGE_FONT_SIZE_PX + 4.0,
            REASON_FONT_SIZE_PX,
            Color::GREY,
            TextHAlign::Center,
        ));
    }
    ChartScene::new(frame, TooltipOffset::default())
}
