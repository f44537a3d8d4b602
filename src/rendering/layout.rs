//! Fixed composition of the logo.
//!
//! The cart sits bottom-left; the wordmark and tagline are stacked to its
//! right starting at x = 200.

use crate::rendering::paint::{Bounds, PaintCommand, TextRole};
use crate::LogoConfig;

/// Cart body
pub const CART_BODY: Bounds = Bounds { x0: 50, y0: 200, x1: 150, y1: 220 };
pub const LEFT_WHEEL: Bounds = Bounds { x0: 60, y0: 220, x1: 80, y1: 240 };
pub const RIGHT_WHEEL: Bounds = Bounds { x0: 120, y0: 220, x1: 140, y1: 240 };
/// Box of the circle the handle is cut from; only its upper-left quarter is drawn
pub const HANDLE_BOX: Bounds = Bounds { x0: 50, y0: 120, x1: 150, y1: 220 };
pub const HANDLE_START_DEG: f32 = 180.0;
pub const HANDLE_END_DEG: f32 = 270.0;
pub const HANDLE_WIDTH: u32 = 5;

pub const TITLE_ORIGIN: (i32, i32) = (200, 100);
pub const ACCENT_ORIGIN: (i32, i32) = (200, 170);
pub const TAGLINE_ORIGIN: (i32, i32) = (200, 240);

/// Build the display list: background, cart icon, then the three text runs.
pub fn compose(config: &LogoConfig) -> Vec<PaintCommand> {
    let icon = config.icon_color;

    vec![
        PaintCommand::Fill { rgb: config.background },
        PaintCommand::SolidRect { bounds: CART_BODY, rgb: icon },
        PaintCommand::Ellipse { bounds: LEFT_WHEEL, rgb: icon },
        PaintCommand::Ellipse { bounds: RIGHT_WHEEL, rgb: icon },
        PaintCommand::Arc {
            bounds: HANDLE_BOX,
            start_deg: HANDLE_START_DEG,
            end_deg: HANDLE_END_DEG,
            width: HANDLE_WIDTH,
            rgb: icon,
        },
        PaintCommand::Text {
            x: TITLE_ORIGIN.0,
            y: TITLE_ORIGIN.1,
            text: config.title.clone(),
            role: TextRole::Title,
            rgb: config.title_color,
        },
        PaintCommand::Text {
            x: ACCENT_ORIGIN.0,
            y: ACCENT_ORIGIN.1,
            text: config.accent.clone(),
            role: TextRole::Title,
            rgb: config.accent_color,
        },
        PaintCommand::Text {
            x: TAGLINE_ORIGIN.0,
            y: TAGLINE_ORIGIN.1,
            text: config.tagline.clone(),
            role: TextRole::Tagline,
            rgb: config.tagline_color,
        },
    ]
}
