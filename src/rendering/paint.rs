//! Paint commands making up the logo's display list

use image::Rgb;

/// Pixel box with inclusive corners, the way the logo geometry is written down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0) as u32 + 1
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0) as u32 + 1
    }
}

/// Which face a text run is set in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Tagline,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Flood the whole canvas
    Fill { rgb: Rgb<u8> },
    SolidRect { bounds: Bounds, rgb: Rgb<u8> },
    /// Filled ellipse inscribed in `bounds`
    Ellipse { bounds: Bounds, rgb: Rgb<u8> },
    /// Stroke along the ellipse inscribed in `bounds`, clockwise from
    /// `start_deg` to `end_deg` (0° at 3 o'clock). The stroke lies inside the box.
    Arc {
        bounds: Bounds,
        start_deg: f32,
        end_deg: f32,
        width: u32,
        rgb: Rgb<u8>,
    },
    /// Text run anchored at its top-left corner
    Text {
        x: i32,
        y: i32,
        text: String,
        role: TextRole,
        rgb: Rgb<u8>,
    },
}
