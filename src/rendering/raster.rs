//! Rasterizer: executes a display list onto a fresh RGB canvas

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use log::debug;

use crate::fonts::{bitmap, Face, FontSet};
use crate::rendering::paint::{Bounds, PaintCommand, TextRole};
use crate::rendering::Logo;
use crate::{Error, Result, WHITE};

/// Allocate a white `width`×`height` canvas and paint `commands` onto it in order.
pub fn rasterize(width: u32, height: u32, commands: &[PaintCommand], fonts: &FontSet) -> Result<Logo> {
    if width == 0 || height == 0 {
        return Err(Error::RenderError(format!("canvas must not be empty ({width}x{height})")));
    }

    let mut canvas = RgbImage::from_pixel(width, height, WHITE);
    for cmd in commands {
        paint(&mut canvas, cmd, fonts);
    }
    debug!("rasterized {} commands onto {width}x{height} canvas", commands.len());

    Ok(Logo::new(canvas))
}

fn paint(canvas: &mut RgbImage, cmd: &PaintCommand, fonts: &FontSet) {
    match cmd {
        PaintCommand::Fill { rgb } => {
            for px in canvas.pixels_mut() {
                *px = *rgb;
            }
        }
        PaintCommand::SolidRect { bounds, rgb } => {
            let rect = Rect::at(bounds.x0, bounds.y0).of_size(bounds.width(), bounds.height());
            draw_filled_rect_mut(canvas, rect, *rgb);
        }
        PaintCommand::Ellipse { bounds, rgb } => {
            let center = ((bounds.x0 + bounds.x1) / 2, (bounds.y0 + bounds.y1) / 2);
            let rx = (bounds.x1 - bounds.x0) / 2;
            let ry = (bounds.y1 - bounds.y0) / 2;
            draw_filled_ellipse_mut(canvas, center, rx, ry, *rgb);
        }
        PaintCommand::Arc {
            bounds,
            start_deg,
            end_deg,
            width,
            rgb,
        } => stroke_arc(canvas, bounds, *start_deg, *end_deg, *width, *rgb),
        PaintCommand::Text { x, y, text, role, rgb } => {
            let face = match role {
                TextRole::Title => &fonts.title,
                TextRole::Tagline => &fonts.tagline,
            };
            match face {
                Face::Scalable { font, scale } => {
                    draw_text_mut(canvas, *rgb, *x, *y, *scale, &**font, text)
                }
                Face::Bitmap => bitmap::draw_text(canvas, *x, *y, text, *rgb),
            }
        }
    }
}

/// Stroke the part of the ellipse inscribed in `bounds` between the two angles.
///
/// A pixel is painted when it lies inside the outer ellipse, outside the
/// ellipse shrunk by `width`, and its angle from the centre falls in the
/// clockwise sweep from `start_deg` to `end_deg`.
pub fn stroke_arc(canvas: &mut RgbImage, bounds: &Bounds, start_deg: f32, end_deg: f32, width: u32, rgb: Rgb<u8>) {
    let (cw, ch) = canvas.dimensions();
    let cx = (bounds.x0 + bounds.x1) as f32 / 2.0;
    let cy = (bounds.y0 + bounds.y1) as f32 / 2.0;
    let rx = (bounds.x1 - bounds.x0) as f32 / 2.0;
    let ry = (bounds.y1 - bounds.y0) as f32 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let irx = rx - width as f32;
    let iry = ry - width as f32;

    let sweep = end_deg - start_deg;
    let full = sweep.abs() >= 360.0;
    let sweep = sweep.rem_euclid(360.0);

    let x_lo = bounds.x0.max(0);
    let y_lo = bounds.y0.max(0);
    let x_hi = bounds.x1.min(cw as i32 - 1);
    let y_hi = bounds.y1.min(ch as i32 - 1);

    for py in y_lo..=y_hi {
        for px in x_lo..=x_hi {
            let dx = px as f32 - cx;
            let dy = py as f32 - cy;

            if (dx / rx).powi(2) + (dy / ry).powi(2) > 1.0 {
                continue;
            }
            if irx > 0.0 && iry > 0.0 && (dx / irx).powi(2) + (dy / iry).powi(2) < 1.0 {
                continue;
            }
            if !full {
                let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
                if (angle - start_deg).rem_euclid(360.0) > sweep {
                    continue;
                }
            }
            canvas.put_pixel(px as u32, py as u32, rgb);
        }
    }
}
