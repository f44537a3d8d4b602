//! Rendering: display list, rasterizer and the finished canvas

pub mod layout;
pub mod paint;
pub mod raster;

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use sha2::{Digest, Sha256};

use crate::Result;

/// A fully drawn logo, ready to be encoded
#[derive(Debug, Clone)]
pub struct Logo {
    canvas: RgbImage,
}

impl Logo {
    pub fn new(canvas: RgbImage) -> Self {
        Self { canvas }
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Colour at (`x`, `y`). Panics outside the canvas, like `RgbImage::get_pixel`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.canvas.get_pixel(x, y)
    }

    /// Encode as an RGB PNG in memory
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut png = Vec::new();
        self.canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    /// Hex SHA-256 over the dimensions and raw pixel bytes.
    ///
    /// Independent of PNG encoder settings, so it is what golden tests compare.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width().to_be_bytes());
        hasher.update(self.height().to_be_bytes());
        hasher.update(self.canvas.as_raw());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_starts_with_signature() {
        let logo = Logo::new(RgbImage::from_pixel(8, 4, Rgb([41, 128, 185])));
        let png = logo.to_png().unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (8, 4));
        assert_eq!(*decoded.get_pixel(7, 3), Rgb([41, 128, 185]));
    }

    #[test]
    fn digest_tracks_pixels_and_shape() {
        let a = Logo::new(RgbImage::from_pixel(4, 2, Rgb([0, 0, 0])));
        let b = Logo::new(RgbImage::from_pixel(2, 4, Rgb([0, 0, 0])));
        let mut c = a.clone();
        c.canvas.put_pixel(0, 0, Rgb([1, 0, 0]));

        assert_eq!(a.digest().len(), 64);
        assert_eq!(a.digest(), a.clone().digest());
        assert_ne!(a.digest(), b.digest());
        assert_ne!(a.digest(), c.digest());
    }
}
