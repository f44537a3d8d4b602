//! Font resolution with a built-in fallback.
//!
//! The logo wants one named TrueType font at two sizes. If that file cannot
//! be found or parsed, both sizes silently use the bitmap face from
//! [`bitmap`]. The decision is made once per render.

pub mod bitmap;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ab_glyph::{Font, FontVec, PxScale};
use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use log::debug;

use crate::{Error, LogoConfig, Result};

/// One resolved text face
#[derive(Clone)]
pub enum Face {
    /// Scalable outline font at a fixed pixel scale
    Scalable { font: Arc<FontVec>, scale: PxScale },
    /// Built-in 8×8 glyphs; ignores the requested size
    Bitmap,
}

impl Face {
    pub fn is_bitmap(&self) -> bool {
        matches!(self, Face::Bitmap)
    }
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Scalable { scale, .. } => f
                .debug_struct("Scalable")
                .field("scale_x", &scale.x)
                .field("scale_y", &scale.y)
                .finish(),
            Face::Bitmap => f.write_str("Bitmap"),
        }
    }
}

/// Faces for the title lines and the tagline
#[derive(Debug, Clone)]
pub struct FontSet {
    pub title: Face,
    pub tagline: Face,
}

impl FontSet {
    /// Both roles on the bitmap face
    pub fn fallback() -> Self {
        Self {
            title: Face::Bitmap,
            tagline: Face::Bitmap,
        }
    }
}

/// Resolve the configured font, falling back to the bitmap face for both
/// sizes on any failure. Never returns an error.
pub fn resolve_fonts(config: &LogoConfig) -> FontSet {
    let family = config.system_fonts.then_some(config.font_family.as_str());
    match load_scalable(&config.font_file, family) {
        Ok(font) => {
            let font = Arc::new(font);
            FontSet {
                title: Face::Scalable {
                    scale: em_scale(&*font, config.title_size),
                    font: Arc::clone(&font),
                },
                tagline: Face::Scalable {
                    scale: em_scale(&*font, config.tagline_size),
                    font,
                },
            }
        }
        Err(e) => {
            debug!("{e}; using built-in bitmap font");
            FontSet::fallback()
        }
    }
}

/// Load a scalable font.
///
/// `file` is tried as a path (relative to the working directory) first. If
/// it is not there and a `family` is given, the installed fonts are asked for
/// the best regular face of that family.
pub fn load_scalable(file: &str, family: Option<&str>) -> Result<FontVec> {
    let path = Path::new(file);
    if path.is_file() {
        debug!("loading font from {}", path.display());
        let bytes = fs::read(path)
            .map_err(|e| Error::FontUnavailable(format!("{}: {e}", path.display())))?;
        return FontVec::try_from_vec(bytes)
            .map_err(|e| Error::FontUnavailable(format!("{}: {e}", path.display())));
    }

    let family = family.ok_or_else(|| Error::FontUnavailable(format!("{file} not found")))?;
    let (bytes, index) = system_font(family)?;
    FontVec::try_from_vec_and_index(bytes, index)
        .map_err(|e| Error::FontUnavailable(format!("{family}: {e}")))
}

/// Bytes and collection index of the installed face best matching `family`
fn system_font(family: &str) -> Result<(Vec<u8>, u32)> {
    let source = SystemSource::new();
    let handle = source
        .select_best_match(&[FamilyName::Title(family.to_string())], &Properties::new())
        .map_err(|e| Error::FontUnavailable(format!("{family}: {e}")))?;
    let index = match &handle {
        Handle::Path { font_index, .. } | Handle::Memory { font_index, .. } => *font_index,
    };

    let font = handle
        .load()
        .map_err(|e| Error::FontUnavailable(format!("{family}: {e}")))?;
    debug!("resolved {family} to {}", font.full_name());
    let data = font
        .copy_font_data()
        .ok_or_else(|| Error::FontUnavailable(format!("{family}: no font data")))?;

    Ok(((*data).clone(), index))
}

/// Pixel scale whose em square is `size` pixels tall.
///
/// `PxScale` measures ascent to descent, so the em size has to be converted
/// through the font's own metrics.
fn em_scale(font: &impl Font, size: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(size * font.height_unscaled() / units_per_em)
}
