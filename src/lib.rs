//! Falimy Mart logo renderer
//!
//! Draws the storefront logo (blue panel, shopping-cart glyph, two-line
//! wordmark and tagline) into a 600×300 RGB canvas and stores it as the
//! static image the web shop serves.
//!
//! The design is fixed: [`LogoConfig::default`] carries every constant and the
//! `falimy-logo` binary never deviates from it. The config type exists so the
//! render pass can be pointed at other fonts or destinations in tests.
//!
//! # Example
//!
//! ```no_run
//! use falimy_logo::{generate_logo, output, LogoConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = generate_logo(&LogoConfig::default(), &output::program_dir())?;
//! println!("{}", falimy_logo::confirmation_message(&path));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use image::Rgb;
use log::info;

pub mod error;
pub use error::{Error, Result};

pub mod fonts;
pub mod output;
pub mod rendering;

pub use fonts::{resolve_fonts, Face, FontSet};
pub use output::{default_output_path, save_logo};
pub use rendering::Logo;

/// Panel colour behind the whole logo
pub const BACKGROUND: Rgb<u8> = Rgb([41, 128, 185]);
/// Cart icon, first title line and tagline
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
/// Second title line
pub const YELLOW: Rgb<u8> = Rgb([255, 204, 0]);

/// Everything the render pass reads.
///
/// The defaults reproduce the shipped logo. Cart geometry and text anchors
/// live in [`rendering::layout`] and are not configurable.
#[derive(Debug, Clone)]
pub struct LogoConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Panel fill painted over the initial white canvas
    pub background: Rgb<u8>,
    /// Cart body, wheels and handle
    pub icon_color: Rgb<u8>,
    pub title: String,
    pub title_color: Rgb<u8>,
    pub accent: String,
    pub accent_color: Rgb<u8>,
    pub tagline: String,
    pub tagline_color: Rgb<u8>,
    /// Path of the scalable font to try first, relative to the working directory
    pub font_file: String,
    /// Installed font family to look up when `font_file` is not there
    pub font_family: String,
    /// Whether installed fonts may be consulted at all
    pub system_fonts: bool,
    /// Em size in pixels for the two title lines
    pub title_size: f32,
    /// Em size in pixels for the tagline
    pub tagline_size: f32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
            background: BACKGROUND,
            icon_color: WHITE,
            title: "FALIMY".to_string(),
            title_color: WHITE,
            accent: "MART".to_string(),
            accent_color: YELLOW,
            tagline: "Your Convenience Store".to_string(),
            tagline_color: WHITE,
            font_file: "arial.ttf".to_string(),
            font_family: "Arial".to_string(),
            system_fonts: true,
            title_size: 60.0,
            tagline_size: 30.0,
        }
    }
}

/// Compose the logo in memory. Never touches the filesystem apart from the
/// font lookup.
pub fn render_logo(config: &LogoConfig) -> Result<Logo> {
    let fonts = resolve_fonts(config);
    let commands = rendering::layout::compose(config);
    rendering::raster::rasterize(config.width, config.height, &commands, &fonts)
}

/// Render the logo and write it below `base`, returning the absolute path of
/// the written file.
///
/// The PNG is fully encoded before any directory is created, so a failed
/// render leaves nothing behind.
pub fn generate_logo(config: &LogoConfig, base: &Path) -> Result<PathBuf> {
    let logo = render_logo(config)?;
    let path = output::output_path_under(base)?;
    save_logo(&logo, &path)?;
    info!("wrote {}x{} logo to {}", logo.width(), logo.height(), path.display());
    Ok(path)
}

/// The line printed after a successful run
pub fn confirmation_message(path: &Path) -> String {
    format!("Logo created and saved to {}", path.display())
}
