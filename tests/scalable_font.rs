//! Rendering with a real outline font (DejaVu Sans, shipped under tests/fonts)

mod common;

use falimy_logo::{render_logo, resolve_fonts, Face, LogoConfig, BACKGROUND, YELLOW};
use image::Rgb;

fn dejavu_config() -> LogoConfig {
    LogoConfig {
        font_file: format!("{}/tests/fonts/DejaVuSans.ttf", env!("CARGO_MANIFEST_DIR")),
        system_fonts: false,
        ..Default::default()
    }
}

fn near(a: Rgb<u8>, b: Rgb<u8>) -> bool {
    a.0.iter().zip(b.0.iter()).all(|(x, y)| x.abs_diff(*y) <= 8)
}

#[test]
fn both_roles_resolve_to_the_outline_font() {
    let fonts = resolve_fonts(&dejavu_config());
    match (&fonts.title, &fonts.tagline) {
        (Face::Scalable { scale: title, .. }, Face::Scalable { scale: tagline, .. }) => {
            assert!(title.y > tagline.y);
        }
        other => panic!("expected outline faces, got {other:?}"),
    }
}

#[test]
fn outline_text_lands_at_its_anchors() {
    let logo = render_logo(&dejavu_config()).expect("render");

    let count_in = |x0: u32, y0: u32, x1: u32, y1: u32, want: Rgb<u8>| {
        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .filter(|&(x, y)| near(logo.pixel(x, y), want))
            .count()
    };

    // FALIMY: white glyphs right of x = 200, within the first title line
    assert!(count_in(200, 100, 500, 170, Rgb([255, 255, 255])) > 200);
    // MART: yellow glyphs on the second line, none on the first
    assert!(count_in(200, 170, 400, 240, YELLOW) > 200);
    assert_eq!(count_in(200, 100, 500, 170, YELLOW), 0);
    // tagline below the wordmark
    assert!(count_in(200, 240, 600, 300, Rgb([255, 255, 255])) > 50);
    // nothing drawn left of the text column above the cart
    assert_eq!(count_in(0, 0, 195, 110, Rgb([255, 255, 255])), 0);
}

#[test]
fn outline_render_keeps_background_corners() {
    let logo = render_logo(&dejavu_config()).expect("render");
    for (x, y) in [(0, 0), (599, 0), (0, 299), (599, 299)] {
        assert_eq!(logo.pixel(x, y), BACKGROUND, "corner ({x}, {y})");
    }
}

#[test]
fn outline_render_differs_from_fallback() {
    let outline = render_logo(&dejavu_config()).expect("render");
    let fallback = render_logo(&common::fallback_config()).expect("render");
    assert_ne!(outline.digest(), fallback.digest());
}
