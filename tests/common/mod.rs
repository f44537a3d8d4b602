//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use falimy_logo::LogoConfig;

/// The shipped design with a font name that cannot resolve, so the bitmap
/// fallback is always exercised regardless of what the host has installed.
pub fn fallback_config() -> LogoConfig {
    LogoConfig {
        font_file: "falimy-missing-face.ttf".to_string(),
        system_fonts: false,
        ..Default::default()
    }
}

/// Fresh, empty scratch directory unique to this test process
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("falimy-logo-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
