//! Where the logo goes and how it gets there

use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Logo, Result};

/// Location of the logo below the program directory
pub const LOGO_RELATIVE_PATH: [&str; 6] = [
    "src",
    "main",
    "resources",
    "static",
    "images",
    "falimy_mart_logo.png",
];

/// The directory the program lives in: this crate's root, fixed at build time.
pub fn program_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Absolute logo path below `base`. A relative `base` is taken from the
/// current working directory.
pub fn output_path_under(base: &Path) -> Result<PathBuf> {
    let base = if base.is_absolute() {
        base.to_path_buf()
    } else {
        env::current_dir()?.join(base)
    };
    Ok(LOGO_RELATIVE_PATH.iter().fold(base, |p, part| p.join(part)))
}

/// The path the binary writes to
pub fn default_output_path() -> PathBuf {
    LOGO_RELATIVE_PATH
        .iter()
        .fold(program_dir(), |p, part| p.join(part))
}

/// Encode `logo` and write it to `path`, creating missing parent directories
/// and replacing any existing file.
pub fn save_logo(logo: &Logo, path: &Path) -> Result<()> {
    let png = logo.to_png()?;
    write_file(path, &png)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!("writing {} bytes to {}", bytes.len(), path.display());
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(bytes)?;
    out.flush()?;
    Ok(())
}
