//! Runs the real binary, which always writes to the crate's resource tree.

use std::process::Command;

use falimy_logo::default_output_path;

#[test]
fn binary_writes_logo_and_reports_path() {
    let out = Command::new(env!("CARGO_BIN_EXE_falimy-logo"))
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn falimy-logo");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let path = default_output_path();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), format!("Logo created and saved to {}", path.display()));

    let img = image::open(&path).expect("open written logo").to_rgb8();
    assert_eq!(img.dimensions(), (600, 300));

    // the run is repeatable
    let again = Command::new(env!("CARGO_BIN_EXE_falimy-logo"))
        .output()
        .expect("spawn falimy-logo");
    assert!(again.status.success());
}
