//! End-to-end tests for the extension-icons binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64">
    <rect width="64" height="64" fill="#43a047"/>
</svg>"##;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_extension-icons"))
        .args(args)
        .arg("--no-system-fonts")
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run extension-icons")
}

fn has_png(dir: &Path) -> bool {
    fs::read_dir(dir)
        .unwrap()
        .any(|e| e.unwrap().path().extension().is_some_and(|ext| ext == "png"))
}

#[test]
fn test_missing_input_exits_with_1() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("icon.svg not found"), "stderr: {stderr}");
    assert!(!has_png(dir.path()));
}

#[cfg(feature = "direct")]
#[test]
fn test_no_arguments_generates_default_icons() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("icon.svg"), ICON_SVG).unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating icons using direct"));
    for size in [16u32, 48, 128] {
        let name = format!("icon{size}.png");
        assert!(stdout.contains(&format!("Generated: {name} ({size}x{size})")));
        let img = image::open(dir.path().join(&name)).unwrap();
        assert_eq!((img.width(), img.height()), (size, size));
    }
    assert!(stdout.contains("All icons generated successfully!"));
    assert!(stdout.contains("Files are ready in:"));
}

#[cfg(feature = "resample")]
#[test]
fn test_forced_resample_backend_with_custom_sizes() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("logo.svg"), ICON_SVG).unwrap();

    let output = run_in(
        dir.path(),
        &["--input", "logo.svg", "--backend", "resample", "--sizes", "32,96"],
    );

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating icons using resample"));
    for size in [32u32, 96] {
        let img = image::open(dir.path().join(format!("icon{size}.png"))).unwrap();
        assert_eq!((img.width(), img.height()), (size, size));
    }
    assert!(!dir.path().join("icon16.png").exists());
}

#[test]
fn test_invalid_svg_reports_generation_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("icon.svg"), "<svg").unwrap();

    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    // With no backend compiled in the run stops before parsing
    if cfg!(any(feature = "direct", feature = "resample")) {
        assert!(stderr.contains("Error generating icons:"), "stderr: {stderr}");
    } else {
        assert!(stderr.contains("cargo install extension-icons --features direct"));
    }
    assert!(!has_png(dir.path()));
}

#[test]
fn test_zero_size_is_rejected_by_argument_parser() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("icon.svg"), ICON_SVG).unwrap();

    let output = run_in(dir.path(), &["--sizes", "0"]);

    assert!(!output.status.success());
    assert!(!has_png(dir.path()));
}
