//! End-to-end tests driving the `icon-pad` binary.

mod common;

use std::process::{Command, Output};

use common::{OPAQUE_RED, open_rgba, opaque_bounds, solid_png, workdir};

fn icon_pad(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_icon-pad"))
        .args(args)
        .output()
        .expect("run icon-pad")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_no_arguments_prints_usage() {
    let out = icon_pad(&[]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Usage: icon-pad"));
}

#[test]
fn test_pads_with_default_output() {
    let dir = workdir();
    let input = solid_png(dir.path(), "icon.png", 256, 256, OPAQUE_RED);

    let out = icon_pad(&[input.as_os_str()]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Success! Saved padded icon to:"));
    assert!(text.contains("Dimensions: 1024x1024 (Content: 824x824)"));

    let img = open_rgba(&dir.path().join("icon_padded.png"));
    assert_eq!(opaque_bounds(&img), Some((100, 100, 924, 924)));
}

#[test]
fn test_vertical_shift_argument() {
    let dir = workdir();
    let input = solid_png(dir.path(), "icon.png", 256, 256, OPAQUE_RED);

    let out = icon_pad(&[input.as_os_str(), "20".as_ref()]);
    assert!(out.status.success());
    let img = open_rgba(&dir.path().join("icon_padded.png"));
    assert_eq!(opaque_bounds(&img), Some((100, 80, 924, 904)));

    let out = icon_pad(&[input.as_os_str(), "-20".as_ref()]);
    assert!(out.status.success());
    let img = open_rgba(&dir.path().join("icon_padded.png"));
    assert_eq!(opaque_bounds(&img), Some((100, 120, 924, 944)));
}

#[test]
fn test_output_and_target_flags() {
    let dir = workdir();
    let input = solid_png(dir.path(), "icon.png", 256, 128, OPAQUE_RED);
    let output = dir.path().join("custom.png");

    let out = icon_pad(&[
        input.as_os_str(),
        "--target-size".as_ref(),
        "512".as_ref(),
        "-o".as_ref(),
        output.as_os_str(),
    ]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("(Content: 512x256)"));
    assert_eq!(opaque_bounds(&open_rgba(&output)), Some((256, 384, 768, 640)));
}

#[test]
fn test_missing_file_message() {
    let dir = workdir();
    let input = dir.path().join("ghost.png");

    let out = icon_pad(&[input.as_os_str()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("Error: File not found at"));
    assert!(!dir.path().join("ghost_padded.png").exists());
}

#[test]
fn test_non_integer_shift_is_rejected() {
    let dir = workdir();
    let input = solid_png(dir.path(), "icon.png", 8, 8, OPAQUE_RED);

    let out = icon_pad(&[input.as_os_str(), "up".as_ref()]);
    assert!(!out.status.success());
    assert!(!dir.path().join("icon_padded.png").exists());
}

#[test]
fn test_out_of_range_target_size_is_reported() {
    let dir = workdir();
    let input = solid_png(dir.path(), "icon.png", 10, 10, OPAQUE_RED);

    for size in ["0", "400000"] {
        let out = icon_pad(&[input.as_os_str(), "-t".as_ref(), size.as_ref()]);
        assert!(out.status.success());
        let expected = format!(
            "An error occurred: Configuration error in 'target_size': must be between 1 and 4096 (value: {})",
            size
        );
        assert!(stdout(&out).contains(&expected), "{}", stdout(&out));
        assert!(!dir.path().join("icon_padded.png").exists());
    }
}
