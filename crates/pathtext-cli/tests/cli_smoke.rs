use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

fn cli() -> Command {
    Command::new(assert_cmd::cargo_bin!("pathtext-cli"))
}

fn path_count(svg: &str) -> usize {
    let doc = roxmltree::Document::parse(svg).expect("valid svg");
    doc.descendants().filter(|n| n.has_tag_name("path")).count()
}

#[test]
fn text_without_fonts_is_drawn_with_builtin_outlines() {
    let output = cli()
        .args(["--size", "16", "--default-font", "missing/Roboto-Regular.ttf", "Hi"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf-8 svg");
    assert_eq!(path_count(&svg), 2);
    assert!(svg.contains("translate(84, 32) scale(0.8)"));
    assert!(!svg.contains("<text"));
}

#[test]
fn no_synthetic_returns_annotated_text() {
    let output = cli()
        .args(["--no-synthetic", "Hello"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let svg = String::from_utf8(output.stdout).expect("utf-8 svg");
    assert!(svg.contains("<text"));
    assert!(svg.contains("Text-to-path conversion failed"));
}

#[test]
fn non_font_upload_is_rejected() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let pdf = tmp.path().join("font.pdf");
    fs::write(&pdf, b"%PDF-1.7").expect("write pdf");

    let output = cli()
        .args(["--font", pdf.to_string_lossy().as_ref(), "Hi"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please upload a valid font file"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn out_dir_uses_the_sanitized_download_name() {
    let tmp = tempfile::tempdir().expect("tempdir");
    cli()
        .args([
            "--out-dir",
            tmp.path().to_string_lossy().as_ref(),
            "Hello World!",
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(tmp.path().join("hello_world_.svg")).expect("saved svg");
    assert_eq!(path_count(&svg), 10);
}

#[test]
fn blank_stdin_shows_the_notice() {
    let output = assert_cmd::Command::new(assert_cmd::cargo_bin!("pathtext-cli"))
        .arg("-")
        .write_stdin("   \n")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let svg = String::from_utf8_lossy(&output.stdout);
    assert!(svg.contains("Please enter some text!"), "{svg}");
    assert_eq!(path_count(&svg), 0);
}

#[test]
fn png_preview_is_written() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("preview.png");
    cli()
        .args([
            "--format",
            "png",
            "--background",
            "white",
            "--out",
            out.to_string_lossy().as_ref(),
            "Abc",
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "output is not a PNG");
}

#[test]
fn config_file_selects_the_terminal_stage() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("pathtext.json");
    fs::write(&config, r#"{ "terminalStage": "placeholder" }"#).expect("write config");

    let output = cli()
        .args(["--config", config.to_string_lossy().as_ref(), "Hi"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("<text"));
}

#[test]
fn report_lists_attempts_on_stderr() {
    let output = cli()
        .args(["--report", "Hi"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#""stage": "synthetic""#), "{stderr}");
    assert!(stderr.contains(r#""fileName": "hi.svg""#), "{stderr}");
}

#[test]
fn bad_arguments_are_usage_errors() {
    let output = cli().args(["--size"]).output().expect("run cli");
    assert_eq!(output.status.code(), Some(2));
    let output = cli().args(["--format", "pdf", "Hi"]).output().expect("run cli");
    assert_eq!(output.status.code(), Some(2));
}
