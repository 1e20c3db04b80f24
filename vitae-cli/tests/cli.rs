use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn render_html_to_stdout() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render").arg(fixture_path("resume.yml"));

    let output_pred = predicate::str::contains("<!DOCTYPE html>")
        .and(predicate::str::contains("<title>Jane Doe Resume</title>"))
        .and(predicate::str::contains("<b>Shipped</b> the renderer"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_with_theme_and_format_flags() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render")
        .arg(fixture_path("resume.yml"))
        .arg("--theme")
        .arg("modern")
        .arg("--to")
        .arg("fragment");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<h1>Jane Doe</h1>"))
        .stdout(predicate::str::contains("<!DOCTYPE html>").not());
}

#[test]
fn render_json() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render")
        .arg(fixture_path("resume.yml"))
        .arg("--to")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Jane Doe Resume\""));
}

#[test]
fn render_writes_output_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("resume.html");
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render")
        .arg(fixture_path("resume.yml"))
        .arg("-o")
        .arg(&out);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));
    let html = fs::read_to_string(out).unwrap();
    assert!(html.contains("summary-inline"));
}

#[test]
fn output_extension_picks_the_format() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("resume.json");
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render")
        .arg(fixture_path("resume.yml"))
        .arg("-o")
        .arg(&out);

    cmd.assert().success();
    let json = fs::read_to_string(&out).unwrap();
    assert!(json.trim_start().starts_with('{'));
    assert!(json.contains("\"title\": \"Jane Doe Resume\""));

    let out = dir.path().join("resume.htm");
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render")
        .arg(fixture_path("resume.yml"))
        .arg("--to")
        .arg("fragment")
        .arg("-o")
        .arg(&out);

    cmd.assert().success();
    let fragment = fs::read_to_string(&out).unwrap();
    assert!(!fragment.contains("<!DOCTYPE html>"));
    assert!(fragment.contains("summary-inline"));
}

#[test]
fn render_rejects_unknown_theme() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render")
        .arg(fixture_path("resume.yml"))
        .arg("--theme")
        .arg("neon");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn render_rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render")
        .arg(fixture_path("resume.yml"))
        .arg("--to")
        .arg("pdf");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'pdf' not found"));
}

#[test]
fn render_missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render").arg(fixture_path("does-not-exist.yml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn render_malformed_yaml_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yml");
    fs::write(&path, "contact: [unclosed\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("render").arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error parsing"));
}

#[test]
fn check_passes_clean_document() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("check").arg(fixture_path("resume.yml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ok      work (work)"));
}

#[test]
fn check_fails_on_missing_sections() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("check").arg(fixture_path("missing_section.yml"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("error: Missing sections: \"work\""))
        .stdout(predicate::str::contains(
            "warning: Unordered sections: \"education\"",
        ));
}

#[test]
fn config_file_sets_defaults() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("vitae.toml");
    fs::write(&config, "[export]\ndefault_format = \"json\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("--config")
        .arg(&config)
        .arg("render")
        .arg(fixture_path("resume.yml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"diagnostics\""));
}

#[test]
fn new_prints_preset() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("new").arg("--preset").arg("cover-letter");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_type: cover-letter"));
}

#[test]
fn new_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resume.yml");
    fs::write(&path, "keep: me\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("new").arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep: me\n");

    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("new").arg(&path).arg("--force");
    cmd.assert().success();
    assert!(fs::read_to_string(&path).unwrap().contains("_type: contact"));
}

#[test]
fn new_rejects_unknown_preset() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("new").arg("--preset").arg("portfolio");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown preset 'portfolio'"));
}

#[test]
fn lists_themes_and_formats() {
    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("themes");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fashion").and(predicate::str::contains("sidebar")));

    let mut cmd = cargo_bin_cmd!("vitae");
    cmd.arg("formats");
    cmd.assert().success().stdout(
        predicate::str::contains("html")
            .and(predicate::str::contains("fragment"))
            .and(predicate::str::contains("json")),
    );
}
