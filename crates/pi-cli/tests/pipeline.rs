//! End-to-end tests for the build and generate pipelines.

use std::path::PathBuf;

use tempfile::TempDir;

use pi_cli::config::{FileConfig, GenerateRequest, resolve_generate};
use pi_cli::pipeline::{BuildRequest, run_build, run_generate};
use pi_model::MergedCorpus;

fn write_icon(dir: &std::path::Path, name: &str, d: &str) {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><path d="{d}"/></svg>"#
    );
    std::fs::write(dir.join(name), svg).unwrap();
}

#[test]
fn build_then_generate_produces_all_outputs() {
    let dir = TempDir::new().unwrap();
    let icons_dir = dir.path().join("icons");
    std::fs::create_dir(&icons_dir).unwrap();
    write_icon(&icons_dir, "alarm.svg", "M1 1");
    write_icon(&icons_dir, "bell.svg", "M2 2");
    std::fs::write(
        icons_dir.join("oversized.svg"),
        r#"<svg width="32" height="32" viewBox="0 0 32 32"><path d="M1"/></svg>"#,
    )
    .unwrap();

    let base_path = dir.path().join("dist/bi.json");
    let build = run_build(&BuildRequest {
        icons_dir: icons_dir.clone(),
        output: base_path.clone(),
        concurrency: 4,
        legacy: false,
    })
    .unwrap();
    assert_eq!(build.stats.total, 3);
    assert_eq!(build.stats.accepted, 2);
    assert_eq!(build.stats.rejected, 1);
    assert!(base_path.is_file());

    // Hand-maintained override recoloring the alarm icon's only layer.
    let override_path = dir.path().join("override.json");
    std::fs::write(&override_path, r##"{"alarm": [{"fill": "#c00"}]}"##).unwrap();

    let out_dir = dir.path().join("out");
    let request = GenerateRequest {
        input: Some(base_path),
        source: Some(override_path),
        out_dir: Some(out_dir.clone()),
        json: Some(None),
        css: Some(None),
        html: Some(None),
        csharp: Some(None),
        ..GenerateRequest::default()
    };
    let options = resolve_generate(&request, &FileConfig::default()).unwrap();
    let result = run_generate(&options).unwrap();

    assert_eq!(result.merged, 2);
    // The rejected icon is an explicit null in the base corpus and is
    // omitted from the merged output with a diagnostic.
    assert_eq!(result.omitted, vec!["oversized".to_string()]);
    assert_eq!(result.outputs.len(), 4);

    let merged: MergedCorpus =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("bi.json")).unwrap()).unwrap();
    // Base geometry wins over the fill-only override; the override is only
    // consulted when the base side has no real path data.
    assert_eq!(
        serde_json::to_string(&merged["alarm"]).unwrap(),
        r#"["M1 1"]"#
    );

    let css = std::fs::read_to_string(out_dir.join("bi.css")).unwrap();
    assert!(css.contains(".pi-alarm::before"));
    assert!(css.contains(".pi-bell::before"));

    let html = std::fs::read_to_string(out_dir.join("bi.html")).unwrap();
    assert!(html.contains("href=\"bi.css\""));

    let csharp = std::fs::read_to_string(out_dir.join("bi.cs")).unwrap();
    assert!(csharp.contains("public enum bi"));
    assert!(csharp.contains("Alarm,"));
}

#[test]
fn generate_without_override_completes() {
    let dir = TempDir::new().unwrap();
    let base_path = dir.path().join("base.json");
    std::fs::write(&base_path, r#"{"alarm": ["M1"], "ghost": null}"#).unwrap();

    let request = GenerateRequest {
        input: Some(base_path),
        out_dir: Some(dir.path().join("out")),
        json: Some(None),
        ..GenerateRequest::default()
    };
    let options = resolve_generate(&request, &FileConfig::default()).unwrap();
    let result = run_generate(&options).unwrap();

    assert_eq!(result.merged, 1);
    assert_eq!(result.omitted, vec!["ghost".to_string()]);
}

#[test]
fn generate_fails_on_missing_base_corpus() {
    let request = GenerateRequest {
        input: Some(PathBuf::from("/nonexistent/base.json")),
        ..GenerateRequest::default()
    };
    let options = resolve_generate(&request, &FileConfig::default()).unwrap();
    assert!(run_generate(&options).is_err());
}
