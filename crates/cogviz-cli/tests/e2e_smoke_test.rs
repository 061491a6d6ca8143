use std::fs;

use tempfile::tempdir;

use cogviz_cli::Args;

const STATE: &str = r#"{
    "mode": "stabilization",
    "objects": [
        {"id": "goal", "nom": "Ship release", "type": "OBJECTIF", "poids": 0.9},
        {"id": "tests", "nom": "Green tests", "type": "CONTRAINTE", "relations": ["goal"]},
        {"id": "docs", "nom": "Docs", "type": "TASK", "relations": ["Green tests"]},
        {"id": "note", "nom": "Loose note", "type": "NOTE"}
    ]
}"#;

fn args(input: &str, output: &str, extra: &[&str]) -> Args {
    let mut argv = vec!["cogviz", input, "-o", output, "--log-level", "off"];
    argv.extend_from_slice(extra);
    <Args as clap::Parser>::try_parse_from(argv).expect("valid arguments")
}

#[test]
fn e2e_json_state_renders_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("state.json");
    let output = temp_dir.path().join("state.svg");
    fs::write(&input, STATE).unwrap();

    for mode in ["force", "dag"] {
        let cfg = args(
            &input.to_string_lossy(),
            &output.to_string_lossy(),
            &["--mode", mode, "--max-ticks", "400"],
        );
        cogviz_cli::run(&cfg).expect("rendering succeeds");

        let svg = fs::read_to_string(&output).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.matches("<line").count() >= 2);
        assert!(svg.contains(&format!("LAYOUT :: {}", mode.to_uppercase())));
    }
}

#[test]
fn e2e_bare_array_renders_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("objects.json");
    let output = temp_dir.path().join("objects.svg");
    fs::write(
        &input,
        r#"[{"id": "a", "nom": "A", "type": "FACT"}, {"id": "b", "nom": "B", "type": "HYPOTHESIS"}]"#,
    )
    .unwrap();

    let cfg = args(&input.to_string_lossy(), &output.to_string_lossy(), &[]);
    cogviz_cli::run(&cfg).expect("rendering succeeds");

    let svg = fs::read_to_string(&output).unwrap();
    assert_eq!(svg.matches("<circle").count(), 2);
}

#[test]
fn e2e_empty_input_renders_placeholder() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("empty.json");
    let output = temp_dir.path().join("empty.svg");
    fs::write(&input, "[]").unwrap();

    let cfg = args(&input.to_string_lossy(), &output.to_string_lossy(), &[]);
    cogviz_cli::run(&cfg).expect("rendering succeeds");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains(cogviz::export::svg::PLACEHOLDER_TEXT));
    assert!(!svg.contains("<circle"));
}

#[test]
fn e2e_bad_json_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.json");
    let output = temp_dir.path().join("broken.svg");
    fs::write(&input, "{\"objects\": [").unwrap();

    let cfg = args(&input.to_string_lossy(), &output.to_string_lossy(), &[]);

    assert!(matches!(
        cogviz_cli::run(&cfg),
        Err(cogviz::CogvizError::Input(_))
    ));
    assert!(!output.exists());
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("missing.svg");

    let cfg = args("/definitely/not/here.json", &output.to_string_lossy(), &[]);

    assert!(matches!(
        cogviz_cli::run(&cfg),
        Err(cogviz::CogvizError::Io(_))
    ));
}

#[test]
fn e2e_zero_width_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("state.json");
    let output = temp_dir.path().join("state.svg");
    fs::write(&input, STATE).unwrap();

    let cfg = args(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        &["--width", "0"],
    );

    assert!(matches!(
        cogviz_cli::run(&cfg),
        Err(cogviz::CogvizError::Config(_))
    ));
    assert!(!output.exists());
}
