use std::fs;

use tempfile::tempdir;

use flowsheet::{Catalog, FlowsheetError};
use flowsheet_cli::{Args, run};

fn args(diagram: Option<&str>, output: String) -> Args {
    Args {
        diagram: diagram.map(str::to_string),
        output,
        highlight: None,
        config: None,
        catalog: None,
        list: false,
        check: false,
        log_level: "off".to_string(),
    }
}

const BAD_TABLES: &str = r#"
[[diagram]]
id = "scratch"
title = "Scratch pad"

[[diagram.node]]
id = "feed"
name = "Feed"
shape = "cylinder"
fill = "sea-ish"
x = 0
y = 0
width = 80
height = 80

[[diagram.edge]]
from = "feed"
to = "drain"
"#;

#[test]
fn e2e_smoke_test_builtin_diagrams() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut failed = Vec::new();
    for diagram in Catalog::builtin().iter() {
        let id = diagram.id().as_string();
        let output_path = temp_dir.path().join(format!("{id}.svg"));

        let mut args = args(Some(&id), output_path.to_string_lossy().to_string());
        args.highlight = diagram.nodes().first().map(|node| node.id().as_string());

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("SVG was written");
                assert_eq!(
                    svg.matches("data-node-id=").count(),
                    diagram.nodes().len(),
                    "{id}"
                );
            }
            Err(err) => failed.push((id, err)),
        }
    }

    if !failed.is_empty() {
        for (id, err) in &failed {
            eprintln!("  - {id}: {err}");
        }
        panic!("{} built-in diagram(s) failed to render", failed.len());
    }
}

#[test]
fn e2e_unknown_diagram_fails() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("unknown.svg");

    let result = run(&args(Some("activated-sludge"), output_path.to_string_lossy().to_string()));

    assert!(matches!(result, Err(FlowsheetError::UnknownDiagram(_))));
    assert!(!output_path.exists());
}

#[test]
fn e2e_unknown_diagram_check_fails() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("unknown.svg");

    let mut check = args(Some("activated-sludge"), output_path.to_string_lossy().to_string());
    check.check = true;

    let result = run(&check);
    assert!(matches!(result, Err(FlowsheetError::UnknownDiagram(id)) if id == "activated-sludge"));
    assert!(!output_path.exists());
}

#[test]
fn e2e_list_writes_nothing() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("listed.svg");

    let mut list = args(Some("reverse-osmosis"), output_path.to_string_lossy().to_string());
    list.list = true;
    run(&list).expect("listing succeeds");

    let no_id = args(None, output_path.to_string_lossy().to_string());
    run(&no_id).expect("listing succeeds");

    assert!(!output_path.exists());
}

#[test]
fn e2e_check_builtin_is_clean() {
    let temp_dir = tempdir().unwrap();
    let mut check = args(
        Some("anaerobic-digestion"),
        temp_dir.path().join("unused.svg").to_string_lossy().to_string(),
    );
    check.check = true;

    run(&check).expect("built-in diagrams have no findings");
}

#[test]
fn e2e_check_reports_findings_from_extra_tables() {
    let temp_dir = tempdir().unwrap();
    let tables = temp_dir.path().join("scratch.toml");
    fs::write(&tables, BAD_TABLES).unwrap();

    let mut check = args(
        Some("scratch"),
        temp_dir.path().join("unused.svg").to_string_lossy().to_string(),
    );
    check.catalog = Some(tables.to_string_lossy().to_string());
    check.check = true;

    match run(&check) {
        Err(FlowsheetError::Check {
            diagram,
            diagnostics,
        }) => {
            assert_eq!(diagram, "scratch");
            assert_eq!(diagnostics.len(), 3);
        }
        other => panic!("Expected check findings, got {other:?}"),
    }
}

#[test]
fn e2e_extra_tables_render_silently() {
    let temp_dir = tempdir().unwrap();
    let tables = temp_dir.path().join("scratch.toml");
    fs::write(&tables, BAD_TABLES).unwrap();
    let output_path = temp_dir.path().join("scratch.svg");

    let mut render = args(Some("scratch"), output_path.to_string_lossy().to_string());
    render.catalog = Some(tables.to_string_lossy().to_string());

    run(&render).expect("bad data still renders");
    let svg = fs::read_to_string(&output_path).unwrap();
    assert_eq!(svg.matches("data-node-id=").count(), 1);
    assert!(svg.contains(r#"d="""#));
}

#[test]
fn e2e_config_file_applies() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nbackground_color = \"ivory\"\nmargin = 10\n").unwrap();
    let output_path = temp_dir.path().join("styled.svg");

    let mut render = args(Some("reverse-osmosis"), output_path.to_string_lossy().to_string());
    render.config = Some(config_path.to_string_lossy().to_string());

    run(&render).expect("styled render succeeds");
    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains(r#"fill="ivory""#));
}

#[test]
fn e2e_invalid_tables_fail() {
    let temp_dir = tempdir().unwrap();
    let tables = temp_dir.path().join("broken.toml");
    fs::write(&tables, "[[diagram]]\ntitle = 3\n").unwrap();

    let mut render = args(
        Some("membrane-bioreactor"),
        temp_dir.path().join("out.svg").to_string_lossy().to_string(),
    );
    render.catalog = Some(tables.to_string_lossy().to_string());

    assert!(matches!(run(&render), Err(FlowsheetError::Catalog(_))));
}
