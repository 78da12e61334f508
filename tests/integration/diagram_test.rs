//! End-to-end tests over a fixture source tree
//!
//! Builds a small multi-package tree on disk, runs the full pipeline, and
//! checks the rendered diagram.

use gopuml::core::{Analysis, Analyzer};
use gopuml::error::GopumlError;
use gopuml::models::Settings;
use gopuml::output::{dump, puml};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_source(base: &Path, relative: &str, source: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, source).unwrap();
}

/// A tree with a struct-heavy package, a package with a function-type
/// declaration, and a globals-only package
fn create_fixture_tree(base: &Path) {
    write_source(
        base,
        "src/util/util.go",
        r#"package util

var Debug bool

// StripComment removes a trailing line comment.
func StripComment(line string) string {
	return line
}
"#,
    );

    write_source(
        base,
        "src/net/wire/frame.go",
        r#"package wire

type Frame struct {
	Kind string
	size int
}

func (f *Frame) Encode() []byte {
	return nil
}

type handler func(f Frame) error
"#,
    );

    write_source(
        base,
        "src/parser/parser.go",
        r#"package parser

import (
	"../util"
	w "../net/wire"
)

type Parser struct {
	Count int
}

func (p *Parser) Next() w.Frame {
	line := util.StripComment("x")
	_ = line
	var f w.Frame
	return f
}
"#,
    );
}

fn run(base: &Path, include_globals: bool) -> Analysis {
    let settings = Settings {
        scan_path: base.to_path_buf(),
        include_globals,
        ..Default::default()
    };
    Analyzer::new(settings).run().unwrap()
}

#[test]
fn test_full_pipeline_renders_expected_diagram() {
    let dir = TempDir::new().unwrap();
    create_fixture_tree(dir.path());

    let analysis = run(dir.path(), false);
    assert_eq!(analysis.file_count, 3);

    let rendered = puml::render(&analysis.model, &analysis.edges);

    assert!(rendered.starts_with("@startuml\n"));
    assert!(rendered.ends_with("@enduml\n"));

    // one namespace per module, nested paths spelled with dots
    assert!(rendered.contains("namespace net.wire {\n"));
    assert!(rendered.contains("namespace parser {\n"));
    assert!(rendered.contains("namespace util {\n"));

    // record class with visibility-partitioned members
    assert!(rendered.contains("\tclass net.wire.Frame << (S,Aquamarine) >> {\n"));
    assert!(rendered.contains("\t\t- size int\n"));
    assert!(rendered.contains("\t\t+ Kind string\n"));
    assert!(rendered.contains("\t\t+ Encode() []byte\n"));

    // function-type declaration gets the orange stereotype and a companion
    // class carrying the colored signature
    assert!(rendered.contains("\tclass net.wire.handler << (T, #FF7700) >> {\n"));
    assert!(rendered
        .contains("class \"<font color=blue>func</font>(f Frame) error \" as net.wire.funcfFrameerror {"));
    assert!(rendered.contains("\"net.wire.funcfFrameerror\" #.. \"handler\"\n"));

    // globals aggregate into the per-package holder
    assert!(rendered.contains("\tclass util.UtilGlobal << (G,Green) >> {\n"));
    assert!(rendered.contains("\t\t+ Debug bool\n"));
    assert!(rendered.contains("\t\t+ StripComment(line string) string\n"));

    // the only surviving edge: Parser uses Frame through the renamed import
    assert!(rendered.contains("parser.Parser --> net.wire.Frame\n"));
    assert!(!rendered.contains("UtilGlobal\n@enduml"));
    assert_eq!(analysis.edges.len(), 1);
}

#[test]
fn test_include_globals_adds_holder_edge() {
    let dir = TempDir::new().unwrap();
    create_fixture_tree(dir.path());

    let analysis = run(dir.path(), true);
    let rendered: Vec<String> = analysis.edges.iter().map(|e| e.render()).collect();

    assert!(rendered.contains(&"parser.Parser --> net.wire.Frame".to_string()));
    // util.StripComment is not a declared type, so the reference redirects
    // to the package's global holder
    assert!(rendered.contains(&"parser.Parser --> util.UtilGlobal".to_string()));
}

#[test]
fn test_output_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    create_fixture_tree(dir.path());

    let first = run(dir.path(), false);
    let second = run(dir.path(), false);
    assert_eq!(
        puml::render(&first.model, &first.edges),
        puml::render(&second.model, &second.edges)
    );
}

#[test]
fn test_dump_renders_model_as_json() {
    let dir = TempDir::new().unwrap();
    create_fixture_tree(dir.path());

    let analysis = run(dir.path(), false);
    let text = dump::render(&analysis.model, &analysis.edges).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["model"]["modules"]["net/wire"]["entities"]["Frame"].is_object());
    assert_eq!(value["relationships"][0]["from"], "parser.Parser");
    assert_eq!(value["relationships"][0]["to"], "net/wire.Frame");
}

#[test]
fn test_malformed_source_fails_with_location() {
    let dir = TempDir::new().unwrap();
    write_source(
        dir.path(),
        "src/a/a.go",
        "package a\n\nimport (\n\tw netwire\n)\n",
    );

    let settings = Settings {
        scan_path: dir.path().to_path_buf(),
        ..Default::default()
    };
    let err = Analyzer::new(settings).run().unwrap_err();
    // extraction errors fail the run but are not critical
    assert!(!err.is_critical());
    match err {
        GopumlError::MalformedImport { file, line_no, .. } => {
            assert_eq!(file, "a/a.go");
            assert_eq!(line_no, 4);
        }
        other => panic!("expected MalformedImport, got {other:?}"),
    }
}

#[test]
fn test_file_outside_source_root_is_unresolvable() {
    let dir = TempDir::new().unwrap();
    write_source(dir.path(), "lib/a/a.go", "package a\n");

    let settings = Settings {
        scan_path: dir.path().to_path_buf(),
        ..Default::default()
    };
    let err = Analyzer::new(settings).run().unwrap_err();
    assert!(matches!(err, GopumlError::FileUnresolvable { .. }));
}
