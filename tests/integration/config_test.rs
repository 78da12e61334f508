//! Configuration precedence and init tests

use clap::Parser;
use gopuml::cli::args::Args;
use gopuml::config::{
    create_default_config, parse_config_file, CliConfig, ConfigBuilder, ConfigSource,
};
use gopuml::error::GopumlError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_beats_file_beats_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".gopuml.toml");
    fs::write(
        &config_path,
        format!(
            "scan_path = \"{}\"\nsource_root = \"code\"\ninclude_globals = true\n",
            dir.path().display()
        ),
    )
    .unwrap();

    let args = Args::parse_from(["gopuml", "--source-root", "lib"]);
    let cli = CliConfig::from_args(&args);

    let settings = ConfigBuilder::new()
        .merge(parse_config_file(&config_path).unwrap())
        .load_from(&cli)
        .unwrap()
        .build()
        .unwrap();

    // CLI wins
    assert_eq!(settings.source_root, "lib");
    // file fills what the CLI left unset
    assert!(settings.include_globals);
    // defaults fill the rest
    assert_eq!(settings.extension, "go");
}

#[test]
fn test_absent_cli_flag_does_not_mask_file_value() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".gopuml.toml");
    fs::write(
        &config_path,
        format!("scan_path = \"{}\"\nquiet = true\n", dir.path().display()),
    )
    .unwrap();

    let args = Args::parse_from(["gopuml"]);
    let settings = ConfigBuilder::new()
        .merge(parse_config_file(&config_path).unwrap())
        .load_from(&CliConfig::from_args(&args))
        .unwrap()
        .build()
        .unwrap();

    assert!(settings.quiet);
}

#[test]
fn test_init_file_parses_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".gopuml.toml");
    create_default_config(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# gopuml configuration"));
    assert!(content.contains("# include_globals = false"));

    // the template is all comments, so it must parse to an empty partial
    let partial = parse_config_file(&path).unwrap();
    assert!(partial.scan_path.is_none());
}

#[test]
fn test_validation_rejects_bad_settings() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".gopuml.toml");
    fs::write(
        &config_path,
        format!(
            "scan_path = \"{}\"\nextension = \".go\"\n",
            dir.path().display()
        ),
    )
    .unwrap();

    let err = ConfigBuilder::new()
        .merge(parse_config_file(&config_path).unwrap())
        .build()
        .unwrap_err();

    assert!(matches!(err, GopumlError::Config { .. }));
    assert!(err.is_critical());
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let err = parse_config_file("/no/such/gopuml.toml").unwrap_err();
    assert!(matches!(err, GopumlError::ConfigNotFound { .. }));
}
